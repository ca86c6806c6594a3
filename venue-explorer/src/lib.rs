//! Indoor venue explorer.
//!
//! Search for places in a venue, filter them by category, switch floors and
//! ask for walking directions between two places. Map rendering and route
//! computation belong to the mapping SDK; this crate holds the logic around
//! it and a small web shell for the screens.

pub mod config;
pub mod controller;
pub mod domain;
pub mod routing;
pub mod sdk;
pub mod search;
pub mod web;
