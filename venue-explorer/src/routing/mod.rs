//! Source/destination selection for walking directions.

mod search_bar;

pub use search_bar::{SearchBar, SearchBarEvent, SearchBarListener, SearchBarMode};
