//! Location categories.

use super::CategoryId;

/// A classification tag attachable to a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// `None` only for the synthetic "All" filter.
    pub id: Option<CategoryId>,
    pub name: String,
    /// Icon class name, used for presentation only.
    pub icon_name: Option<String>,
}

impl Category {
    /// Create a category with an id and no icon.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            icon_name: None,
        }
    }

    /// Attach an icon name.
    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }

    /// The icon group this category is displayed with.
    pub fn icon(&self) -> CategoryIcon {
        CategoryIcon::from_name(self.icon_name.as_deref())
    }
}

/// Icon groups for category chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Restaurant,
    Shopping,
    Services,
    Entertainment,
    Generic,
}

impl CategoryIcon {
    /// Map an SDK icon name to an icon group, case-insensitively.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return CategoryIcon::Generic;
        };

        match name.to_lowercase().as_str() {
            "restaurant" | "food" | "dining" | "cafe" | "coffee" => CategoryIcon::Restaurant,
            "shopping" | "retail" | "store" | "shop" => CategoryIcon::Shopping,
            "services" | "service" | "bank" | "atm" | "information" => CategoryIcon::Services,
            "entertainment" | "cinema" | "movie" | "theater" | "games" => {
                CategoryIcon::Entertainment
            }
            _ => CategoryIcon::Generic,
        }
    }

    /// CSS class suffix used by the web templates.
    pub fn css_class(self) -> &'static str {
        match self {
            CategoryIcon::Restaurant => "restaurant",
            CategoryIcon::Shopping => "shopping",
            CategoryIcon::Services => "services",
            CategoryIcon::Entertainment => "entertainment",
            CategoryIcon::Generic => "generic",
        }
    }
}
