//! Menu catalog with search filtering.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// One orderable item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    pub image: String,
}

/// A named group of menu items (e.g. "Hot Beverages").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The full menu, as an ordered list of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    /// Create a menu from its categories.
    #[must_use]
    pub const fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// The categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Look up an item by name, case-insensitively.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Filter the menu by a search term.
    ///
    /// Matches item names case-insensitively on a substring basis, the same
    /// rule the storefront search box applies. Categories that end up with
    /// no matching items are dropped. An empty query returns everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<MenuCategory> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.categories.clone();
        }

        self.categories
            .iter()
            .filter_map(|category| {
                let items: Vec<MenuItem> = category
                    .items
                    .iter()
                    .filter(|item| item.name.to_lowercase().contains(&query))
                    .cloned()
                    .collect();

                if items.is_empty() {
                    None
                } else {
                    Some(MenuCategory {
                        name: category.name.clone(),
                        items,
                    })
                }
            })
            .collect()
    }
}
