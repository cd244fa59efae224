//! Built-in Urban Brew Cafe menu.
//!
//! The cafe's menu is small and changes rarely, so it ships with the
//! binary. Image paths are references into the storefront's static assets.

use urban_brew_core::{Menu, MenuCategory, MenuItem, Price};

fn item(name: &str, price: u64, slug: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        price: Price::new(price),
        image: format!("/static/images/{slug}.jpg"),
    }
}

/// The current Urban Brew Cafe menu.
#[must_use]
pub fn menu() -> Menu {
    Menu::new(vec![
        MenuCategory {
            name: "Hot Beverages".to_string(),
            items: vec![
                item("Espresso", 80, "espresso"),
                item("Cappuccino", 100, "cappuccino"),
                item("Cafe Latte", 110, "cafe-latte"),
                item("Masala Chai", 50, "masala-chai"),
                item("Hot Chocolate", 120, "hot-chocolate"),
            ],
        },
        MenuCategory {
            name: "Cold Beverages".to_string(),
            items: vec![
                item("Cold Coffee", 120, "cold-coffee"),
                item("Iced Latte", 130, "iced-latte"),
                item("Fresh Lime Soda", 60, "lime-soda"),
                item("Mango Smoothie", 140, "mango-smoothie"),
            ],
        },
        MenuCategory {
            name: "Snacks".to_string(),
            items: vec![
                item("Veg Sandwich", 90, "veg-sandwich"),
                item("Paneer Wrap", 130, "paneer-wrap"),
                item("French Fries", 80, "french-fries"),
                item("Garlic Bread", 100, "garlic-bread"),
            ],
        },
        MenuCategory {
            name: "Desserts".to_string(),
            items: vec![
                item("Chocolate Brownie", 110, "chocolate-brownie"),
                item("Blueberry Muffin", 90, "blueberry-muffin"),
                item("Cheesecake", 150, "cheesecake"),
            ],
        },
    ])
}
