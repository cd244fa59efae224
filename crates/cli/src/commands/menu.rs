//! Menu printing command.

use urban_brew_core::MenuCategory;

use crate::catalog;

/// Print the menu, optionally filtered by a search term.
pub fn show(search: Option<&str>) {
    let menu = catalog::menu();

    let categories = match search {
        Some(term) => menu.search(term),
        None => menu.categories().to_vec(),
    };

    if categories.is_empty() {
        println!("No menu items match your search.");
        return;
    }

    print_categories(&categories);
}

pub fn print_categories(categories: &[MenuCategory]) {
    for category in categories {
        println!("\n{}", category.name);
        println!("{}", "-".repeat(category.name.len()));
        for item in &category.items {
            println!("  {:<20} {}", item.name, item.price);
        }
    }
}
