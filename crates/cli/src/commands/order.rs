//! Interactive ordering session.
//!
//! Maps terminal commands onto cart operations the way the storefront's
//! click handlers do: `+`, `-`, and `rm` take the 1-based position a line
//! had in the most recent `cart` listing, which is stable until the next
//! mutation.

use std::io::{self, Write as _};

use urban_brew_client::{CheckoutError, CheckoutSubmitter, OrderApiConfig, OrderClient};
use urban_brew_core::{AddressFields, Cart, CartView, Menu, ShippingAddress};

use crate::catalog;
use crate::commands::menu::print_categories;

const HELP: &str = "\
Commands:
  menu               show the full menu
  search <term>      filter the menu
  add <item>         add one unit of a menu item to the cart
  + <n>              increase quantity of cart line n
  - <n>              decrease quantity of cart line n (removes at zero)
  rm <n>             remove cart line n
  cart               show the cart
  checkout           place the order
  help               show this help
  quit               leave without ordering";

/// Run the interactive ordering session until checkout or quit.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = OrderApiConfig::from_env()?;
    let mut submitter = CheckoutSubmitter::new(OrderClient::new(&config));
    let menu = catalog::menu();
    let mut cart = Cart::new();

    println!("Welcome to Urban Brew Cafe! Type 'help' for commands.");

    loop {
        let Some(line) = prompt("> ")? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "menu" => print_categories(menu.categories()),
            "search" => {
                let results = menu.search(rest);
                if results.is_empty() {
                    println!("No menu items match your search.");
                } else {
                    print_categories(&results);
                }
            }
            "add" => add_item(&menu, &mut cart, rest),
            "+" => {
                if let Some(index) = parse_index(rest) {
                    cart.change_quantity(index, 1);
                    print_cart(&cart);
                }
            }
            "-" => {
                if let Some(index) = parse_index(rest) {
                    cart.change_quantity(index, -1);
                    print_cart(&cart);
                }
            }
            "rm" => {
                if let Some(index) = parse_index(rest) {
                    cart.remove_item(index);
                    print_cart(&cart);
                }
            }
            "cart" => print_cart(&cart),
            "checkout" => checkout(&mut submitter, &mut cart).await?,
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }

    Ok(())
}

fn add_item(menu: &Menu, cart: &mut Cart, name: &str) {
    if name.is_empty() {
        println!("Which item? e.g. `add Cappuccino`");
        return;
    }

    match menu.find_item(name) {
        Some(item) => {
            cart.add_item(item.name.clone(), item.price, item.image.clone());
            let summary = cart.summary();
            println!(
                "Added {} ({}). Cart: {} items, total {}",
                item.name,
                item.price,
                summary.total_items,
                summary.total
            );
        }
        None => println!("No menu item named '{name}'. Try `search {name}`."),
    }
}

fn print_cart(cart: &Cart) {
    let view = CartView::from(cart);

    if view.items.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for (position, line) in view.items.iter().enumerate() {
        println!(
            "{:>2}. {:<20} {} × {} = {}",
            position + 1,
            line.name,
            line.unit_price,
            line.quantity,
            line.line_total
        );
    }
    println!(
        "{} items  |  Subtotal {}  Tax {}  Total {}",
        view.item_count, view.subtotal, view.tax, view.total
    );
}

/// Collect address fields, validate, submit, and report the outcome.
///
/// Validation failures and backend rejections leave the cart untouched so
/// the user can fix the input and check out again.
async fn checkout(submitter: &mut CheckoutSubmitter, cart: &mut Cart) -> io::Result<()> {
    if cart.is_empty() {
        println!("Your cart is empty! Please add items to place an order.");
        return Ok(());
    }

    print_cart(cart);

    let Some(fields) = read_address_fields()? else {
        return Ok(());
    };
    let address = match ShippingAddress::parse(&fields) {
        Ok(address) => address,
        Err(e) => {
            println!("Invalid address: {e}");
            return Ok(());
        }
    };

    println!("Placing order...");
    match submitter.submit(cart, &address).await {
        Ok(confirmation) => {
            println!("{}", confirmation.message);
            if let Some(order_id) = confirmation.order_id {
                println!("Order ID: #{order_id}");
            }
        }
        Err(CheckoutError::Rejected(message)) => println!("Order not placed: {message}"),
        Err(e @ (CheckoutError::EmptyCart | CheckoutError::SubmissionInFlight)) => {
            println!("{e}");
        }
        Err(CheckoutError::Transport(e)) => {
            tracing::error!(error = %e, "order submission failed");
            println!("Failed to place order. Please try again or contact support.");
        }
    }

    Ok(())
}

fn read_address_fields() -> io::Result<Option<AddressFields>> {
    let Some(name) = prompt("Name: ")? else {
        return Ok(None);
    };
    let Some(phone) = prompt("Phone (10 digits): ")? else {
        return Ok(None);
    };
    let Some(address_line) = prompt("Address: ")? else {
        return Ok(None);
    };
    let Some(city) = prompt("City: ")? else {
        return Ok(None);
    };
    let Some(pincode) = prompt("Pincode (6 digits): ")? else {
        return Ok(None);
    };

    Ok(Some(AddressFields {
        name,
        phone,
        address_line,
        city,
        pincode,
    }))
}

/// Convert a 1-based cart position into an index, reporting bad input.
fn parse_index(input: &str) -> Option<usize> {
    let index = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
    if index.is_none() {
        println!("Give a cart line number, e.g. `rm 1`");
    }
    index
}

/// Read one line from stdin. Returns `None` on end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end().to_string()))
}
