//! # Console Shell
//!
//! Line-oriented stand-in for the presentation layer. Each input line is
//! parsed into a [`Command`] and dispatched to the commands layer; the
//! reply is plain text or pretty JSON.
//!
//! ```text
//! > open 1
//! > add m1
//! > view checkout
//! > order
//! ```

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use monngon_core::{MerchantTab, OrderConfirmation, ToastId, View};

use crate::commands::{assistant, auth, cart, catalog, checkout, merchant, nav, notifications};
use crate::error::ApiResult;
use crate::messages;
use crate::storefront::Storefront;

pub const HELP: &str = "\
Điều hướng:   view [name] | map
Nhà hàng:     restaurants | categories | open <id> | menu [category|all] | favorite <id> | filter | book-table
Giỏ hàng:     add <id> | inc <id> | dec <id> | remove <id> | cart
Thanh toán:   checkout | order | receipt
Tài khoản:    login <email> <password> | social <provider> | logout | rename <name>
Gợi ý món:    suggest <prompt> | suggestion
Thông báo:    toasts | dismiss <id>
Đối tác:      dashboard | tab <name> | confirm <id> | reject <id> | delete-item <id> | add-item
Khác:         config | dump | help | quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: {reason}")]
    InvalidArgument { command: &'static str, reason: String },
}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ShowView,
    Navigate(View),
    Map,
    Restaurants,
    Categories,
    Open(String),
    Menu(Option<String>),
    Favorite(String),
    Filter,
    BookTable,
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Cart,
    Checkout,
    PlaceOrder,
    Receipt,
    Login { email: String, password: String },
    Social(String),
    Logout,
    Rename(String),
    Suggest(String),
    Suggestion,
    Toasts,
    Dismiss(ToastId),
    Dashboard,
    Tab(MerchantTab),
    Confirm(u32),
    Reject(u32),
    DeleteItem(String),
    AddItem,
    Config,
    Dump,
    Quit,
}

fn required<'a>(arg: Option<&'a str>, command: &'static str, argument: &'static str) -> Result<&'a str, ParseError> {
    arg.filter(|a| !a.is_empty())
        .ok_or(ParseError::MissingArgument { command, argument })
}

fn number<T: FromStr>(arg: Option<&str>, command: &'static str, argument: &'static str) -> Result<T, ParseError> {
    let raw = required(arg, command, argument)?;
    raw.parse().map_err(|_| ParseError::InvalidArgument {
        command,
        reason: format!("'{}' is not a number", raw),
    })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line, None),
        };
        let first = rest.and_then(|r| r.split_whitespace().next());

        let command = match name.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "help" | "?" => Command::Help,
            "view" => match rest.filter(|r| !r.is_empty()) {
                None => Command::ShowView,
                Some(target) => Command::Navigate(
                    target
                        .parse()
                        .map_err(|reason| ParseError::InvalidArgument { command: "view", reason })?,
                ),
            },
            "map" => Command::Map,
            "restaurants" => Command::Restaurants,
            "categories" => Command::Categories,
            "open" => Command::Open(required(first, "open", "restaurant-id")?.to_string()),
            "menu" => match rest.filter(|r| !r.is_empty()) {
                None => Command::Menu(None),
                Some("all") => Command::Menu(None),
                Some(category) => Command::Menu(Some(category.to_string())),
            },
            "favorite" | "fav" => Command::Favorite(required(first, "favorite", "restaurant-id")?.to_string()),
            "filter" => Command::Filter,
            "book-table" => Command::BookTable,
            "add" => Command::Add(required(first, "add", "item-id")?.to_string()),
            "inc" => Command::Increment(required(first, "inc", "item-id")?.to_string()),
            "dec" => Command::Decrement(required(first, "dec", "item-id")?.to_string()),
            "remove" | "rm" => Command::Remove(required(first, "remove", "item-id")?.to_string()),
            "cart" => Command::Cart,
            "checkout" => Command::Checkout,
            "order" => Command::PlaceOrder,
            "receipt" => Command::Receipt,
            "login" => {
                // Blank credentials are a validation error, not a parse error.
                let mut parts = rest.unwrap_or_default().split_whitespace();
                Command::Login {
                    email: parts.next().unwrap_or_default().to_string(),
                    password: parts.next().unwrap_or_default().to_string(),
                }
            }
            "social" => Command::Social(required(first, "social", "provider")?.to_string()),
            "logout" => Command::Logout,
            "rename" => Command::Rename(rest.unwrap_or_default().to_string()),
            "suggest" => Command::Suggest(rest.unwrap_or_default().to_string()),
            "suggestion" => Command::Suggestion,
            "toasts" => Command::Toasts,
            "dismiss" => Command::Dismiss(number(first, "dismiss", "toast-id")?),
            "dashboard" => Command::Dashboard,
            "tab" => Command::Tab(
                required(first, "tab", "name")?
                    .parse()
                    .map_err(|reason| ParseError::InvalidArgument { command: "tab", reason })?,
            ),
            "confirm" => Command::Confirm(number(first, "confirm", "booking-id")?),
            "reject" => Command::Reject(number(first, "reject", "booking-id")?),
            "delete-item" => Command::DeleteItem(required(first, "delete-item", "item-id")?.to_string()),
            "add-item" => Command::AddItem,
            "config" => Command::Config,
            "dump" => Command::Dump,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("serialization failed: {}", e))
}

fn render<T: Serialize>(result: ApiResult<T>) -> String {
    match result {
        Ok(value) => json(&value),
        Err(e) => format!("error {}", e),
    }
}

fn receipt(order: Option<OrderConfirmation>) -> String {
    match order {
        Some(order) => format!("{}\n{}", messages::order_code(&order.short_code()), json(&order)),
        None => messages::NO_ORDER_YET.to_string(),
    }
}

fn done(result: ApiResult<()>) -> String {
    match result {
        Ok(()) => "ok".to_string(),
        Err(e) => format!("error {}", e),
    }
}

/// Runs one command against the storefront.
pub fn execute(app: &Storefront, command: Command) -> Reply {
    debug!(?command, "console command");

    let text = match command {
        Command::Help => HELP.to_string(),
        Command::ShowView => json(&nav::current_view(app)),
        Command::Navigate(view) => json(&nav::navigate(app, view)),
        Command::Map => {
            nav::navigate(app, View::MapDiscovery);
            catalog::map_placeholder().to_string()
        }
        Command::Restaurants => json(&catalog::list_restaurants(app)),
        Command::Categories => json(&catalog::list_categories(app)),
        Command::Open(id) => render(catalog::open_restaurant(app, &id)),
        Command::Menu(category) => json(&catalog::select_menu_category(app, category.as_deref())),
        Command::Favorite(id) => render(catalog::toggle_favorite(app, &id)),
        Command::Filter => done(catalog::advanced_filter(app)),
        Command::BookTable => {
            catalog::request_table_booking(app);
            "ok".to_string()
        }
        Command::Add(id) => render(cart::add_to_cart(app, &id)),
        Command::Increment(id) => json(&cart::update_cart_item(app, &id, 1)),
        Command::Decrement(id) => json(&cart::update_cart_item(app, &id, -1)),
        Command::Remove(id) => json(&cart::remove_from_cart(app, &id)),
        Command::Cart => json(&cart::get_cart(app)),
        Command::Checkout => json(&checkout::checkout_view(app)),
        Command::PlaceOrder => done(checkout::place_order(app)),
        Command::Receipt => receipt(checkout::last_order(app)),
        Command::Login { email, password } => done(auth::login(app, &email, &password)),
        Command::Social(provider) => done(auth::social_login(app, &provider)),
        Command::Logout => {
            auth::logout(app);
            "ok".to_string()
        }
        Command::Rename(name) => render(auth::save_profile(app, &name)),
        Command::Suggest(prompt) => done(assistant::request_suggestion(app, &prompt)),
        Command::Suggestion => json(&assistant::current_suggestion(app)),
        Command::Toasts => json(&notifications::list_toasts(app)),
        Command::Dismiss(id) => json(&notifications::dismiss_toast(app, id)),
        Command::Dashboard => render(merchant::merchant_dashboard(app)),
        Command::Tab(tab) => render(merchant::select_tab(app, tab)),
        Command::Confirm(id) => render(merchant::confirm_booking(app, id).map(|t| format!("{:?}", t))),
        Command::Reject(id) => render(merchant::reject_booking(app, id).map(|t| format!("{:?}", t))),
        Command::DeleteItem(id) => render(merchant::delete_menu_item(app, &id)),
        Command::AddItem => done(merchant::add_menu_item(app)),
        Command::Config => app
            .config()
            .to_toml()
            .unwrap_or_else(|e| format!("error {}", e)),
        Command::Dump => json(&app.snapshot()),
        Command::Quit => return Reply::Quit,
    };

    Reply::Text(text)
}
