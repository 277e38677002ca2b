//! # Catalog Commands
//!
//! Browsing restaurants and menus, plus the favorite heart and the detail
//! page buttons that only raise a toast.

use serde::Serialize;
use tracing::debug;

use monngon_core::{Category, MenuItem, Restaurant, Severity, View, DEFAULT_MENU_CATEGORY};

use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::state::AppState;
use crate::storefront::Storefront;

/// Restaurant detail page contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub restaurant: Option<Restaurant>,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub items: Vec<MenuItem>,
}

fn with_favorite(state: &AppState, restaurant: &Restaurant) -> Restaurant {
    let mut restaurant = restaurant.clone();
    restaurant.is_favorite = state.favorites.contains(&restaurant.id);
    restaurant
}

fn menu_response(state: &AppState) -> MenuResponse {
    let catalog = state.catalog();
    let restaurant = state
        .selected_restaurant
        .as_deref()
        .and_then(|id| catalog.restaurant(id).ok())
        .map(|r| with_favorite(state, r));

    MenuResponse {
        restaurant,
        categories: catalog.menu_categories().into_iter().map(str::to_string).collect(),
        selected_category: state.menu_category.clone(),
        items: catalog
            .menu_in_category(state.menu_category.as_deref())
            .into_iter()
            .cloned()
            .collect(),
    }
}

pub fn list_categories(app: &Storefront) -> Vec<Category> {
    app.read(|s| s.catalog().categories().to_vec())
}

/// All restaurants, with the current favorite flags.
pub fn list_restaurants(app: &Storefront) -> Vec<Restaurant> {
    app.read(|s| {
        s.catalog()
            .restaurants()
            .iter()
            .map(|r| with_favorite(s, r))
            .collect()
    })
}

/// Opens a restaurant page on its default menu section.
pub fn open_restaurant(app: &Storefront, restaurant_id: &str) -> ApiResult<MenuResponse> {
    debug!(restaurant_id = %restaurant_id, "open_restaurant command");

    let result = app.update(|s| {
        s.catalog().restaurant(restaurant_id)?;
        s.selected_restaurant = Some(restaurant_id.to_string());
        s.menu_category = Some(DEFAULT_MENU_CATEGORY.to_string());
        s.navigate(View::RestaurantDetail);
        Ok::<_, ApiError>(menu_response(s))
    });

    app.surface(result)
}

pub fn restaurant_menu(app: &Storefront) -> MenuResponse {
    app.read(menu_response)
}

/// Switches the menu section; `None` shows every dish.
///
/// Matching is exact, so an unknown section lists nothing.
pub fn select_menu_category(app: &Storefront, category: Option<&str>) -> MenuResponse {
    debug!(category = ?category, "select_menu_category command");
    app.update(|s| {
        s.menu_category = category.map(str::to_string);
        menu_response(s)
    })
}

/// Flips the heart on a restaurant card.
///
/// ## Returns
/// Whether the restaurant is now a favorite.
pub fn toggle_favorite(app: &Storefront, restaurant_id: &str) -> ApiResult<bool> {
    debug!(restaurant_id = %restaurant_id, "toggle_favorite command");

    let result = app.update(|s| {
        let name = s.catalog().restaurant(restaurant_id)?.name.clone();
        let favorite = if s.favorites.remove(restaurant_id) {
            false
        } else {
            s.favorites.insert(restaurant_id.to_string());
            true
        };
        s.notify(messages::favorite_toggled(&name, favorite), Severity::Info);
        Ok::<_, ApiError>(favorite)
    });

    app.surface(result)
}

/// The filter button on the search results page.
pub fn advanced_filter(app: &Storefront) -> ApiResult<()> {
    app.surface(Err(ApiError::unavailable(messages::ADVANCED_FILTER_UNAVAILABLE)))
}

/// "Đặt chỗ ngay" on the restaurant page.
pub fn request_table_booking(app: &Storefront) {
    debug!("request_table_booking command");
    app.notify(messages::TABLE_BOOKING_SENT, Severity::Info);
}

/// The map view has no live collaborator behind it.
pub fn map_placeholder() -> &'static str {
    messages::MAP_PLACEHOLDER
}
