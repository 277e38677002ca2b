//! # Catalog Store
//!
//! Static, read-only categories, restaurants and menu items.
//!
//! The catalog is built once at startup and shared by reference. Nothing in
//! the storefront mutates it: the merchant dashboard works on its own copy
//! of the menu (see [`crate::merchant`]).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, MenuItem, Restaurant};
use crate::validation::{validate_menu_item, validate_restaurant, validate_unique_ids};

/// Menu section selected when a restaurant page opens.
pub const DEFAULT_MENU_CATEGORY: &str = "Phở";

/// In-memory catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    restaurants: Vec<Restaurant>,
    menu: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from explicit collections.
    ///
    /// ## Errors
    /// `CoreError::Validation` when ids repeat within a collection, a price
    /// is negative, a price band is inverted, a rating leaves 0 to 5, or a
    /// restaurant has no tags.
    pub fn new(
        categories: Vec<Category>,
        restaurants: Vec<Restaurant>,
        menu: Vec<MenuItem>,
    ) -> CoreResult<Self> {
        validate_unique_ids("category id", categories.iter().map(|c| c.id.as_str()))?;
        validate_unique_ids("restaurant id", restaurants.iter().map(|r| r.id.as_str()))?;
        validate_unique_ids("menu item id", menu.iter().map(|m| m.id.as_str()))?;

        for restaurant in &restaurants {
            validate_restaurant(restaurant)?;
        }
        for item in &menu {
            validate_menu_item(item)?;
        }

        Ok(Catalog {
            categories,
            restaurants,
            menu,
        })
    }

    /// The demo catalog shipped with the storefront.
    pub fn seeded() -> CoreResult<Self> {
        Catalog::new(seed_categories(), seed_restaurants(), seed_menu())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn restaurant(&self, id: &str) -> CoreResult<&Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::RestaurantNotFound(id.to_string()))
    }

    pub fn menu_item(&self, id: &str) -> CoreResult<&MenuItem> {
        self.menu
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))
    }

    /// Distinct menu sections in first-seen order.
    pub fn menu_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.menu {
            if !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }

    /// Menu items in one section. `None` returns the whole menu.
    ///
    /// Matching is exact: a section no dish belongs to lists nothing. The
    /// first storefront prototype instead showed the full menu for every
    /// section other than "Phở".
    pub fn menu_in_category(&self, category: Option<&str>) -> Vec<&MenuItem> {
        self.menu
            .iter()
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect()
    }

    /// Ids of restaurants flagged as favorites in the seed data.
    pub fn seeded_favorites(&self) -> impl Iterator<Item = &str> {
        self.restaurants
            .iter()
            .filter(|r| r.is_favorite)
            .map(|r| r.id.as_str())
    }
}

// =============================================================================
// Seed Data
// =============================================================================

fn category(id: &str, name: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        category("pho", "Phở & Bún", "🍜"),
        category("rice", "Cơm Tấm", "🍛"),
        category("snack", "Ăn Vặt", "🍟"),
        category("drink", "Trà Sữa", "🧋"),
        category("healthy", "Healthy", "🥗"),
        category("banhmi", "Bánh Mì", "🥖"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    rating: f32,
    review_count: u32,
    distance: &str,
    delivery_time: &str,
    price_band: (i64, i64),
    tags: &[&str],
    image: &str,
    is_favorite: bool,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        review_count,
        distance: distance.to_string(),
        delivery_time: delivery_time.to_string(),
        min_price: Money::from_minor(price_band.0),
        max_price: Money::from_minor(price_band.1),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: image.to_string(),
        is_favorite,
    }
}

fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "1",
            "Phở Thìn Lò Đúc",
            4.8,
            1240,
            "1.2 km",
            "15-20 min",
            (45_000, 85_000),
            &["Phở", "Truyền thống"],
            "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?auto=format&fit=crop&q=80&w=800",
            true,
        ),
        restaurant(
            "2",
            "Cơm Tấm Cali",
            4.5,
            856,
            "0.8 km",
            "25-35 min",
            (50_000, 120_000),
            &["Cơm", "Gia đình"],
            "https://images.unsplash.com/photo-1595295333158-4742f28fbd85?auto=format&fit=crop&q=80&w=800",
            false,
        ),
        restaurant(
            "3",
            "Highlands Coffee",
            4.7,
            3021,
            "0.5 km",
            "10-15 min",
            (29_000, 65_000),
            &["Coffee", "Drinks"],
            "https://images.unsplash.com/photo-1559496417-e7f25cb247f3?auto=format&fit=crop&q=80&w=800",
            false,
        ),
        restaurant(
            "4",
            "Pizza 4P's",
            4.9,
            5200,
            "3.5 km",
            "40-50 min",
            (150_000, 500_000),
            &["Pizza", "Italian", "Premium"],
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&q=80&w=800",
            false,
        ),
    ]
}

fn menu_item(
    id: &str,
    name: &str,
    price: i64,
    description: &str,
    image: &str,
    category: &str,
    popular: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_minor(price),
        description: description.to_string(),
        image: image.to_string(),
        category: category.to_string(),
        popular,
    }
}

fn seed_menu() -> Vec<MenuItem> {
    vec![
        menu_item(
            "m1",
            "Phở Tái Lăn",
            65_000,
            "Thịt bò xào lăn tỏi thơm lừng, nước dùng đậm đà béo ngậy.",
            "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?auto=format&fit=crop&q=80&w=400",
            "Phở",
            true,
        ),
        menu_item(
            "m2",
            "Phở Nạm Gầu",
            70_000,
            "Nạm mềm, gầu giòn, bánh phở tươi làm trong ngày.",
            "https://images.unsplash.com/photo-1518133910546-b6c2fb7d79e3?auto=format&fit=crop&q=80&w=400",
            "Phở",
            false,
        ),
        menu_item(
            "m3",
            "Quẩy Giòn",
            5_000,
            "Quẩy nóng giòn tan ăn kèm phở.",
            "https://images.unsplash.com/photo-1626805872624-c102b48873ba?auto=format&fit=crop&q=80&w=400",
            "Món kèm",
            false,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::collections::HashSet;

    fn rejection(
        categories: Vec<Category>,
        restaurants: Vec<Restaurant>,
        menu: Vec<MenuItem>,
    ) -> ValidationError {
        match Catalog::new(categories, restaurants, menu) {
            Err(CoreError::Validation(e)) => e,
            other => panic!("expected a validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_seeded_menu_ids_are_unique() {
        let catalog = Catalog::seeded().unwrap();
        let ids: HashSet<&str> = catalog.menu().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.menu().len());
    }

    #[test]
    fn test_seeded_catalog_is_valid() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.restaurants().len(), 4);
        assert_eq!(catalog.menu().len(), 3);
    }

    #[test]
    fn test_rejects_duplicate_menu_ids() {
        let mut menu = seed_menu();
        menu[2].id = "m1".to_string();

        match rejection(seed_categories(), seed_restaurants(), menu) {
            ValidationError::Duplicate { field, value } => {
                assert_eq!(field, "menu item id");
                assert_eq!(value, "m1");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicate_restaurant_ids() {
        let mut restaurants = seed_restaurants();
        restaurants[1].id = "1".to_string();

        assert!(matches!(
            rejection(seed_categories(), restaurants, seed_menu()),
            ValidationError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_rejects_duplicate_category_ids() {
        let mut categories = seed_categories();
        categories[1].id = "pho".to_string();

        assert!(matches!(
            rejection(categories, seed_restaurants(), seed_menu()),
            ValidationError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut menu = seed_menu();
        menu[0].price = Money::from_minor(-1);

        assert!(matches!(
            rejection(seed_categories(), seed_restaurants(), menu),
            ValidationError::Negative { .. }
        ));
    }

    #[test]
    fn test_rejects_inverted_price_band() {
        let mut restaurants = seed_restaurants();
        restaurants[0].min_price = Money::from_minor(90_000);

        assert!(matches!(
            rejection(seed_categories(), restaurants, seed_menu()),
            ValidationError::InvertedRange { .. }
        ));
    }

    #[test]
    fn test_rejects_rating_out_of_range() {
        let mut restaurants = seed_restaurants();
        restaurants[3].rating = 5.5;

        assert!(matches!(
            rejection(seed_categories(), restaurants, seed_menu()),
            ValidationError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_rejects_restaurant_without_tags() {
        let mut restaurants = seed_restaurants();
        restaurants[2].tags.clear();

        match rejection(seed_categories(), restaurants, seed_menu()) {
            ValidationError::Required { field } => assert_eq!(field, "tags"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(catalog.menu_in_category(None).is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.menu_item("m1").unwrap().name, "Phở Tái Lăn");
        assert_eq!(catalog.restaurant("4").unwrap().name, "Pizza 4P's");

        assert!(matches!(
            catalog.menu_item("nope"),
            Err(CoreError::MenuItemNotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            catalog.restaurant("99"),
            Err(CoreError::RestaurantNotFound(_))
        ));
    }

    #[test]
    fn test_menu_categories_in_first_seen_order() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.menu_categories(), vec!["Phở", "Món kèm"]);
    }

    #[test]
    fn test_menu_in_category() {
        let catalog = Catalog::seeded().unwrap();

        let pho: Vec<&str> = catalog
            .menu_in_category(Some(DEFAULT_MENU_CATEGORY))
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(pho, vec!["m1", "m2"]);

        assert_eq!(catalog.menu_in_category(None).len(), 3);
        assert!(catalog.menu_in_category(Some("Nước uống")).is_empty());
    }

    #[test]
    fn test_seeded_favorites() {
        let catalog = Catalog::seeded().unwrap();
        let favorites: Vec<&str> = catalog.seeded_favorites().collect();
        assert_eq!(favorites, vec!["1"]);
    }

    #[test]
    fn test_price_range_label() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.restaurant("1").unwrap().price_range(), "45.000₫ - 85.000₫");
    }
}
