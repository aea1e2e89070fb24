//! # Product Catalog
//!
//! The storefront's static product list, category filters and search.
//! Prices are in so'm per sale unit. Where a product maps onto a
//! calculator shape, its per-unit [`StockProfile`] is recorded so the shop
//! can quote a weight next to the price.
//!
//! ## Example
//!
//! ```rust
//! use metal_core::catalog::{filter_products, find_product, Category, CategoryFilter};
//!
//! let rebar = filter_products(CategoryFilter::Only(Category::Armatura), "");
//! assert_eq!(rebar.len(), 4);
//!
//! let hits = filter_products(CategoryFilter::All, "уголок");
//! assert_eq!(hits.len(), 3);
//!
//! let p = find_product("1").unwrap();
//! assert_eq!(p.unit_weight().unwrap().0, 0.89);
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::{compute_weight, Shape, StockProfile};
use crate::errors::{MetalError, MetalResult};
use crate::i18n::{Language, Localized};
use crate::units::Kilograms;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Reinforcing bar
    Armatura,
    /// Pipes and profile tubes
    Truba,
    /// Sheets
    List,
    /// Angles
    Ugolnik,
    /// Channels
    Shveller,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Armatura,
        Category::Truba,
        Category::List,
        Category::Ugolnik,
        Category::Shveller,
    ];

    /// Catalog id
    pub fn id(&self) -> &'static str {
        match self {
            Category::Armatura => "armatura",
            Category::Truba => "truba",
            Category::List => "list",
            Category::Ugolnik => "ugolnik",
            Category::Shveller => "shveller",
        }
    }

    /// Localized category title
    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            Category::Armatura => Localized::new("Armatura", "Арматура"),
            Category::Truba => Localized::new("Trubalar", "Трубы"),
            Category::List => Localized::new("Listlar", "Листы"),
            Category::Ugolnik => Localized::new("Ugolnik", "Уголок"),
            Category::Shveller => Localized::new("Shveller", "Швеллер"),
        };
        text.get(language)
    }

    /// Calculator shape for the category's stock. Profile tubes sit under
    /// `Truba` too; their products carry a `RectTube` profile.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Category::Armatura => Some(Shape::Rebar),
            Category::Truba => Some(Shape::Pipe),
            Category::List => Some(Shape::Sheet),
            Category::Ugolnik => Some(Shape::Angle),
            Category::Shveller => None,
        }
    }
}

impl FromStr for Category {
    type Err = MetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| MetalError::invalid_input("category", s, "Unknown category"))
    }
}

/// Category selector of the catalog page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = MetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Sale unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Kilogram
    Kg,
    /// Running meter
    M,
    /// Piece (`dona`)
    Don,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::M => "m",
            Unit::Don => "don",
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name_uz: String,
    pub name_ru: String,
    pub category: Category,
    /// Price per sale unit (so'm)
    pub price: u64,
    pub unit: Unit,
    pub specs: String,
    /// Geometry of one sale unit, when a calculator shape covers it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<StockProfile>,
}

impl Product {
    /// Name in the given language
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Uz => &self.name_uz,
            Language::Ru => &self.name_ru,
        }
    }

    /// Weight of one sale unit, if the product has a calculator profile
    pub fn unit_weight(&self) -> Option<Kilograms> {
        self.profile.as_ref().map(compute_weight)
    }

    fn matches_query(&self, query_lower: &str) -> bool {
        self.name_uz.to_lowercase().contains(query_lower)
            || self.name_ru.to_lowercase().contains(query_lower)
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name_uz: &str,
    name_ru: &str,
    category: Category,
    price: u64,
    unit: Unit,
    specs: &str,
    profile: Option<StockProfile>,
) -> Product {
    Product {
        id: id.to_string(),
        name_uz: name_uz.to_string(),
        name_ru: name_ru.to_string(),
        category,
        price,
        unit,
        specs: specs.to_string(),
        profile,
    }
}

fn rebar(diameter_mm: f64) -> Option<StockProfile> {
    Some(StockProfile::Rebar { diameter_mm, length_m: 1.0 })
}

fn pipe(diameter_mm: f64, wall_mm: f64) -> Option<StockProfile> {
    Some(StockProfile::Pipe { diameter_mm, wall_mm, length_m: 1.0 })
}

fn tube(width_mm: f64, height_mm: f64, wall_mm: f64) -> Option<StockProfile> {
    Some(StockProfile::RectTube { width_mm, height_mm, wall_mm, length_m: 1.0 })
}

fn angle(width_mm: f64, thickness_mm: f64) -> Option<StockProfile> {
    Some(StockProfile::Angle { width_mm, thickness_mm, length_m: 1.0 })
}

fn sheet(width_mm: f64, length_m: f64, thickness_mm: f64) -> Option<StockProfile> {
    Some(StockProfile::Sheet { length_m, width_mm, thickness_mm })
}

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    use Category::*;
    vec![
        product("1", "Armatura A500C Ø12mm", "Арматура А500С Ø12мм", Armatura, 8_500, Unit::M, "A500C, Uzunligi 11.7m", rebar(12.0)),
        product("2", "Profil truba 40x40x2mm", "Профильная труба 40x40x2мм", Truba, 12_000, Unit::M, "Stal 3, Kvadrat", tube(40.0, 40.0, 2.0)),
        product("3", "Po'lat list 3mm (1.25x2.5m)", "Лист стальной 3мм (1.25x2.5м)", List, 450_000, Unit::Don, "Hot rolled, ST3ps", sheet(1250.0, 2.5, 3.0)),
        product("4", "Ugolnik 50x50x4mm", "Уголок 50x50x4мм", Ugolnik, 15_000, Unit::M, "Teng tomonli, GOST 8509-93", angle(50.0, 4.0)),
        product("5", "Shveller 10U", "Швеллер 10У", Shveller, 65_000, Unit::M, "GOST 8240-97", None),
        product("6", "Armatura A500C Ø16mm", "Арматура А500С Ø16мм", Armatura, 14_500, Unit::M, "A500C, Mustahkam", rebar(16.0)),
        product("7", "Temir Truba Ø32mm", "Труба стальная Ø32мм", Truba, 18_000, Unit::M, "Suv-gaz quvuri, GOST 3262-75", pipe(32.0, 3.2)),
        product("8", "List 5mm (1.5x6m)", "Лист 5мм (1.5x6м)", List, 950_000, Unit::Don, "Stal 3, Sanoatbop", sheet(1500.0, 6.0, 5.0)),
        product("9", "Armatura A400 Ø10mm", "Арматура А400 Ø10мм", Armatura, 6_500, Unit::M, "A400, Uzunligi 11.7m", rebar(10.0)),
        product("10", "Profil truba 60x40x3mm", "Профильная труба 60x40x3мм", Truba, 22_000, Unit::M, "Stal 3, To'g'ri burchakli", tube(60.0, 40.0, 3.0)),
        product("11", "Ugolnik 75x75x6mm", "Уголок 75x75x6мм", Ugolnik, 28_000, Unit::M, "Teng tomonli, GOST 8509-93", angle(75.0, 6.0)),
        product("12", "Shveller 14U", "Швеллер 14У", Shveller, 95_000, Unit::M, "GOST 8240-97, Konstruksion", None),
        product("13", "Armatura A500C Ø20mm", "Арматура А500С Ø20мм", Armatura, 22_500, Unit::M, "A500C, Kuchaytirilgan", rebar(20.0)),
        product("14", "Qora truba Ø57mm", "Труба чёрная Ø57мм", Truba, 35_000, Unit::M, "Elektr payvandlangan", pipe(57.0, 3.0)),
        product("15", "Rifli list 4mm (1.25x2.5m)", "Лист рифленый 4мм (1.25x2.5м)", List, 650_000, Unit::Don, "Rombik shaklli, ST3", sheet(1250.0, 2.5, 4.0)),
        product("16", "Ugolnik 63x63x5mm", "Уголок 63x63x5мм", Ugolnik, 21_000, Unit::M, "Teng tomonli, Stal 3", angle(63.0, 5.0)),
    ]
});

/// The full catalog, in display order
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id
pub fn find_product(id: &str) -> MetalResult<&'static Product> {
    PRODUCTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| MetalError::product_not_found(id))
}

/// Products in the selected category whose Uzbek or Russian name contains
/// `query` (case-insensitive). An empty query matches everything.
pub fn filter_products(filter: CategoryFilter, query: &str) -> Vec<&'static Product> {
    let query_lower = query.trim().to_lowercase();
    PRODUCTS
        .iter()
        .filter(|p| filter.matches(p.category))
        .filter(|p| p.matches_query(&query_lower))
        .collect()
}

/// Number of products in a category
pub fn count_in_category(category: Category) -> usize {
    PRODUCTS.iter().filter(|p| p.category == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_unique_ids() {
        let all = products();
        assert_eq!(all.len(), 16);
        let mut ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_category_shapes() {
        assert_eq!(Category::Armatura.shape(), Some(Shape::Rebar));
        assert_eq!(Category::Shveller.shape(), None);
        for p in products().iter().filter(|p| p.category == Category::Shveller) {
            assert!(p.profile.is_none());
        }
    }

    #[test]
    fn test_category_counts() {
        assert_eq!(count_in_category(Category::Armatura), 4);
        assert_eq!(count_in_category(Category::Truba), 4);
        assert_eq!(count_in_category(Category::List), 3);
        assert_eq!(count_in_category(Category::Ugolnik), 3);
        assert_eq!(count_in_category(Category::Shveller), 2);
    }

    #[test]
    fn test_filter_all_empty_query() {
        assert_eq!(filter_products(CategoryFilter::All, "").len(), 16);
    }

    #[test]
    fn test_filter_category_and_query_combine() {
        let hits = filter_products(CategoryFilter::Only(Category::Truba), "profil");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "10"]);
    }

    #[test]
    fn test_search_is_case_insensitive_in_both_languages() {
        assert_eq!(filter_products(CategoryFilter::All, "ARMATURA").len(), 4);
        assert_eq!(filter_products(CategoryFilter::All, "АРМАТУРА").len(), 4);
        assert!(filter_products(CategoryFilter::All, "titanium").is_empty());
    }

    #[test]
    fn test_find_product() {
        assert_eq!(find_product("5").unwrap().name(Language::Ru), "Швеллер 10У");
        let err = find_product("404").unwrap_err();
        assert_eq!(err.error_code(), "PRODUCT_NOT_FOUND");
    }

    #[test]
    fn test_unit_weights() {
        assert_eq!(find_product("2").unwrap().unit_weight().unwrap().0, 2.51);
        assert_eq!(find_product("4").unwrap().unit_weight().unwrap().0, 3.01);
        // 1.25 x 2.5 m x 3 mm sheet
        assert_eq!(find_product("3").unwrap().unit_weight().unwrap().0, 73.59);
        assert!(find_product("12").unwrap().unit_weight().is_none());
    }

    #[test]
    fn test_profiles_match_categories() {
        for p in products() {
            let Some(profile) = p.profile else { continue };
            let ok = match p.category {
                Category::Armatura => profile.shape() == Shape::Rebar,
                Category::Truba => matches!(profile.shape(), Shape::Pipe | Shape::RectTube),
                Category::List => profile.shape() == Shape::Sheet,
                Category::Ugolnik => profile.shape() == Shape::Angle,
                Category::Shveller => false,
            };
            assert!(ok, "product {} has a mismatched profile", p.id);
        }
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "List".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::List)
        );
        assert!("bolts".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_product_serialization() {
        let p = find_product("7").unwrap();
        let json = serde_json::to_string(p).unwrap();
        assert!(json.contains("\"category\":\"truba\""));
        assert!(json.contains("\"unit\":\"m\""));
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, p);
    }
}
