//! Catalog filtering and category grouping.

use crate::domain::category::Category;
use crate::domain::product::Product;

/// Reserved sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Bucket name for products whose category id does not resolve to a known
/// category. A defined fallback, not an error.
pub const FALLBACK_BUCKET: &str = "Khác";

/// Result of a catalog query. The grouped shape is a sequence of
/// `(category display name, products)` pairs so that first-seen encounter
/// order survives; a map would lose it.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogView {
    Grouped(Vec<(String, Vec<Product>)>),
    Flat(Vec<Product>),
}

impl CatalogView {
    /// Every product in the view, grouped buckets flattened in order.
    pub fn products(&self) -> Vec<&Product> {
        match self {
            Self::Grouped(groups) => groups.iter().flat_map(|(_, p)| p.iter()).collect(),
            Self::Flat(products) => products.iter().collect(),
        }
    }
}

/// Filters the product collection by active category and search term.
///
/// With the `"all"` sentinel the result is grouped by category display name
/// in encounter order and the search term is NOT applied; with a specific
/// category the result is flat, filtered by exact category id match and
/// case-insensitive name-contains search. The grouped path ignoring search
/// reproduces the storefront's observed behavior (see DESIGN.md).
pub fn filter(
    products: &[Product],
    categories: &[Category],
    active_category: &str,
    search_term: &str,
) -> CatalogView {
    if active_category == ALL_CATEGORIES {
        return CatalogView::Grouped(group_by_category(products, categories));
    }

    let needle = search_term.to_lowercase();
    let matched = products
        .iter()
        .filter(|product| {
            product.category_id.as_ref().is_some_and(|id| id.0 == active_category)
        })
        .filter(|product| matches_search(product, &needle))
        .cloned()
        .collect();

    CatalogView::Flat(matched)
}

fn matches_search(product: &Product, lowercased_term: &str) -> bool {
    lowercased_term.is_empty() || product.name.to_lowercase().contains(lowercased_term)
}

fn group_by_category(
    products: &[Product],
    categories: &[Category],
) -> Vec<(String, Vec<Product>)> {
    let mut groups: Vec<(String, Vec<Product>)> = Vec::new();

    for product in products {
        let bucket = product
            .category_id
            .as_ref()
            .and_then(|id| categories.iter().find(|c| &c.id == id))
            .map_or(FALLBACK_BUCKET, |category| category.name.as_str());

        match groups.iter_mut().find(|(name, _)| name == bucket) {
            Some((_, members)) => members.push(product.clone()),
            None => groups.push((bucket.to_string(), vec![product.clone()])),
        }
    }

    groups
}
