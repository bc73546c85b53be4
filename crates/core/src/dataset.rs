//! Static dataset repository. The three collections are loaded in full at
//! startup and passed by reference to the query components; nothing mutates
//! them afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::domain::category::Category;
use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::errors::DatasetError;

pub const ORDERS_FILE: &str = "orders.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const CATEGORIES_FILE: &str = "categories.json";

// The JSON files wrap their collection in a single keyed object.
#[derive(Deserialize)]
struct OrdersFile {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct ProductsFile {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CategoriesFile {
    categories: Vec<Category>,
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Loads the three collections from `orders.json`, `products.json` and
    /// `categories.json` under `dir`.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let orders: OrdersFile = read_json(&dir.join(ORDERS_FILE))?;
        let products: ProductsFile = read_json(&dir.join(PRODUCTS_FILE))?;
        let categories: CategoriesFile = read_json(&dir.join(CATEGORIES_FILE))?;

        let dataset = Self {
            orders: orders.orders,
            products: products.products,
            categories: categories.categories,
        };
        info!(
            event_name = "dataset.loaded",
            orders = dataset.orders.len(),
            products = dataset.products.len(),
            categories = dataset.categories.len(),
            "static dataset loaded"
        );
        Ok(dataset)
    }

    /// Builds a dataset from in-memory JSON documents in the same wrapper
    /// shapes as the files. Used by tests and embedded fixtures.
    pub fn from_json_strs(
        orders: &str,
        products: &str,
        categories: &str,
    ) -> Result<Self, DatasetError> {
        let orders: OrdersFile = parse_json(orders, ORDERS_FILE)?;
        let products: ProductsFile = parse_json(products, PRODUCTS_FILE)?;
        let categories: CategoriesFile = parse_json(categories, CATEGORIES_FILE)?;

        Ok(Self {
            orders: orders.orders,
            products: products.products,
            categories: categories.categories,
        })
    }

    /// Unknown category ids observed on products. They are not errors (the
    /// catalog groups them under the fallback bucket) but callers may want
    /// to log them at load time.
    pub fn unresolved_category_ids(&self) -> Vec<&str> {
        self.products
            .iter()
            .filter_map(|product| product.category_id.as_ref())
            .filter(|id| !self.categories.iter().any(|category| &category.id == *id))
            .map(|id| id.0.as_str())
            .collect()
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, DatasetError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| DatasetError::ReadFile { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| DatasetError::Parse { path: path.to_path_buf(), source })
}

fn parse_json<T: for<'de> Deserialize<'de>>(raw: &str, label: &str) -> Result<T, DatasetError> {
    serde_json::from_str(raw)
        .map_err(|source| DatasetError::Parse { path: PathBuf::from(label), source })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::Dataset;
    use crate::errors::DatasetError;

    const ORDERS: &str = r#"{"orders":[{
        "id":"DH001","created_at":"2024-11-02T09:30:00Z","status":"pending",
        "customer":{"name":"Nguyễn Văn An","phone":"0901234567",
                    "email":"an@example.com","address":"12 Lý Thường Kiệt, Hà Nội"},
        "items":[{"product_name":"Cà phê sữa đá","quantity":2,"unit_price":"25000"}],
        "total_amount":"50000"
    }]}"#;
    const PRODUCTS: &str = r#"{"products":[
        {"id":1,"name":"Cà phê sữa đá","price":"25000","category_id":"drinks"},
        {"id":2,"name":"Bánh mì thịt","price":"30000","category_id":"street-food"}
    ]}"#;
    const CATEGORIES: &str =
        r#"{"categories":[{"id":"drinks","name":"Đồ uống","slug":"do-uong"}]}"#;

    #[test]
    fn parses_the_wrapper_shapes() {
        let dataset = Dataset::from_json_strs(ORDERS, PRODUCTS, CATEGORIES)
            .expect("fixture documents parse");

        assert_eq!(dataset.orders.len(), 1);
        assert_eq!(dataset.orders[0].customer.phone, "0901234567");
        assert_eq!(dataset.products.len(), 2);
        assert_eq!(dataset.categories.len(), 1);
    }

    #[test]
    fn reports_unresolved_category_ids() {
        let dataset = Dataset::from_json_strs(ORDERS, PRODUCTS, CATEGORIES)
            .expect("fixture documents parse");

        assert_eq!(dataset.unresolved_category_ids(), ["street-food"]);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = Dataset::from_json_strs("{", PRODUCTS, CATEGORIES);
        assert!(matches!(result, Err(DatasetError::Parse { .. })));
    }

    #[test]
    fn loads_from_a_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("orders.json"), ORDERS).expect("write orders");
        fs::write(dir.path().join("products.json"), PRODUCTS).expect("write products");
        fs::write(dir.path().join("categories.json"), CATEGORIES).expect("write categories");

        let dataset = Dataset::load(dir.path()).expect("dataset loads");
        assert_eq!(dataset.products.len(), 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Dataset::load(dir.path());
        assert!(matches!(result, Err(DatasetError::ReadFile { .. })));
    }
}
