pub mod cart;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod finder;
pub mod locale;
pub mod views;

pub use cart::{CartLine, CartStore, LineKey};
pub use catalog::{CatalogView, ALL_CATEGORIES, FALLBACK_BUCKET};
pub use dataset::Dataset;
pub use domain::category::{Category, CategoryId};
pub use domain::order::{CustomerInfo, Order, OrderId, OrderLine, OrderStatus};
pub use domain::product::{Product, ProductId};
pub use errors::{CartError, DatasetError, LookupError};
pub use views::find_order::{FindOrderEvent, FindOrderView};
pub use views::product_list::{Notification, ProductListEvent, ProductListView};
