use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl OrderStatus {
    /// Display label in the storefront locale.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Đang xử lý",
            Self::Completed => "Đã hoàn thành",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A placed order, loaded once from the static dataset. Read-only for this
/// crate: nothing here mutates orders after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer: CustomerInfo,
    pub items: Vec<OrderLine>,
    /// Stored total as shipped in the dataset. Expected to equal
    /// `computed_total()` but not enforced here.
    pub total_amount: Decimal,
}

impl Order {
    pub fn computed_total(&self) -> Decimal {
        self.items.iter().map(OrderLine::line_total).sum()
    }
}
