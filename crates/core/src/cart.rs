//! Client-side cart: a keyed quantity accumulator plus panel visibility.
//! Single UI thread only; nothing here is shared across threads.

use rust_decimal::Decimal;

use crate::domain::product::Product;
use crate::errors::CartError;

/// Synthesized line-item key derived from the product identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineKey(pub String);

impl LineKey {
    pub fn for_product(product: &Product) -> Self {
        Self(format!("product_{}", product.id))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub key: LineKey,
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// In-memory cart contents. Lines keep insertion order; repeated adds of the
/// same key accumulate quantity instead of appending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
    panel_open: bool,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product, quantity: u32) -> LineKey {
        let key = LineKey::for_product(&product);
        match self.lines.iter_mut().find(|line| line.key == key) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { key: key.clone(), product, quantity }),
        }
        key
    }

    pub fn remove(&mut self, key: &LineKey) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key != key);
        if self.lines.len() == before {
            return Err(CartError::UnknownLine(key.0.clone()));
        }
        Ok(())
    }

    /// Quantity zero removes the line.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(key);
        }
        match self.lines.iter_mut().find(|line| &line.key == key) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CartError::UnknownLine(key.0.clone())),
        }
    }

    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn open(&mut self) {
        self.panel_open = true;
    }

    pub fn close(&mut self) {
        self.panel_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.panel_open
    }
}
