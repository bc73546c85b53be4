//! Product-list view: category tabs, incremental search, add-to-cart with a
//! transient "item added" notification.
//!
//! The notification is a deadline checked against an injected clock rather
//! than a detached timer, so teardown can cancel it and tests never sleep.

use chrono::{DateTime, Duration, Utc};

use crate::cart::CartStore;
use crate::catalog::{self, CatalogView, ALL_CATEGORIES};
use crate::dataset::Dataset;
use crate::domain::product::Product;

/// Transient toast shown after an add-to-cart, auto-dismissed once `now`
/// passes the deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Notification {
    pub deadline: DateTime<Utc>,
}

impl Notification {
    pub fn expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListView {
    pub active_category: String,
    pub search_term: String,
    pub cart: CartStore,
    pub notification: Option<Notification>,
    notify_duration: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProductListEvent {
    CategorySelected(String),
    SearchChanged(String),
    AddedToCart { product: Product, now: DateTime<Utc> },
    NotificationDismissed,
    Tick(DateTime<Utc>),
}

impl Default for ProductListView {
    fn default() -> Self {
        Self::new(Duration::seconds(2))
    }
}

impl ProductListView {
    pub fn new(notify_duration: Duration) -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            cart: CartStore::new(),
            notification: None,
            notify_duration,
        }
    }

    pub fn apply(mut self, event: ProductListEvent) -> Self {
        match event {
            ProductListEvent::CategorySelected(category) => {
                self.active_category = category;
                self
            }
            ProductListEvent::SearchChanged(term) => {
                self.search_term = term;
                self
            }
            ProductListEvent::AddedToCart { product, now } => {
                self.cart.add(product, 1);
                self.cart.open();
                self.notification = Some(Notification { deadline: now + self.notify_duration });
                self
            }
            ProductListEvent::NotificationDismissed => {
                self.notification = None;
                self
            }
            ProductListEvent::Tick(now) => {
                if self.notification.is_some_and(|n| n.expired(now)) {
                    self.notification = None;
                }
                self
            }
        }
    }

    /// Projects the current state through the catalog filter.
    pub fn view(&self, dataset: &Dataset) -> CatalogView {
        catalog::filter(
            &dataset.products,
            &dataset.categories,
            &self.active_category,
            &self.search_term,
        )
    }

    /// Cancels any pending notification. Called on teardown so a stale
    /// deadline never outlives the view.
    pub fn teardown(mut self) -> Self {
        self.notification = None;
        self
    }
}
