//! Order-lookup view: explicit state struct plus a pure reducer instead of
//! hidden component-local mutation.

use crate::dataset::Dataset;
use crate::domain::order::Order;
use crate::errors::LookupError;
use crate::finder;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindOrderView {
    pub phone_input: String,
    pub results: Vec<Order>,
    pub error: Option<LookupError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FindOrderEvent {
    PhoneChanged(String),
    Submitted,
    Cleared,
}

impl FindOrderView {
    /// Applies one UI event and returns the next state. Results and error
    /// are mutually exclusive; both reset at the start of every attempt.
    pub fn apply(self, event: FindOrderEvent, dataset: &Dataset) -> Self {
        match event {
            FindOrderEvent::PhoneChanged(phone_input) => Self { phone_input, ..self },
            FindOrderEvent::Submitted => match finder::find(&dataset.orders, &self.phone_input) {
                Ok(results) => Self { results, error: None, ..self },
                Err(error) => Self { results: Vec::new(), error: Some(error), ..self },
            },
            FindOrderEvent::Cleared => Self::default(),
        }
    }

    /// Inline message for the current error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(LookupError::user_message)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::dataset::Dataset;
    use crate::domain::order::{CustomerInfo, Order, OrderId, OrderStatus};
    use crate::errors::LookupError;

    use super::{FindOrderEvent, FindOrderView};

    fn dataset(phones: &[&str]) -> Dataset {
        let orders = phones
            .iter()
            .enumerate()
            .map(|(i, phone)| Order {
                id: OrderId(format!("DH{:03}", i + 1)),
                created_at: Utc::now(),
                status: OrderStatus::Pending,
                customer: CustomerInfo {
                    name: "Lê Văn Cường".to_string(),
                    phone: (*phone).to_string(),
                    email: "cuong@example.com".to_string(),
                    address: "8 Trần Phú, Đà Nẵng".to_string(),
                },
                items: Vec::new(),
                total_amount: Decimal::ZERO,
            })
            .collect();
        Dataset { orders, products: Vec::new(), categories: Vec::new() }
    }

    #[test]
    fn submit_replaces_results_and_clears_error() {
        let data = dataset(&["0901234567"]);
        let state = FindOrderView::default()
            .apply(FindOrderEvent::PhoneChanged("090 123 4567".to_string()), &data)
            .apply(FindOrderEvent::Submitted, &data);

        assert_eq!(state.results.len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_submit_clears_previous_results() {
        let data = dataset(&["0901234567"]);
        let found = FindOrderView::default()
            .apply(FindOrderEvent::PhoneChanged("0901234567".to_string()), &data)
            .apply(FindOrderEvent::Submitted, &data);
        assert_eq!(found.results.len(), 1);

        let missed = found
            .apply(FindOrderEvent::PhoneChanged("0999999999".to_string()), &data)
            .apply(FindOrderEvent::Submitted, &data);
        assert!(missed.results.is_empty(), "stale results must not survive a failed attempt");
        assert!(matches!(missed.error, Some(LookupError::NotFound(_))));
        assert_eq!(missed.error_message(), Some("Không tìm thấy đơn hàng nào"));
    }

    #[test]
    fn blank_submit_prompts_for_input() {
        let data = dataset(&["0901234567"]);
        let state = FindOrderView::default().apply(FindOrderEvent::Submitted, &data);

        assert_eq!(state.error, Some(LookupError::EmptyInput));
        assert_eq!(state.error_message(), Some("Vui lòng nhập số điện thoại"));
    }

    #[test]
    fn clear_resets_everything() {
        let data = dataset(&["0901234567"]);
        let state = FindOrderView::default()
            .apply(FindOrderEvent::PhoneChanged("0901".to_string()), &data)
            .apply(FindOrderEvent::Submitted, &data)
            .apply(FindOrderEvent::Cleared, &data);

        assert_eq!(state, FindOrderView::default());
    }
}
