//! Order lookup by customer phone number.

use crate::domain::order::Order;
use crate::errors::LookupError;

/// Strips every non-digit character. Idempotent: normalizing an already
/// normalized string is a no-op.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A normalized phone is valid when it is exactly 10 digits starting with 0.
pub fn is_valid_phone(normalized: &str) -> bool {
    normalized.len() == 10 && normalized.starts_with('0')
}

/// Matching policy: the stored phone, normalized the same way as the query,
/// must contain the normalized query as a substring. Contains rather than
/// equality, so stored numbers carrying extra digits (country prefixes)
/// still match their local form.
pub fn phone_matches(stored_phone: &str, normalized_query: &str) -> bool {
    normalize_phone(stored_phone).contains(normalized_query)
}

/// Finds every order whose customer phone matches `raw_phone` under
/// [`phone_matches`]. Matches keep their dataset order.
pub fn find(orders: &[Order], raw_phone: &str) -> Result<Vec<Order>, LookupError> {
    let query = normalize_phone(raw_phone);

    if query.is_empty() {
        return Err(LookupError::EmptyInput);
    }
    if !is_valid_phone(&query) {
        return Err(LookupError::InvalidFormat(query));
    }

    let found: Vec<Order> = orders
        .iter()
        .filter(|order| phone_matches(&order.customer.phone, &query))
        .cloned()
        .collect();

    if found.is_empty() {
        return Err(LookupError::NotFound(query));
    }

    Ok(found)
}
