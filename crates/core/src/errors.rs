use std::path::PathBuf;

use thiserror::Error;

/// Outcomes of a single order-lookup attempt. Mutually exclusive, all
/// recovered locally by the owning view; none propagate further.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("phone input was empty after normalization")]
    EmptyInput,
    #[error("normalized phone `{0}` is not a 10-digit number starting with 0")]
    InvalidFormat(String),
    #[error("no order matched phone `{0}`")]
    NotFound(String),
}

impl LookupError {
    /// Inline message shown to the shopper, in the storefront locale.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Vui lòng nhập số điện thoại",
            Self::InvalidFormat(_) => "Số điện thoại không hợp lệ",
            Self::NotFound(_) => "Không tìm thấy đơn hàng nào",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("no cart line with key `{0}`")]
    UnknownLine(String),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse dataset file `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[cfg(test)]
mod tests {
    use super::LookupError;

    #[test]
    fn lookup_errors_carry_localized_user_messages() {
        assert_eq!(LookupError::EmptyInput.user_message(), "Vui lòng nhập số điện thoại");
        assert_eq!(
            LookupError::InvalidFormat("123".to_string()).user_message(),
            "Số điện thoại không hợp lệ"
        );
        assert_eq!(
            LookupError::NotFound("0901234567".to_string()).user_message(),
            "Không tìm thấy đơn hàng nào"
        );
    }
}
