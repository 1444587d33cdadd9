use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const POSTAL_CODE_LEN: usize = 6;

/// Six ASCII digits, left-zero-padded. Kept as text so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostalCodeError {
    #[error("postal code is empty")]
    Empty,
    #[error("postal code '{input}' contains non-digit characters")]
    NonDigit { input: String },
    #[error("postal code '{input}' is longer than 6 digits")]
    TooLong { input: String },
    #[error("postal code '{input}' must be exactly 6 digits")]
    WrongLength { input: String },
}

impl PostalCode {
    /// Dataset-side normalisation: 1 to 6 digits, padded with leading zeros.
    pub fn normalize(raw: &str) -> Result<Self, PostalCodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PostalCodeError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PostalCodeError::NonDigit {
                input: trimmed.to_string(),
            });
        }
        if trimmed.len() > POSTAL_CODE_LEN {
            return Err(PostalCodeError::TooLong {
                input: trimmed.to_string(),
            });
        }
        Ok(PostalCode(format!("{:0>width$}", trimmed, width = POSTAL_CODE_LEN)))
    }

    /// Query-side validation. Exactly six ASCII digits, no surrounding
    /// whitespace; the result goes through the same normalisation as dataset codes.
    pub fn parse_query(raw: &str) -> Result<Self, PostalCodeError> {
        if raw.len() != POSTAL_CODE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PostalCodeError::WrongLength {
                input: raw.to_string(),
            });
        }
        Self::normalize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PostalCode::normalize(&value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_codes() {
        assert_eq!(PostalCode::normalize("1").unwrap().as_str(), "000001");
        assert_eq!(PostalCode::normalize("1234").unwrap().as_str(), "001234");
        assert_eq!(PostalCode::normalize(" 18956 ").unwrap().as_str(), "018956");
    }

    #[test]
    fn six_digit_code_is_unchanged() {
        assert_eq!(PostalCode::normalize("018956").unwrap().as_str(), "018956");
    }

    #[test]
    fn rejects_bad_dataset_codes() {
        assert_eq!(PostalCode::normalize("   "), Err(PostalCodeError::Empty));
        assert!(matches!(
            PostalCode::normalize("12a4"),
            Err(PostalCodeError::NonDigit { .. })
        ));
        assert!(matches!(
            PostalCode::normalize("1234567"),
            Err(PostalCodeError::TooLong { .. })
        ));
        // Numeric-looking floats are not codes
        assert!(PostalCode::normalize("1234.0").is_err());
    }

    #[test]
    fn query_requires_exactly_six_digits() {
        assert!(PostalCode::parse_query("12345").is_err());
        assert!(PostalCode::parse_query("1234567").is_err());
        assert!(PostalCode::parse_query("01a956").is_err());
        assert!(PostalCode::parse_query("").is_err());
        assert_eq!(
            PostalCode::parse_query("018956").unwrap(),
            PostalCode::normalize("18956").unwrap()
        );
    }

    #[test]
    fn query_with_surrounding_whitespace_is_rejected() {
        for padded in [" 018956", "018956\t", " 018956\n", " 18956"] {
            assert_eq!(
                PostalCode::parse_query(padded),
                Err(PostalCodeError::WrongLength {
                    input: padded.to_string()
                }),
                "{padded:?} should be rejected"
            );
        }
    }

    #[test]
    fn serde_goes_through_normalisation() {
        let code: PostalCode = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(code.as_str(), "000042");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"000042\"");
        assert!(serde_json::from_str::<PostalCode>("\"abc\"").is_err());
    }
}
