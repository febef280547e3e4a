// inlistrs/src/value.rs

//! Normalized inlist values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value as it appears on the right hand side of an inlist option.
///
/// Values are normalized so that formatting differences (`1d3` vs `1000`,
/// `.true` vs `.true.`) do not show up as differences between inlists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InlistValue {
    /// Any numeric value, integers included
    Real(f64),

    /// Fortran logical
    Logical(bool),

    /// Anything else, kept verbatim (quotes included)
    Text(String),
}

impl InlistValue {
    /// Normalize a raw value string.
    ///
    /// Numbers win over logicals, logicals over raw text. The Fortran
    /// exponent letter `d` is read as `e`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inlistrs::InlistValue;
    ///
    /// assert_eq!(InlistValue::normalize("1.5d3"), InlistValue::Real(1500.0));
    /// assert_eq!(InlistValue::normalize(".true"), InlistValue::Logical(true));
    /// assert_eq!(
    ///     InlistValue::normalize("'inlist_project'"),
    ///     InlistValue::Text("'inlist_project'".to_string())
    /// );
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some(real) = parse_real(raw) {
            return InlistValue::Real(real);
        }

        if let Some(logical) = parse_logical(raw) {
            return InlistValue::Logical(logical);
        }

        InlistValue::Text(raw.to_string())
    }

    /// The canonical Fortran spelling of a logical.
    pub fn logical_token(value: bool) -> &'static str {
        if value {
            ".true."
        } else {
            ".false."
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, InlistValue::Logical(true))
    }
}

impl fmt::Display for InlistValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing ".0" on integral reals
            InlistValue::Real(r) => write!(f, "{:?}", r),
            InlistValue::Logical(b) => f.write_str(Self::logical_token(*b)),
            InlistValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for InlistValue {
    fn from(value: f64) -> Self {
        InlistValue::Real(value)
    }
}

impl From<bool> for InlistValue {
    fn from(value: bool) -> Self {
        InlistValue::Logical(value)
    }
}

impl From<&str> for InlistValue {
    fn from(value: &str) -> Self {
        InlistValue::Text(value.to_string())
    }
}

fn parse_real(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.replace(['d', 'D'], "e").parse::<f64>().ok()
}

fn parse_logical(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        ".true." | ".true" => Some(true),
        ".false." | ".false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_reals() {
        assert_eq!(InlistValue::normalize("2.0"), InlistValue::Real(2.0));
        assert_eq!(InlistValue::normalize("20"), InlistValue::Real(20.0));
        assert_eq!(InlistValue::normalize("1d-2"), InlistValue::Real(0.01));
        assert_eq!(InlistValue::normalize("4184.d0"), InlistValue::Real(4184.0));
        assert_eq!(InlistValue::normalize("-2.5D+3"), InlistValue::Real(-2500.0));
        assert_eq!(InlistValue::normalize("1.5e3"), InlistValue::Real(1500.0));
    }

    #[test]
    fn test_normalize_logicals() {
        assert_eq!(InlistValue::normalize(".true."), InlistValue::Logical(true));
        assert_eq!(InlistValue::normalize(".true"), InlistValue::Logical(true));
        assert_eq!(InlistValue::normalize(".TRUE."), InlistValue::Logical(true));
        assert_eq!(InlistValue::normalize(".false."), InlistValue::Logical(false));
        assert_eq!(InlistValue::normalize(".false"), InlistValue::Logical(false));
    }

    #[test]
    fn test_normalize_text_is_verbatim() {
        assert_eq!(
            InlistValue::normalize("'Dutch'"),
            InlistValue::Text("'Dutch'".to_string())
        );
        // Other logical spellings are not canonicalized
        assert_eq!(InlistValue::normalize(".t."), InlistValue::Text(".t.".to_string()));
        assert_eq!(InlistValue::normalize(""), InlistValue::Text(String::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(InlistValue::Real(1500.0).to_string(), "1500.0");
        assert_eq!(InlistValue::Real(1.8).to_string(), "1.8");
        assert_eq!(InlistValue::Logical(false).to_string(), ".false.");
        assert_eq!(InlistValue::from("'x'").to_string(), "'x'");
    }

    #[test]
    fn test_no_tolerance_between_reals() {
        // Different source precision is a real difference
        assert_ne!(
            InlistValue::normalize("0.1"),
            InlistValue::normalize("0.10000001")
        );
        assert_eq!(InlistValue::normalize("1d0"), InlistValue::normalize("1.0"));
    }
}
