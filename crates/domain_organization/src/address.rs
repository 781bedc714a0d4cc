//! Address value object

use serde::{Deserialize, Serialize};

/// A postal address embedded in an organization.
///
/// Addresses carry no identity: two addresses with the same fields are the
/// same address, and a record's addresses are replaced wholesale when the
/// record is overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Creates an address with the required fields only
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            city: city.into(),
            state: None,
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    /// Formats the address as display lines
    pub fn format(&self) -> String {
        let mut lines = vec![self.line1.clone()];
        if let Some(l2) = &self.line2 {
            lines.push(l2.clone());
        }
        let city_line = match &self.state {
            Some(state) => format!("{}, {} {}", self.city, state, self.postal_code),
            None => format!("{} {}", self.city, self.postal_code),
        };
        lines.push(city_line);
        lines.push(self.country.clone());
        lines.join("\n")
    }
}
