//! Invoices

use serde::Deserialize;

/// A single performance of a play in front of an audience.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Performance {
    /// ID of the play in the catalog
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Number of seats filled
    pub audience: u32,
}

impl Performance {
    /// Create a new performance.
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// Invoice for a customer, listing performances in billing order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Invoice {
    /// Customer name
    pub customer: String,

    /// Performances, in the order they appear on the statement
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Create a new invoice.
    pub fn new(customer: impl Into<String>, performances: impl Into<Vec<Performance>>) -> Self {
        Self {
            customer: customer.into(),
            performances: performances.into(),
        }
    }
}
