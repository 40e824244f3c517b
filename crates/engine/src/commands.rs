//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists.

/// Create an expense record.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
}

impl NewExpense {
    #[must_use]
    pub fn new(title: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount,
            category: category.into(),
        }
    }
}
