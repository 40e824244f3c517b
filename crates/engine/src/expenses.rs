//! The module contains the `Expense` type, the record persisted in the store.
use core::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single expense record.
///
/// `id` is assigned by the storage layer on insert and is `None` only before
/// the record has been persisted. It is serialized under `_id`, the key the
/// document store addresses records by.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub amount: f64,
    pub category: String,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}€ {} {}", self.amount, self.title, self.category)
    }
}
