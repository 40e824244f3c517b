//! Storage seam for expense records.
use core::fmt;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{ResultEngine, expenses::Expense};

/// The operations the engine needs from a document store.
///
/// Backends must assign the record identifier on insert and return it; the
/// caller never supplies one.
#[async_trait]
pub trait ExpenseStore: Send + Sync + fmt::Debug {
    async fn insert_one(&self, expense: Expense) -> ResultEngine<ObjectId>;
    async fn find_all(&self) -> ResultEngine<Vec<Expense>>;
    /// Remove at most one record matching `id`, returning the count removed.
    async fn delete_one(&self, id: ObjectId) -> ResultEngine<u64>;
}
