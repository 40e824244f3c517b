//! In-memory backend for the expense store.
//!
//! Used by tests and by the `memory` store setting to run the service
//! without a database. Records keep insertion order.
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{ResultEngine, expenses::Expense, store::ExpenseStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: RwLock<Vec<Expense>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn insert_one(&self, mut expense: Expense) -> ResultEngine<ObjectId> {
        let id = ObjectId::new();
        expense.id = Some(id);
        self.expenses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(expense);
        Ok(id)
    }

    async fn find_all(&self) -> ResultEngine<Vec<Expense>> {
        Ok(self
            .expenses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn delete_one(&self, id: ObjectId) -> ResultEngine<u64> {
        let mut expenses = self.expenses.write().unwrap_or_else(PoisonError::into_inner);
        let before = expenses.len();
        expenses.retain(|expense| expense.id != Some(id));
        Ok((before - expenses.len()) as u64)
    }
}
