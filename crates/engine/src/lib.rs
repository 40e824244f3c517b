use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

pub use commands::NewExpense;
pub use error::EngineError;
pub use expenses::Expense;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::ExpenseStore;

mod commands;
mod error;
mod expenses;
mod memory;
mod mongo;
mod store;

type ResultEngine<T> = Result<T, EngineError>;

/// Orchestrates the expense operations against a storage backend.
///
/// The engine holds no record state of its own; every operation is a single
/// round trip to the store.
#[derive(Debug)]
pub struct Engine {
    store: Arc<dyn ExpenseStore>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Every expense in the store, in whatever order the store returns them.
    pub async fn expenses(&self) -> ResultEngine<Vec<Expense>> {
        self.store.find_all().await
    }

    /// Validate and insert a new expense, returning the assigned identifier.
    pub async fn add_expense(&self, expense: NewExpense) -> ResultEngine<ObjectId> {
        if expense.title.trim().is_empty() {
            return Err(EngineError::InvalidTitle(
                "title must not be empty".to_string(),
            ));
        }

        self.store
            .insert_one(Expense {
                id: None,
                title: expense.title,
                amount: expense.amount,
                category: expense.category,
            })
            .await
    }

    /// Delete the expense matching `expense_id`.
    ///
    /// The identifier is parsed before the store is touched; a string that is
    /// not a valid hex id fails with [`EngineError::InvalidId`]. Deleting an
    /// id with no matching record fails with [`EngineError::KeyNotFound`],
    /// on repeat calls too.
    pub async fn delete_expense(&self, expense_id: &str) -> ResultEngine<()> {
        let id = ObjectId::parse_str(expense_id)
            .map_err(|_| EngineError::InvalidId(expense_id.to_string()))?;

        match self.store.delete_one(id).await? {
            0 => Err(EngineError::KeyNotFound(expense_id.to_string())),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct EngineBuilder {
    store: Option<Arc<dyn ExpenseStore>>,
}

impl EngineBuilder {
    #[must_use]
    pub fn store(mut self, store: Arc<dyn ExpenseStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> ResultEngine<Engine> {
        let store = self.store.ok_or_else(|| {
            EngineError::Configuration("no storage backend configured".to_string())
        })?;

        Ok(Engine { store })
    }
}
