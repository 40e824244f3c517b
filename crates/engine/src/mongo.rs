//! MongoDB backend for the expense store.
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, Collection, bson::doc, bson::oid::ObjectId};

use super::{ResultEngine, expenses::Expense, store::ExpenseStore};

const COLLECTION: &str = "expense";

/// Store backed by a MongoDB collection.
///
/// Every operation opens a fresh client, performs one round trip and shuts
/// the client down before surfacing the result. Nothing is pooled across
/// requests; early returns release the client through drop.
#[derive(Clone, Debug)]
pub struct MongoStore {
    uri: String,
    database: String,
}

impl MongoStore {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    async fn acquire(&self) -> ResultEngine<Client> {
        let client = Client::with_uri_str(&self.uri).await?;
        tracing::debug!("connected to {}", self.database);
        Ok(client)
    }

    fn collection(&self, client: &Client) -> Collection<Expense> {
        client.database(&self.database).collection(COLLECTION)
    }
}

#[async_trait]
impl ExpenseStore for MongoStore {
    async fn insert_one(&self, mut expense: Expense) -> ResultEngine<ObjectId> {
        let id = ObjectId::new();
        expense.id = Some(id);

        let client = self.acquire().await?;
        let result = self.collection(&client).insert_one(&expense).await;
        client.shutdown().await;

        result?;
        Ok(id)
    }

    async fn find_all(&self) -> ResultEngine<Vec<Expense>> {
        let client = self.acquire().await?;
        let result = match self.collection(&client).find(doc! {}).await {
            Ok(cursor) => cursor.try_collect::<Vec<_>>().await,
            Err(err) => Err(err),
        };
        client.shutdown().await;

        Ok(result?)
    }

    async fn delete_one(&self, id: ObjectId) -> ResultEngine<u64> {
        let client = self.acquire().await?;
        let result = self.collection(&client).delete_one(doc! { "_id": id }).await;
        client.shutdown().await;

        Ok(result?.deleted_count)
    }
}
