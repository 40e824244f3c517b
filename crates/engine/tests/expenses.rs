use std::sync::Arc;

use engine::{Engine, EngineError, MemoryStore, NewExpense};

fn engine_with_store() -> Engine {
    Engine::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn add_expense_assigns_unique_ids() {
    let engine = engine_with_store();

    let first = engine
        .add_expense(NewExpense::new("Coffee", 4.5, "Food"))
        .await
        .unwrap();
    let second = engine
        .add_expense(NewExpense::new("Train", 12.0, "Transport"))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(first.to_hex().len(), 24);
}

#[tokio::test]
async fn expenses_round_trip_fields() {
    let engine = engine_with_store();

    let id = engine
        .add_expense(NewExpense::new("Coffee", 4.5, "Food"))
        .await
        .unwrap();

    let expenses = engine.expenses().await.unwrap();
    assert_eq!(expenses.len(), 1);

    let expense = &expenses[0];
    assert_eq!(expense.id, Some(id));
    assert_eq!(expense.title, "Coffee");
    assert_eq!(expense.amount, 4.5);
    assert_eq!(expense.category, "Food");
}

#[tokio::test]
async fn delete_removes_exactly_the_target() {
    let engine = engine_with_store();

    let keep = engine
        .add_expense(NewExpense::new("Rent", 800.0, "Housing"))
        .await
        .unwrap();
    let gone = engine
        .add_expense(NewExpense::new("Coffee", 4.5, "Food"))
        .await
        .unwrap();

    engine.delete_expense(&gone.to_hex()).await.unwrap();

    let expenses = engine.expenses().await.unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, Some(keep));
}

#[tokio::test]
async fn delete_unknown_id_is_key_not_found() {
    let engine = engine_with_store();

    // Well-formed hex id that was never inserted.
    let absent = "65b2f1a09c3d2b4a1f6e8d70";
    let err = engine.delete_expense(absent).await.unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound(absent.to_string()));
}

#[tokio::test]
async fn delete_is_not_repeatable() {
    let engine = engine_with_store();

    let id = engine
        .add_expense(NewExpense::new("Coffee", 4.5, "Food"))
        .await
        .unwrap();
    let hex = id.to_hex();

    engine.delete_expense(&hex).await.unwrap();
    let err = engine.delete_expense(&hex).await.unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound(hex));
}

#[tokio::test]
async fn negative_amounts_are_accepted() {
    let engine = engine_with_store();

    engine
        .add_expense(NewExpense::new("Refund", -4.5, "Food"))
        .await
        .unwrap();

    assert_eq!(engine.expenses().await.unwrap()[0].amount, -4.5);
}

/// Smoke test against a real MongoDB; run with `cargo test -- --ignored`
/// and a mongod listening on localhost:27017.
#[tokio::test]
#[ignore]
async fn mongo_store_round_trip() {
    use engine::MongoStore;

    let engine = Engine::builder()
        .store(Arc::new(MongoStore::new(
            "mongodb://localhost:27017",
            "expense_tracker_test",
        )))
        .build()
        .unwrap();

    let id = engine
        .add_expense(NewExpense::new("Coffee", 4.5, "Food"))
        .await
        .unwrap();

    let expenses = engine.expenses().await.unwrap();
    assert!(expenses.iter().any(|expense| expense.id == Some(id)));

    engine.delete_expense(&id.to_hex()).await.unwrap();
    let err = engine.delete_expense(&id.to_hex()).await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound(id.to_hex()));
}
