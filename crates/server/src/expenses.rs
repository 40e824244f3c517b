//! Expense API endpoints

use api_types::expense::{ExpenseCreated, ExpenseNew, ExpenseView};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id.map(|id| id.to_hex()).unwrap_or_default(),
        title: expense.title,
        amount: expense.amount,
        category: expense.category,
    }
}

/// Handle requests for listing every stored expense
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state.engine.expenses().await?;

    Ok(Json(expenses.into_iter().map(map_expense).collect()))
}

/// Handle requests for creating a new expense
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let Json(payload) = payload?;

    let id = state
        .engine
        .add_expense(engine::NewExpense {
            title: payload.title,
            amount: payload.amount,
            category: payload.category,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            message: "Expense created successfully.".to_string(),
            id: id.to_hex(),
        }),
    ))
}

/// Handle requests for deleting an expense by id
pub async fn remove(
    State(state): State<ServerState>,
    Path(expense_id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_expense(&expense_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
