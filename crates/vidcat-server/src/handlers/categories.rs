//! Category CRUD endpoints.

use crate::error::{ApiError, ApiResult};
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use vidcat_core::{CategoryUpdate, NewCategory};

/// `GET /api/categories`
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Value> {
    let categories = state.api.list_categories().await;
    Json(json!({ "categories": categories }))
}

/// `POST /api/categories`
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewCategory>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(input) = body.map_err(|rejection| {
        ApiError::bad_request("Title and keywords array are required")
            .with_details(vec![rejection.body_text()])
    })?;

    let category = state.api.create_category(input).await?;
    Ok(Json(json!({
        "category": category,
        "message": "Category created successfully"
    })))
}

/// `PUT /api/categories/:id`
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<CategoryUpdate>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(update) = body.map_err(|rejection| {
        ApiError::bad_request("Invalid category update").with_details(vec![rejection.body_text()])
    })?;

    let category = state.api.update_category(&id, update).await?;
    Ok(Json(json!({
        "category": category,
        "message": "Category updated successfully"
    })))
}

/// `DELETE /api/categories/:id`
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.api.delete_category(&id).await?;
    Ok(Json(json!({ "message": "Category deleted successfully" })))
}
