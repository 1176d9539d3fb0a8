use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use super::AppState;
use crate::domain::{Category, Question};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Map<String, Value>,
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.repo.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories_map(&categories),
    }))
}

/// Categories keyed by stringified id, the mapping shape the frontend
/// expects.
pub(crate) fn categories_map(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
}

pub async fn get_category_questions(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category = state
        .repo
        .get_category(category_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .repo
        .questions_by_category(&category_id.to_string())
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category,
    }))
}
