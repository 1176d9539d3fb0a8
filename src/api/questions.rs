use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::categories::categories_map;
use super::AppState;
use crate::domain::{Category, NewQuestion, Question};
use crate::error::AppError;

const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Map<String, Value>,
    pub current_category: Option<Category>,
}

pub async fn get_questions(
    Query(params): Query<QuestionsQuery>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsPageResponse>, AppError> {
    let page = params.page.unwrap_or(1).max(1) as usize;

    let questions = state.repo.list_questions().await?;
    let total_questions = questions.len();

    let start = QUESTIONS_PER_PAGE * (page - 1);
    if start >= total_questions {
        return Err(AppError::NotFound);
    }
    let end = (start + QUESTIONS_PER_PAGE).min(total_questions);

    let categories = state.repo.list_categories().await?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: questions[start..end].to_vec(),
        total_questions,
        categories: categories_map(&categories),
        current_category: None,
    }))
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
}

pub async fn delete_question(
    Path(question_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let deleted = state
        .repo
        .delete_question(question_id)
        .await
        .map_err(|_| AppError::Unprocessable)?;

    if !deleted {
        return Err(AppError::Unprocessable);
    }

    Ok(Json(DeleteQuestionResponse { success: true }))
}

/// POST /api/questions is overloaded: a body carrying `question` adds a
/// question, a body carrying `search_term` searches, anything else is a 400.
pub async fn post_questions(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    if body.get("question").is_some() {
        add_question(&state, &body).await.map(IntoResponse::into_response)
    } else if body.get("search_term").is_some() {
        search_questions(&state, &body).await.map(IntoResponse::into_response)
    } else {
        Err(AppError::Validation)
    }
}

#[derive(Debug, Serialize)]
pub struct AddQuestionResponse {
    pub success: bool,
    pub question_id: i64,
}

async fn add_question(
    state: &AppState,
    body: &Value,
) -> Result<Json<AddQuestionResponse>, AppError> {
    let question = text_field(body, "question")?;
    let answer = text_field(body, "answer")?;
    let category = scalar_as_text(body.get("category")).ok_or(AppError::Validation)?;
    let difficulty = scalar_as_int(body.get("difficulty")).ok_or(AppError::Validation)?;

    let new = NewQuestion::new(question, answer, category, difficulty)
        .map_err(|_| AppError::Validation)?;

    let question_id = state
        .repo
        .insert_question(&new)
        .await
        .map_err(|_| AppError::Unprocessable)?;

    Ok(Json(AddQuestionResponse {
        success: true,
        question_id,
    }))
}

#[derive(Debug, Serialize)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<Category>,
}

async fn search_questions(
    state: &AppState,
    body: &Value,
) -> Result<Json<SearchQuestionsResponse>, AppError> {
    let term = body
        .get("search_term")
        .and_then(Value::as_str)
        .ok_or(AppError::Unprocessable)?;

    let questions = state
        .repo
        .search_questions(term)
        .await
        .map_err(|_| AppError::Unprocessable)?;

    Ok(Json(SearchQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

fn text_field(body: &Value, key: &str) -> Result<String, AppError> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(AppError::Validation)
}

/// `category` arrives as either a JSON string or number; both are stored as
/// text.
fn scalar_as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_as_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}
