use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;
use crate::error::AppError;
use crate::quiz;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// Clients send the id as either a string or a number.
    pub id: Value,
}

impl QuizCategory {
    fn id_as_text(&self) -> Option<String> {
        match &self.id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// A formatted question record, or `false` once the pool is exhausted.
    pub question: Value,
}

pub async fn get_quiz_question(
    State(state): State<AppState>,
    Json(body): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let category_id = body.quiz_category.id_as_text().ok_or(AppError::Validation)?;

    // Category "0" means draw from every question.
    let candidates = if category_id == "0" {
        state.repo.list_questions().await?
    } else {
        state.repo.questions_by_category(&category_id).await?
    };

    let question = match quiz::pick_unseen(&candidates, &body.previous_questions) {
        Some(q) => serde_json::to_value(q).map_err(|e| AppError::Internal(e.to_string()))?,
        None => Value::Bool(false),
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
