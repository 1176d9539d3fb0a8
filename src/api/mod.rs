pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::db::Repository;
use axum::http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

pub fn create_router(state: AppState) -> Router {
    // The frontend sends a literal `true` header alongside the usual pair.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, HeaderName::from_static("true")]);

    Router::new()
        .route("/api/categories", get(categories::get_categories))
        .route(
            "/api/categories/:category_id/questions",
            get(categories::get_category_questions),
        )
        .route(
            "/api/questions",
            get(questions::get_questions).post(questions::post_questions),
        )
        .route(
            "/api/questions/:question_id",
            delete(questions::delete_question),
        )
        .route("/api/quizzes", post(quizzes::get_quiz_question))
        .layer(cors)
        .with_state(state)
}
