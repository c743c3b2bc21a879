pub mod health;
pub mod resume;
pub mod text;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Every verb not wired for a route answers 405 with the contract body,
/// not axum's empty default.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(health::test_handler))
        .route(
            "/resume/user",
            get(resume::get_users)
                .post(resume::create_user)
                .put(resume::update_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/resume/experience",
            get(resume::get_experience)
                .post(resume::create_experience)
                .put(resume::replace_experience)
                .fallback(method_not_allowed),
        )
        .route(
            "/resume/education",
            get(resume::get_education)
                .post(resume::create_education)
                .put(resume::replace_education)
                .fallback(method_not_allowed),
        )
        .route(
            "/resume/skill",
            get(resume::get_skills)
                .post(resume::create_skill)
                .put(resume::replace_skills)
                .fallback(method_not_allowed),
        )
        .route(
            "/resume/project",
            get(resume::get_projects)
                .post(resume::create_project)
                .put(resume::edit_project)
                .delete(resume::delete_project)
                .fallback(method_not_allowed),
        )
        .route(
            "/resume/spellcheck",
            post(text::spellcheck).fallback(method_not_allowed),
        )
        .route("/suggestion", post(text::suggest).fallback(method_not_allowed))
        .with_state(state)
}
