use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use db::{Category, Question};

use crate::error::ApiError;
use crate::pagination::{paginate, PageQuery};
use crate::AppState;

#[derive(Serialize)]
struct CategoryList {
    categories: Vec<Category>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestionList {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> Result<Json<CategoryList>, ApiError> {
    let categories = db::categories::get_categories(&pool).await?;
    Ok(Json(CategoryList { categories }))
}

async fn get_questions_in_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<CategoryQuestionList>, ApiError> {
    let category = db::categories::get_category(&pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = db::questions::get_questions_for_category(&pool, category_id).await?;
    // totalQuestions counts the whole bank, not the category
    let total_questions = db::questions::get_questions(&pool).await?.len();

    Ok(Json(CategoryQuestionList {
        questions: paginate(page.page, questions),
        total_questions,
        current_category: category.kind,
    }))
}

pub fn categories_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_questions_in_category))
        .with_state(state)
}
