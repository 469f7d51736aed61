use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use db::{Category, Question};

use crate::error::ApiError;
use crate::pagination::{paginate, PageQuery};
use crate::AppState;

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionList {
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
    current_category: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteOutcome {
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Created {
    success: bool,
}

// the search contract uses singular keys
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResults {
    question: Vec<Question>,
    total_question: usize,
    current_category: String,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionList>, ApiError> {
    let questions = db::questions::get_questions(&pool).await?;
    let categories = db::categories::get_categories(&pool).await?;
    let total_questions = questions.len();

    Ok(Json(QuestionList {
        questions: paginate(page.page, questions),
        total_questions,
        categories,
        current_category: String::new(),
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let question = db::questions::get_question(&pool, question_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    db::questions::delete_question(&pool, question.id).await?;

    let questions = db::questions::get_questions(&pool).await?;
    let total_questions = questions.len();

    Ok(Json(DeleteOutcome {
        deleted: question_id,
        questions: paginate(page.page, questions),
        total_questions,
    }))
}

async fn add_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<NewQuestion>,
) -> Result<Json<Created>, ApiError> {
    // a missing field lands in the same 422 as a failed insert
    let question = match (body.question, body.answer, body.difficulty, body.category) {
        (Some(question), Some(answer), Some(difficulty), Some(category)) => {
            db::questions::create_question(&pool, &question, &answer, category, difficulty).await
        }
        _ => return Err(ApiError::Unprocessable),
    };
    question.map_err(|e| {
        tracing::error!("create question failed: {e}");
        ApiError::Unprocessable
    })?;

    Ok(Json(Created { success: true }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Json(body): Json<SearchBody>,
) -> Result<Json<SearchResults>, ApiError> {
    let term = body.search_term.unwrap_or_default();
    let question = db::questions::search_questions(&pool, &term).await?;
    let total_question = question.len();

    Ok(Json(SearchResults {
        question,
        total_question,
        current_category: String::new(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(add_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/question", post(search_questions))
        .with_state(state)
}
