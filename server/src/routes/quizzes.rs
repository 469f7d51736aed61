use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::telemetry::QUIZ_QUESTION_CNTR;
use crate::AppState;

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: Option<String>,
}

/// Quiz questions carry the category label instead of its id.
#[derive(Serialize)]
struct QuizQuestion {
    id: i64,
    question: String,
    answer: String,
    difficulty: i64,
    category: String,
}

#[derive(Serialize)]
struct QuizRound {
    question: Option<QuizQuestion>,
}

/// First question of the category not yet asked, scanning in id order.
/// `question: null` once the category is exhausted.
async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizBody>,
) -> Result<Json<QuizRound>, ApiError> {
    let kind = body.quiz_category.ok_or(ApiError::NotFound)?;
    let category = db::categories::get_category_by_type(&pool, &kind)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = db::questions::get_questions_for_category(&pool, category.id).await?;
    let question = questions
        .into_iter()
        .find(|q| !body.previous_questions.contains(&q.id))
        .map(|q| QuizQuestion {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: category.kind.clone(),
        });

    if question.is_some() {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[&category.kind])
            .inc();
    }

    Ok(Json(QuizRound { question }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
