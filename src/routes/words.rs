//! Word checker routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::words::{self, SubmissionStats, WordError};
use crate::state::{AppState, SubmissionRecord};

pub const WELCOME_MESSAGE: &str = "Welcome to the Word Checker Workshop API!";

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Deserialize)]
pub struct CheckWordBody {
    pub word: String,
    #[serde(default)]
    pub participant_name: Option<String>,
}

#[derive(Serialize)]
pub struct CheckWordResponse {
    pub word: String,
    pub is_correct: bool,
    pub message: String,
    pub participant_name: Option<String>,
}

#[derive(Serialize)]
pub struct WordListResponse {
    pub correct_words: Vec<String>,
}

#[derive(Serialize)]
pub struct SubmissionsResponse {
    pub submissions: Vec<SubmissionRecord>,
    pub total_count: usize,
}

#[derive(Deserialize)]
pub struct AddWordParams {
    pub word: String,
}

#[derive(Serialize)]
pub struct AddWordResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn word_error_to_response(err: WordError) -> ApiError {
    let status = match err {
        WordError::EmptyWord => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorBody { detail: err.to_string() }))
}

/// `GET /` returns a fixed greeting.
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse { message: WELCOME_MESSAGE.to_owned() })
}

/// `POST /check-word` checks a word and logs the attempt.
pub async fn check_word(
    State(state): State<AppState>,
    Json(body): Json<CheckWordBody>,
) -> Result<Json<CheckWordResponse>, ApiError> {
    let record = words::check_word(&state, &body.word, body.participant_name)
        .await
        .map_err(word_error_to_response)?;

    Ok(Json(CheckWordResponse {
        message: words::outcome_message(record.is_correct).to_owned(),
        word: record.word,
        is_correct: record.is_correct,
        participant_name: record.participant_name,
    }))
}

/// `GET /words` lists the accepted words in sorted order.
pub async fn list_words(State(state): State<AppState>) -> Json<WordListResponse> {
    Json(WordListResponse { correct_words: words::list_words(&state).await })
}

/// `GET /submissions` returns the submission log in arrival order.
pub async fn list_submissions(State(state): State<AppState>) -> Json<SubmissionsResponse> {
    let submissions = words::list_submissions(&state).await;
    Json(SubmissionsResponse { total_count: submissions.len(), submissions })
}

/// `GET /stats` reports submission counts and the success rate.
pub async fn stats(State(state): State<AppState>) -> Json<SubmissionStats> {
    Json(words::stats(&state).await)
}

/// `POST /add-word?word=...` adds a word to the accepted vocabulary.
pub async fn add_word(
    State(state): State<AppState>,
    Query(params): Query<AddWordParams>,
) -> Result<Json<AddWordResponse>, ApiError> {
    let outcome = words::add_word(&state, &params.word)
        .await
        .map_err(word_error_to_response)?;

    Ok(Json(AddWordResponse { message: outcome.message(), total_words: outcome.total_words() }))
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
