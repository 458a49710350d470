//! Word checking over the shared word book.
//!
//! DESIGN
//! ======
//! Every operation takes the shared `WordBook` lock exactly once. Check and
//! add hold the write lock across their membership test and mutation so a
//! concurrent add can never slip between a lookup and the logged result.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, info, warn};

use crate::state::{AppState, SubmissionRecord};

pub const CORRECT_MESSAGE: &str = "Correct! Well done!";
pub const INCORRECT_MESSAGE: &str = "Sorry, that's not quite right. Try again!";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word cannot be empty")]
    EmptyWord,
}

/// Result of an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddWordOutcome {
    Added { word: String, total_words: usize },
    AlreadyExists { word: String },
}

impl AddWordOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Added { word, .. } => format!("Word '{word}' added successfully"),
            Self::AlreadyExists { word } => format!("Word '{word}' already exists in the list"),
        }
    }

    #[must_use]
    pub fn total_words(&self) -> Option<usize> {
        match self {
            Self::Added { total_words, .. } => Some(*total_words),
            Self::AlreadyExists { .. } => None,
        }
    }
}

/// Aggregate counts over the submission log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionStats {
    pub total_submissions: usize,
    pub correct_submissions: usize,
    pub incorrect_submissions: usize,
    pub success_rate: f64,
}

impl SubmissionStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[SubmissionRecord]) -> Self {
        let total = records.len();
        let correct = records.iter().filter(|r| r.is_correct).count();
        let success_rate = if total == 0 {
            0.0
        } else {
            round_2dp(correct as f64 / total as f64 * 100.0)
        };

        Self {
            total_submissions: total,
            correct_submissions: correct,
            incorrect_submissions: total - correct,
            success_rate,
        }
    }
}

// An empty log reports `success_rate` as the integer 0; any non-empty log
// reports a float, even when nothing was correct.
impl Serialize for SubmissionStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SubmissionStats", 4)?;
        s.serialize_field("total_submissions", &self.total_submissions)?;
        s.serialize_field("correct_submissions", &self.correct_submissions)?;
        s.serialize_field("incorrect_submissions", &self.incorrect_submissions)?;
        if self.total_submissions == 0 {
            s.serialize_field("success_rate", &0_u64)?;
        } else {
            s.serialize_field("success_rate", &self.success_rate)?;
        }
        s.end()
    }
}

/// Message shown to the participant for a check outcome.
#[must_use]
pub fn outcome_message(is_correct: bool) -> &'static str {
    if is_correct { CORRECT_MESSAGE } else { INCORRECT_MESSAGE }
}

/// Trim surrounding whitespace and lowercase.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Round to two decimals, ties to even.
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Check a submitted word and append the outcome to the submission log.
///
/// # Errors
///
/// Returns `WordError::EmptyWord` if the word is blank after normalization.
/// Nothing is logged in that case.
pub async fn check_word(
    state: &AppState,
    raw_word: &str,
    participant_name: Option<String>,
) -> Result<SubmissionRecord, WordError> {
    let word = normalize(raw_word);
    if word.is_empty() {
        warn!(participant = ?participant_name, "rejected empty submission");
        return Err(WordError::EmptyWord);
    }

    let mut book = state.book.write().await;
    let is_correct = book.contains(&word);
    let record = SubmissionRecord { word, participant_name, is_correct };
    book.submissions.push(record.clone());

    debug!(word = %record.word, is_correct, total = book.submissions.len(), "submission recorded");
    Ok(record)
}

/// Accepted words in lexicographic order.
pub async fn list_words(state: &AppState) -> Vec<String> {
    state.book.read().await.accepted.iter().cloned().collect()
}

/// Full submission log in insertion order.
pub async fn list_submissions(state: &AppState) -> Vec<SubmissionRecord> {
    state.book.read().await.submissions.clone()
}

pub async fn stats(state: &AppState) -> SubmissionStats {
    let book = state.book.read().await;
    SubmissionStats::from_records(&book.submissions)
}

/// Add a word to the accepted set. Existing words are left untouched.
///
/// # Errors
///
/// Returns `WordError::EmptyWord` if the word is blank after normalization.
pub async fn add_word(state: &AppState, raw_word: &str) -> Result<AddWordOutcome, WordError> {
    let word = normalize(raw_word);
    if word.is_empty() {
        return Err(WordError::EmptyWord);
    }

    let mut book = state.book.write().await;
    if book.contains(&word) {
        return Ok(AddWordOutcome::AlreadyExists { word });
    }

    book.accepted.insert(word.clone());
    let total_words = book.accepted.len();
    info!(%word, total_words, "word added");
    Ok(AddWordOutcome::Added { word, total_words })
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
