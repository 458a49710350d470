//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns a single `WordBook` (accepted words + submission log) behind one
//! `RwLock`, so every read-modify-write on either container is atomic with
//! respect to concurrent handlers.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::services::vocabulary::SEED_WORDS;
use crate::services::words::normalize;

// =============================================================================
// SUBMISSION RECORD
// =============================================================================

/// One logged check attempt. `is_correct` reflects the accepted set at the
/// moment of submission and is never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub word: String,
    pub participant_name: Option<String>,
    pub is_correct: bool,
}

// =============================================================================
// WORD BOOK
// =============================================================================

/// Accepted words and the append-only submission log.
#[derive(Debug, Default)]
pub struct WordBook {
    /// Normalized accepted words. Ordered so listing is sorted for free.
    pub accepted: BTreeSet<String>,
    /// Submissions in insertion order.
    pub submissions: Vec<SubmissionRecord>,
}

impl WordBook {
    /// Build a book from raw seed words. Entries are normalized; blanks and
    /// duplicates collapse.
    #[must_use]
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { accepted, submissions: Vec::new() }
    }

    /// Book seeded with the built-in workshop vocabulary.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_words(SEED_WORDS)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the book is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub book: Arc<RwLock<WordBook>>,
}

impl AppState {
    #[must_use]
    pub fn new(book: WordBook) -> Self {
        Self { book: Arc::new(RwLock::new(book)) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WordBook::seeded())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` seeded with the built-in vocabulary and an empty log.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::default()
    }

    /// `AppState` with exactly the given accepted words.
    #[must_use]
    pub fn app_state_with_words(words: &[&str]) -> AppState {
        AppState::new(WordBook::with_words(words))
    }

    /// Snapshot of the submission log length.
    pub async fn submission_count(state: &AppState) -> usize {
        state.book.read().await.submissions.len()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
