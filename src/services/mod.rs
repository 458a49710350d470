//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the word-checking rules so route handlers can stay
//! focused on request/response translation.

pub mod vocabulary;
pub mod words;
