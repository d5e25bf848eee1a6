//! Error types for slide editing and persistence.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, loading or saving slides.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a presentation file.
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    /// The JSON document is malformed or does not have the expected shape.
    #[error("Invalid presentation document: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A slide was rejected by the validation policy.
    #[error("Invalid slide: {0}")]
    ValidationError(#[from] ValidationError),

    /// An operation referenced a slide that does not exist.
    #[error("Slide index {index} is out of range (presentation has {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A reorder request was not a permutation of the current indices.
    #[error("Invalid slide order: {0}")]
    InvalidPermutation(String),

    /// The slide type name is not one of text, image or quiz.
    #[error("Unknown slide type: {0}")]
    UnknownSlideKind(String),

    /// The editor was asked to act on the selection while nothing is selected.
    #[error("No slide is selected")]
    NoSelection,

    /// The editor was asked to save without a file path.
    #[error("No file path has been chosen for this presentation")]
    NoPath,
}

/// Reasons a slide fails the strict validation policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a title")]
    EmptyTitle,

    #[error("please enter content")]
    EmptyContent,

    #[error("please enter an image URL")]
    EmptyUrl,

    #[error("please enter a question")]
    EmptyQuestion,

    /// Quizzes need at least two answers to choose from.
    #[error("please enter at least two quiz options (found {found})")]
    TooFewOptions { found: usize },
}
