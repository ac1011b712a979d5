//! Error types for article conversion and cache maintenance.

use thiserror::Error;

/// Errors that can occur while converting an article or maintaining caches.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// HTML parsing error.
    #[error("HTML parsing error: {0}")]
    ParseError(String),

    /// A designated container element is absent from the document.
    #[error("{step}: no element with class `{class}` found")]
    MissingElement {
        /// The extraction step that failed.
        step: &'static str,
        /// The class name that was looked up.
        class: &'static str,
    },

    /// Cache (de)serialization error.
    #[error("cache JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The review workflow rejected an approval.
    #[error(transparent)]
    Review(#[from] ReviewError),
}

/// Reasons a translation review approval is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The approver already approved this translation.
    #[error("{approver} has already approved the translation for {key}")]
    AlreadyApproved {
        /// Bug key under review.
        key: String,
        /// Rejected approver.
        approver: String,
    },

    /// Translators cannot approve their own work.
    #[error("the translator {approver} cannot approve their own translation for {key}")]
    SelfApproval {
        /// Bug key under review.
        key: String,
        /// Rejected approver.
        approver: String,
    },

    /// The key is not waiting for review.
    #[error("{0} doesn't accept reviews")]
    NotUnderReview(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
