//! State threaded through the recursive tree walker.
//!
//! [`Context`] is read-only and copied into each subtree, so flags such as
//! `in_list` are lexically scoped. [`Attribution`] is the single mutable
//! channel: the byline `<dd>` writes the author and the publish date `<dd>`
//! reads it back later in document order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A bug-tracker entry resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBug {
    /// Translated summary.
    pub summary: String,
    /// Display color, `#RRGGBB`.
    pub color: String,
}

/// Bug id (`MC-<digits>`) to resolved entry.
pub type BugLookup = BTreeMap<String, ResolvedBug>;

/// Caller-supplied facts about the article being converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Name credited as translator.
    pub translator: String,
    /// Source article URL.
    pub url: String,
    /// Article title.
    pub title: String,
}

impl ArticleMeta {
    /// Create article metadata.
    pub fn new(translator: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            translator: translator.into(),
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Read-only conversion context.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Name credited as translator.
    pub translator: &'a str,
    /// Source article URL.
    pub url: &'a str,
    /// Article title.
    pub title: &'a str,
    /// Pre-resolved bug summaries.
    pub bugs: &'a BugLookup,
    /// Skip half-width to full-width punctuation conversion (code spans).
    pub disable_punctuation_conversion: bool,
    /// Inside a list item.
    pub in_list: bool,
}

impl<'a> Context<'a> {
    /// Top-level context for an article.
    pub fn new(meta: &'a ArticleMeta, bugs: &'a BugLookup) -> Self {
        Self {
            translator: meta.translator.as_str(),
            url: meta.url.as_str(),
            title: meta.title.as_str(),
            bugs,
            disable_punctuation_conversion: false,
            in_list: false,
        }
    }

    pub(crate) fn within_list(self) -> Self {
        Self { in_list: true, ..self }
    }

    pub(crate) fn verbatim(self) -> Self {
        Self {
            disable_punctuation_conversion: true,
            ..self
        }
    }
}

/// Values collected during traversal that later siblings read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    /// Author name from the byline.
    pub author: Option<String>,
}
