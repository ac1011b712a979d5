//! Translation messages posted by translators, and how they update the caches.
//!
//! A message looks like `MC-1234 翻译后的摘要`. Leading `!` or `！` overwrites an
//! existing translation; leading `?` or `？` asks for review. The id may be
//! wrapped in brackets.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cache::{BugCache, ColorCache, ReviewCache};
use crate::error::Result;

static TRANSLATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([!！?？]*)\s*\[?(MC-\d+)\]?\s*(.*)$").expect("valid regex"));

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));

const CODE_MARKUP: &str = "[backcolor=White][font=Monaco,Consolas,'Lucida Console','Courier New',serif]${1}[/font][/backcolor]";

/// A parsed translation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Upper-cased bug id.
    pub id: String,
    /// Summary with inline code already converted to BBCode. Empty means
    /// the translation is withdrawn.
    pub summary: String,
    /// Replace an existing translation without asking.
    pub force: bool,
    /// Put the translation under review.
    pub review: bool,
}

/// Result of applying a [`Translation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The summary was stored. `new_color` is set when the translator had no
    /// color yet and one was derived for them.
    Saved {
        /// Color assigned to a first-time translator.
        new_color: Option<String>,
    },
    /// The translation was withdrawn.
    Removed,
    /// A translation exists and `force` was not given.
    Conflict {
        /// The stored summary.
        existing: String,
    },
}

/// State of a review after an approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    /// Enough approvals; the review is closed.
    Accepted,
    /// More approvals are needed.
    Pending {
        /// Approvals still missing.
        remaining: usize,
    },
}

/// Convert inline markdown code spans to monospace BBCode.
pub fn markdown_to_bbcode(value: &str) -> String {
    CODE_SPAN.replace_all(value, CODE_MARKUP).into_owned()
}

/// Parse a translation message; anything else yields `None`.
pub fn parse_translation(content: &str) -> Option<Translation> {
    let captures = TRANSLATION.captures(content.trim())?;
    let flags = captures.get(1).map_or("", |m| m.as_str());
    Some(Translation {
        id: captures[2].to_uppercase(),
        summary: markdown_to_bbcode(captures.get(3).map_or("", |m| m.as_str())),
        force: flags.contains(['!', '！']),
        review: flags.contains(['?', '？']),
    })
}

/// Apply a translation by `translator` to the caches.
///
/// `date` is stored with the entry, in milliseconds since the Unix epoch.
pub fn apply_translation(
    translation: &Translation,
    translator: &str,
    date: i64,
    bugs: &mut BugCache,
    colors: &mut ColorCache,
    reviews: &mut ReviewCache,
) -> TranslationOutcome {
    if let Some(existing) = bugs.summary(&translation.id) {
        if !translation.force {
            return TranslationOutcome::Conflict {
                existing: existing.to_string(),
            };
        }
    }

    if translation.summary.is_empty() {
        bugs.remove(&translation.id);
        reviews.remove(&translation.id);
        debug!("Removed translation of {}", translation.id);
        return TranslationOutcome::Removed;
    }

    bugs.set(
        translation.id.clone(),
        translation.summary.clone(),
        Some(translator.to_string()),
        date,
    );

    let new_color = if colors.contains(translator) {
        None
    } else {
        let color = colors.color_of(translator);
        colors.set(translator, &color);
        Some(color)
    };

    if translation.review {
        reviews.request(translation.id.clone(), translation.summary.clone(), translator);
    } else {
        reviews.remove(&translation.id);
    }

    debug!("Saved translation of {} by {translator}", translation.id);
    TranslationOutcome::Saved { new_color }
}

/// Approve the reviewed translation of `key`, closing the review once enough
/// approvals are in.
///
/// # Errors
///
/// Returns [`crate::ConversionError::Review`] when the approval is rejected.
pub fn approve_translation(key: &str, approver: &str, reviews: &mut ReviewCache) -> Result<ApprovalStatus> {
    reviews.approve(key, approver)?;
    if reviews.is_approved(key) {
        reviews.remove(key);
        Ok(ApprovalStatus::Accepted)
    } else {
        Ok(ApprovalStatus::Pending {
            remaining: reviews.remaining_approvals(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, ReviewError};

    #[test]
    fn test_parse_translation() {
        assert_eq!(
            parse_translation("MC-123 苦力怕不会爆炸"),
            Some(Translation {
                id: "MC-123".to_string(),
                summary: "苦力怕不会爆炸".to_string(),
                force: false,
                review: false,
            })
        );

        let flagged = parse_translation("  ！？[mc-9] 使用 `/give` 时崩溃 ").unwrap();
        assert_eq!(flagged.id, "MC-9");
        assert!(flagged.force);
        assert!(flagged.review);
        assert_eq!(
            flagged.summary,
            "使用 [backcolor=White][font=Monaco,Consolas,'Lucida Console','Courier New',serif]/give[/font][/backcolor] 时崩溃"
        );

        assert_eq!(parse_translation("!spx help"), None);
        assert_eq!(parse_translation("hello MC-1"), None);
    }

    #[test]
    fn test_apply_new_translation_assigns_color() {
        let (mut bugs, mut colors, mut reviews) = Default::default();
        let translation = parse_translation("?MC-1 摘要").unwrap();
        let outcome = apply_translation(&translation, "a", 42, &mut bugs, &mut colors, &mut reviews);

        assert_eq!(
            outcome,
            TranslationOutcome::Saved {
                new_color: Some("#000061".to_string())
            }
        );
        assert_eq!(bugs.get("MC-1").unwrap().date, 42);
        assert_eq!(colors.get("a"), Some("#000061"));
        assert_eq!(reviews.get("MC-1").unwrap().translator, "a");
    }

    #[test]
    fn test_apply_conflict_and_force() {
        let mut bugs = BugCache::default();
        let mut colors = ColorCache::default();
        let mut reviews = ReviewCache::default();
        bugs.set("MC-2", "旧", Some("b".to_string()), 0);
        colors.set("b", "#123456");
        reviews.request("MC-2", "旧", "b");

        let plain = parse_translation("MC-2 新").unwrap();
        assert_eq!(
            apply_translation(&plain, "b", 1, &mut bugs, &mut colors, &mut reviews),
            TranslationOutcome::Conflict {
                existing: "旧".to_string()
            }
        );
        assert_eq!(bugs.summary("MC-2"), Some("旧"));

        let forced = parse_translation("!MC-2 新").unwrap();
        assert_eq!(
            apply_translation(&forced, "b", 1, &mut bugs, &mut colors, &mut reviews),
            TranslationOutcome::Saved { new_color: None }
        );
        assert_eq!(bugs.summary("MC-2"), Some("新"));
        assert!(!reviews.contains("MC-2"));

        let withdrawn = parse_translation("!MC-2").unwrap();
        assert_eq!(
            apply_translation(&withdrawn, "b", 2, &mut bugs, &mut colors, &mut reviews),
            TranslationOutcome::Removed
        );
        assert!(bugs.is_empty());
    }

    #[test]
    fn test_approve_translation() {
        let mut reviews = ReviewCache::default();
        reviews.request("MC-3", "摘要", "a");

        assert_eq!(
            approve_translation("MC-3", "b", &mut reviews).unwrap(),
            ApprovalStatus::Pending { remaining: 1 }
        );
        assert_eq!(approve_translation("MC-3", "c", &mut reviews).unwrap(), ApprovalStatus::Accepted);
        assert!(reviews.is_empty());

        let err = approve_translation("MC-3", "d", &mut reviews).unwrap_err();
        assert!(matches!(err, ConversionError::Review(ReviewError::NotUnderReview(_))));
        assert_eq!(err.to_string(), "MC-3 doesn't accept reviews");
    }
}
