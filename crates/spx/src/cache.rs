//! Lookup caches shared between the translators' bot and the converter.
//!
//! The caches are plain serde maps. Reading and writing the JSON files is up
//! to the caller; [`resolve_bugs`] turns them into the [`BugLookup`] handed
//! to the converter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::converter::{BugLookup, ResolvedBug};
use crate::error::{Result, ReviewError};
use crate::text::LINK_COLOR;

/// Approvals needed before a reviewed translation is accepted.
pub const APPROVALS_REQUIRED: usize = 2;

/// Derive a stable display color from a translator name.
///
/// Java-style `String.hashCode` over UTF-16 code units, masked to 24 bits.
pub fn color_from_translator(translator: &str) -> String {
    let hash = translator
        .encode_utf16()
        .fold(0i32, |hash, unit| i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash)));
    format!("#{:06x}", hash & 0x00FF_FFFF)
}

/// A translated bug summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugEntry {
    /// Translated summary.
    pub summary: String,
    /// Who translated it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub date: i64,
}

/// Bug id to translated summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BugCache {
    entries: BTreeMap<String, BugEntry>,
}

impl BugCache {
    /// Load from the JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON, keys sorted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Entry for `id`.
    pub fn get(&self, id: &str) -> Option<&BugEntry> {
        self.entries.get(id)
    }

    /// Translated summary for `id`.
    pub fn summary(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.summary.as_str())
    }

    /// Insert or replace the translation of `id`.
    pub fn set(&mut self, id: impl Into<String>, summary: impl Into<String>, translator: Option<String>, date: i64) {
        self.entries.insert(
            id.into(),
            BugEntry {
                summary: summary.into(),
                translator,
                date,
            },
        );
    }

    /// Remove the translation of `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Option<BugEntry> {
        self.entries.remove(id)
    }

    /// Number of translated bugs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is translated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, entry)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BugEntry)> {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ColorEntry {
    color: String,
}

/// Translator name to display color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorCache {
    entries: BTreeMap<String, ColorEntry>,
}

impl ColorCache {
    /// Load from the JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON, keys sorted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether `translator` has a color.
    pub fn contains(&self, translator: &str) -> bool {
        self.entries.contains_key(translator)
    }

    /// Stored color of `translator`.
    pub fn get(&self, translator: &str) -> Option<&str> {
        self.entries.get(translator).map(|entry| entry.color.as_str())
    }

    /// Stored color, falling back to the one derived from the name.
    pub fn color_of(&self, translator: &str) -> String {
        self.get(translator)
            .map_or_else(|| color_from_translator(translator), str::to_string)
    }

    /// Set a color; it is lowercased and given a leading `#` when missing.
    pub fn set(&mut self, translator: impl Into<String>, color: &str) {
        let color = color.to_lowercase();
        let color = if color.starts_with('#') { color } else { format!("#{color}") };
        self.entries.insert(translator.into(), ColorEntry { color });
    }

    /// Forget the color of `translator`.
    pub fn remove(&mut self, translator: &str) -> bool {
        self.entries.remove(translator).is_some()
    }

    /// Every translator with a stored color.
    pub fn translators(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// A translation waiting for approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// Translated summary under review.
    pub summary: String,
    /// Who translated it.
    pub translator: String,
    /// Who has approved it so far.
    #[serde(default)]
    pub approvers: Vec<String>,
}

/// Bug id to pending review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewCache {
    entries: BTreeMap<String, ReviewEntry>,
}

impl ReviewCache {
    /// Load from the JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON, keys sorted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether `key` is under review.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Pending review for `key`.
    pub fn get(&self, key: &str) -> Option<&ReviewEntry> {
        self.entries.get(key)
    }

    /// Put a translation under review, discarding earlier approvals.
    pub fn request(&mut self, key: impl Into<String>, summary: impl Into<String>, translator: impl Into<String>) {
        self.entries.insert(
            key.into(),
            ReviewEntry {
                summary: summary.into(),
                translator: translator.into(),
                approvers: Vec::new(),
            },
        );
    }

    /// Drop the review of `key`.
    pub fn remove(&mut self, key: &str) -> Option<ReviewEntry> {
        self.entries.remove(key)
    }

    /// Whether no review is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over pending reviews in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ReviewEntry)> {
        self.entries.iter()
    }

    /// Record an approval of `key` by `approver`.
    ///
    /// # Errors
    ///
    /// Fails if `key` is not under review, if `approver` already approved it,
    /// or if `approver` is the translator.
    pub fn approve(&mut self, key: &str, approver: &str) -> std::result::Result<(), ReviewError> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| ReviewError::NotUnderReview(key.to_string()))?;
        if entry.approvers.iter().any(|existing| existing == approver) {
            return Err(ReviewError::AlreadyApproved {
                key: key.to_string(),
                approver: approver.to_string(),
            });
        }
        if entry.translator == approver {
            return Err(ReviewError::SelfApproval {
                key: key.to_string(),
                approver: approver.to_string(),
            });
        }
        entry.approvers.push(approver.to_string());
        Ok(())
    }

    /// Approvals `key` has received.
    pub fn approval_count(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, |entry| entry.approvers.len())
    }

    /// Whether `key` has enough approvals.
    pub fn is_approved(&self, key: &str) -> bool {
        self.approval_count(key) >= APPROVALS_REQUIRED
    }

    /// Approvals still missing for `key`.
    pub fn remaining_approvals(&self, key: &str) -> usize {
        APPROVALS_REQUIRED.saturating_sub(self.approval_count(key))
    }
}

/// Build the lookup the converter reads: every bug with its summary and the
/// display color of its translator.
pub fn resolve_bugs(bugs: &BugCache, colors: &ColorCache) -> BugLookup {
    bugs.iter()
        .map(|(id, entry)| {
            let color = entry
                .translator
                .as_deref()
                .map_or_else(|| LINK_COLOR.to_string(), |translator| colors.color_of(translator));
            (
                id.clone(),
                ResolvedBug {
                    summary: entry.summary.clone(),
                    color,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_translator() {
        assert_eq!(color_from_translator("a"), "#000061");
        assert_eq!(color_from_translator("SPGoding"), "#6762a3");
        assert_eq!(color_from_translator("ff98sha"), "#08586d");
        assert_eq!(color_from_translator("甲"), "#007532");
        assert_eq!(color_from_translator(""), "#000000");
    }

    #[test]
    fn test_resolve_bugs_colors() {
        let mut bugs = BugCache::default();
        bugs.set("MC-1", "无译者", None, 0);
        bugs.set("MC-2", "有译者", Some("SPGoding".to_string()), 0);
        bugs.set("MC-3", "自定义颜色", Some("ff98sha".to_string()), 0);
        let mut colors = ColorCache::default();
        colors.set("ff98sha", "FF0000");

        let lookup = resolve_bugs(&bugs, &colors);
        assert_eq!(lookup["MC-1"].color, "#388d40");
        assert_eq!(lookup["MC-2"].color, "#6762a3");
        assert_eq!(lookup["MC-3"].color, "#ff0000");
        assert_eq!(lookup["MC-2"].summary, "有译者");
    }

    #[test]
    fn test_bug_cache_json() {
        let json = r#"{"MC-4": {"summary": "苦力怕", "translator": "SPGoding", "date": 1600000000000}, "MC-5": {"summary": "僵尸"}}"#;
        let cache = BugCache::from_json(json).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.summary("MC-4"), Some("苦力怕"));
        assert_eq!(cache.get("MC-5").unwrap().translator, None);

        let saved = cache.to_json().unwrap();
        assert!(saved.contains("\"MC-4\""));
        assert!(!saved.contains("\"translator\": null"));
        assert_eq!(BugCache::from_json(&saved).unwrap(), cache);

        assert!(BugCache::from_json("[").is_err());
    }

    #[test]
    fn test_review_workflow() {
        let mut reviews = ReviewCache::default();
        reviews.request("MC-7", "摘要", "alice");

        assert_eq!(
            reviews.approve("MC-7", "alice"),
            Err(ReviewError::SelfApproval {
                key: "MC-7".to_string(),
                approver: "alice".to_string()
            })
        );
        reviews.approve("MC-7", "bob").unwrap();
        assert_eq!(reviews.remaining_approvals("MC-7"), 1);
        assert!(matches!(reviews.approve("MC-7", "bob"), Err(ReviewError::AlreadyApproved { .. })));
        reviews.approve("MC-7", "carol").unwrap();
        assert!(reviews.is_approved("MC-7"));

        assert_eq!(
            reviews.approve("MC-8", "bob"),
            Err(ReviewError::NotUnderReview("MC-8".to_string()))
        );
    }

    #[test]
    fn test_color_cache_normalizes() {
        let mut colors = ColorCache::default();
        colors.set("bob", "ABCDEF");
        assert_eq!(colors.get("bob"), Some("#abcdef"));
        assert_eq!(colors.color_of("a"), "#000061");
        assert_eq!(colors.translators().collect::<Vec<_>>(), ["bob"]);
        assert!(colors.remove("bob"));
        assert!(!colors.contains("bob"));
    }
}
