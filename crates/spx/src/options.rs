//! Configuration options for article conversion.

use serde::{Deserialize, Serialize};

/// Default origin prepended to root-relative URLs.
pub const DEFAULT_ORIGIN: &str = "https://www.minecraft.net";

/// How text nodes have their whitespace collapsed.
///
/// Both variants are in use: the article converters strip formatting
/// whitespace entirely, while the older standalone converter collapsed it to
/// single spaces and trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhitespacePolicy {
    /// Remove `[\n\r\t]+` runs, then remove any remaining run of two or more whitespace characters.
    #[default]
    Strip,
    /// Replace `[\n\r]+` runs with a space, squeeze whitespace runs to one space, then trim.
    CollapseAndTrim,
}

impl WhitespacePolicy {
    /// Parse a policy name as used on the command line.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "strip" => Some(Self::Strip),
            "collapse" | "collapse-and-trim" => Some(Self::CollapseAndTrim),
            _ => None,
        }
    }
}

/// Decides how an image carousel is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarouselPolicy {
    /// Use an album when the carousel has at least two slides.
    #[default]
    AlbumWhenMultiple,
    /// Use an album only when no slide carries a caption.
    AlbumWhenCaptionless,
}

/// Whether the tree walker drops a single trailing line break from each
/// element's assembled children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinebreakPolicy {
    /// Leave assembled output untouched.
    #[default]
    Keep,
    /// Remove one trailing `\n`.
    TrimLast,
}

/// Main conversion options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Text node whitespace handling.
    pub whitespace: WhitespacePolicy,

    /// Image carousel rendering decision.
    pub carousel: CarouselPolicy,

    /// Trailing line break handling in the tree walker.
    pub trailing_linebreak: LinebreakPolicy,

    /// Origin used to resolve root-relative `href`/`src` values.
    pub origin: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            whitespace: WhitespacePolicy::default(),
            carousel: CarouselPolicy::default(),
            trailing_linebreak: LinebreakPolicy::default(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConversionOptions::default();
        assert_eq!(options.whitespace, WhitespacePolicy::Strip);
        assert_eq!(options.carousel, CarouselPolicy::AlbumWhenMultiple);
        assert_eq!(options.trailing_linebreak, LinebreakPolicy::Keep);
        assert_eq!(options.origin, "https://www.minecraft.net");
    }

    #[test]
    fn test_whitespace_policy_parse() {
        assert_eq!(WhitespacePolicy::parse("strip"), Some(WhitespacePolicy::Strip));
        assert_eq!(WhitespacePolicy::parse("Collapse"), Some(WhitespacePolicy::CollapseAndTrim));
        assert_eq!(WhitespacePolicy::parse("other"), None);
    }

    #[test]
    fn test_partial_options_deserialize() {
        let options: ConversionOptions = serde_json::from_str(r#"{"carousel":"album-when-captionless"}"#).unwrap();
        assert_eq!(options.carousel, CarouselPolicy::AlbumWhenCaptionless);
        assert_eq!(options.origin, DEFAULT_ORIGIN);
    }
}
