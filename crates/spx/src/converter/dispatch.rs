//! Closed set of element kinds the converter understands.

/// Elements carrying this class are dropped.
pub const IGNORED_CLASS: &str = "spx-converter-ignored";

/// Conversion rule selected for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<a>`
    Anchor,
    /// `<b>`, `<strong>`
    Strong,
    /// `<blockquote>`
    Blockquote,
    /// `<br>`
    LineBreak,
    /// `<cite>`
    Cite,
    /// `<code>`
    Code,
    /// `<div>`, `<section>`
    Division,
    /// `<dd>`
    DefinitionDescription,
    /// `<dl>`
    DefinitionList,
    /// `<dt>`
    DefinitionTerm,
    /// `<em>`, `<i>`
    Emphasis,
    /// `<h1>` to `<h4>`
    Heading(u8),
    /// `<img>`
    Image,
    /// `<li>`
    ListItem,
    /// `<ol>`
    OrderedList,
    /// `<p>`
    Paragraph,
    /// `<picture>`
    Picture,
    /// `<span>`
    Span,
    /// `<table>`
    Table,
    /// `<tbody>`
    TableBody,
    /// `<td>`, `<th>`
    TableCell,
    /// `<tr>`
    TableRow,
    /// `<ul>`
    UnorderedList,
    /// Known non-content elements rendered as plain text.
    Opaque,
    /// Anything else; rendered as plain text with a warning.
    Unsupported,
}

impl TagKind {
    /// Every tag name with a dedicated rule.
    pub const SUPPORTED: &'static [&'static str] = &[
        "a",
        "b",
        "strong",
        "blockquote",
        "br",
        "cite",
        "code",
        "div",
        "section",
        "dd",
        "dl",
        "dt",
        "em",
        "i",
        "h1",
        "h2",
        "h3",
        "h4",
        "img",
        "li",
        "ol",
        "p",
        "picture",
        "span",
        "table",
        "tbody",
        "td",
        "th",
        "tr",
        "ul",
    ];

    /// Map a lowercased tag name to its rule.
    pub fn from_name(name: &str) -> Self {
        match name {
            "a" => Self::Anchor,
            "b" | "strong" => Self::Strong,
            "blockquote" => Self::Blockquote,
            "br" => Self::LineBreak,
            "cite" => Self::Cite,
            "code" => Self::Code,
            "div" | "section" => Self::Division,
            "dd" => Self::DefinitionDescription,
            "dl" => Self::DefinitionList,
            "dt" => Self::DefinitionTerm,
            "em" | "i" => Self::Emphasis,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "img" => Self::Image,
            "li" => Self::ListItem,
            "ol" => Self::OrderedList,
            "p" => Self::Paragraph,
            "picture" => Self::Picture,
            "span" => Self::Span,
            "table" => Self::Table,
            "tbody" => Self::TableBody,
            "td" | "th" => Self::TableCell,
            "tr" => Self::TableRow,
            "ul" => Self::UnorderedList,
            "button" | "h5" | "nav" | "svg" | "script" => Self::Opaque,
            _ => Self::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_names_have_rules() {
        for name in TagKind::SUPPORTED {
            let kind = TagKind::from_name(name);
            assert!(!matches!(kind, TagKind::Opaque | TagKind::Unsupported), "{name}");
        }
    }

    #[test]
    fn test_fallback_kinds() {
        assert_eq!(TagKind::from_name("nav"), TagKind::Opaque);
        assert_eq!(TagKind::from_name("h5"), TagKind::Opaque);
        assert_eq!(TagKind::from_name("marquee"), TagKind::Unsupported);
        assert_eq!(TagKind::from_name("h3"), TagKind::Heading(3));
        assert_eq!(TagKind::from_name("th"), TagKind::TableCell);
    }
}
