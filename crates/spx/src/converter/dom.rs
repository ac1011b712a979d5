//! Read-only helpers over the `tl` DOM.

use std::borrow::Cow;

/// Lowercased tag name.
pub(crate) fn normalized_tag_name(tag: &tl::HTMLTag) -> String {
    tag.name().as_utf8_str().to_ascii_lowercase()
}

/// Check whether `class` appears in the tag's class list.
pub(crate) fn has_class(tag: &tl::HTMLTag, class: &str) -> bool {
    tag.attributes()
        .get("class")
        .flatten()
        .is_some_and(|value| value.as_utf8_str().split_whitespace().any(|c| c == class))
}

/// Attribute value with HTML entities decoded.
pub(crate) fn attribute(tag: &tl::HTMLTag, name: &'static str) -> Option<String> {
    tag.attributes()
        .get(name)
        .flatten()
        .map(|value| html_escape::decode_html_entities(value.as_utf8_str().as_ref()).into_owned())
}

/// Direct children of a tag, in document order.
pub(crate) fn child_handles(tag: &tl::HTMLTag) -> Vec<tl::NodeHandle> {
    tag.children().top().iter().copied().collect()
}

/// Decoded text content of any node.
pub(crate) fn text_content(node: &tl::Node, parser: &tl::Parser) -> String {
    let raw: Cow<'_, str> = match node {
        tl::Node::Tag(tag) => tag.inner_text(parser),
        tl::Node::Raw(bytes) => bytes.as_utf8_str(),
        tl::Node::Comment(bytes) => {
            let comment = bytes.as_utf8_str();
            let body = comment.trim_start_matches("<!--").trim_end_matches("-->");
            Cow::Owned(body.to_string())
        }
    };
    html_escape::decode_html_entities(raw.as_ref()).into_owned()
}

/// First element, depth first in document order, matching `predicate`.
pub(crate) fn find_first<F>(handles: &[tl::NodeHandle], parser: &tl::Parser, predicate: &F) -> Option<tl::NodeHandle>
where
    F: Fn(&tl::HTMLTag) -> bool,
{
    for handle in handles {
        if let Some(tl::Node::Tag(tag)) = handle.get(parser) {
            if predicate(tag) {
                return Some(*handle);
            }
            if let Some(found) = find_first(&child_handles(tag), parser, predicate) {
                return Some(found);
            }
        }
    }
    None
}

/// First element carrying `class`.
pub(crate) fn find_by_class(handles: &[tl::NodeHandle], parser: &tl::Parser, class: &str) -> Option<tl::NodeHandle> {
    find_first(handles, parser, &|tag: &tl::HTMLTag| has_class(tag, class))
}

/// First element named `name`.
pub(crate) fn find_by_tag(handles: &[tl::NodeHandle], parser: &tl::Parser, name: &str) -> Option<tl::NodeHandle> {
    find_first(handles, parser, &|tag: &tl::HTMLTag| normalized_tag_name(tag) == name)
}

/// Resolve a handle to its tag, if it is one.
pub(crate) fn as_tag<'p, 'a>(handle: tl::NodeHandle, parser: &'p tl::Parser<'a>) -> Option<&'p tl::HTMLTag<'a>> {
    match handle.get(parser) {
        Some(tl::Node::Tag(tag)) => Some(tag),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_class_and_attributes() {
        let html = r#"<div><section class="a article-body b"><img class="x" src="/a.png?x=1&amp;y=2"></section></div>"#;
        let dom = tl::parse(html, tl::ParserOptions::default()).unwrap();
        let parser = dom.parser();

        let body = find_by_class(dom.children(), parser, "article-body").unwrap();
        let body_tag = as_tag(body, parser).unwrap();
        assert_eq!(normalized_tag_name(body_tag), "section");
        assert!(has_class(body_tag, "b"));
        assert!(!has_class(body_tag, "article"));

        let img = find_by_tag(dom.children(), parser, "img").unwrap();
        let img_tag = as_tag(img, parser).unwrap();
        assert_eq!(attribute(img_tag, "src").as_deref(), Some("/a.png?x=1&y=2"));
        assert_eq!(attribute(img_tag, "alt"), None);

        assert!(find_by_class(dom.children(), parser, "missing").is_none());
    }

    #[test]
    fn test_text_content_decodes_entities() {
        let dom = tl::parse("<p>Tom &amp; <b>Jerry</b></p>", tl::ParserOptions::default()).unwrap();
        let parser = dom.parser();
        let p = dom.children()[0].get(parser).unwrap();
        assert_eq!(text_content(p, parser), "Tom & Jerry");
    }
}
