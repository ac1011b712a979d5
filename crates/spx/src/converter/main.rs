//! Recursive tree walker for HTML to BBCode conversion.
//!
//! [`walk_node`] dispatches a node on its [`TagKind`] to one conversion rule.
//! Rules that wrap their children call back into [`walk_children`], which
//! converts child nodes strictly in document order.

#![allow(clippy::too_many_arguments)]

use log::warn;

use crate::converter::context::{Attribution, Context};
use crate::converter::dispatch::{IGNORED_CLASS, TagKind};
use crate::converter::dom::{as_tag, child_handles, has_class, normalized_tag_name, text_content};
use crate::converter::{block, inline, media};
use crate::options::{ConversionOptions, LinebreakPolicy};
use crate::text;

/// Convert one node and append the result to `output`.
pub(crate) fn walk_node(
    node_handle: &tl::NodeHandle,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let Some(node) = node_handle.get(parser) else { return };

    match node {
        tl::Node::Raw(bytes) => {
            let raw = bytes.as_utf8_str();
            let decoded = html_escape::decode_html_entities(raw.as_ref());
            output.push_str(&text::collapse_whitespace(&decoded, options.whitespace));
        }

        tl::Node::Comment(_) => {
            warn!("Unknown node type: 'comment'.");
            output.push_str(&text_content(node, parser));
        }

        tl::Node::Tag(tag) => {
            if has_class(tag, IGNORED_CLASS) {
                return;
            }

            let tag_name = normalized_tag_name(tag);
            match TagKind::from_name(&tag_name) {
                TagKind::Anchor => inline::convert_anchor(tag, parser, output, options, ctx, attribution),
                TagKind::Strong => wrap(tag, "[b]", "[/b]", parser, output, options, ctx, attribution),
                TagKind::Emphasis => wrap(tag, "[i]", "[/i]", parser, output, options, ctx, attribution),
                TagKind::Cite => wrap(tag, "—— ", "", parser, output, options, ctx, attribution),
                TagKind::Code => inline::convert_code(tag, parser, output, options, ctx, attribution),
                TagKind::Span => inline::convert_span(tag, parser, output, options, ctx, attribution),
                TagKind::LineBreak => output.push('\n'),
                TagKind::Blockquote | TagKind::Picture | TagKind::TableBody => {
                    walk_children(tag, parser, output, options, ctx, attribution);
                }
                TagKind::Division => block::convert_division(tag, parser, output, options, ctx, attribution),
                TagKind::Heading(level) => {
                    block::convert_heading(tag, level, parser, output, options, ctx, attribution);
                }
                TagKind::Paragraph => block::convert_paragraph(tag, parser, output, options, ctx, attribution),
                TagKind::ListItem => block::convert_list_item(tag, parser, output, options, ctx, attribution),
                TagKind::OrderedList => {
                    wrap(tag, "[list=1]\n", "[/list]\n", parser, output, options, ctx, attribution);
                }
                TagKind::UnorderedList => {
                    wrap(tag, "[list]\n", "[/list]\n", parser, output, options, ctx, attribution);
                }
                TagKind::DefinitionList => {
                    block::convert_definition_list(tag, parser, output, options, ctx, attribution);
                }
                TagKind::DefinitionTerm => {}
                TagKind::DefinitionDescription => {
                    block::convert_definition_description(tag, parser, output, options, ctx, attribution);
                }
                TagKind::Table => {
                    wrap(tag, "\n[table]\n", "[/table]\n", parser, output, options, ctx, attribution);
                }
                TagKind::TableRow => wrap(tag, "[tr]", "[/tr]\n", parser, output, options, ctx, attribution),
                TagKind::TableCell => wrap(tag, "[td]", "[/td]", parser, output, options, ctx, attribution),
                TagKind::Image => media::convert_image(tag, output, options),
                TagKind::Opaque => output.push_str(&text_content(node, parser)),
                TagKind::Unsupported => {
                    warn!("Unknown type: '{tag_name}'.");
                    output.push_str(&text_content(node, parser));
                }
            }
        }
    }
}

/// Convert every child of `tag` in document order, appending to `output`.
pub(crate) fn walk_children(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let start_len = output.len();
    for child_handle in child_handles(tag) {
        walk_node(&child_handle, parser, output, options, ctx, attribution);
    }

    if options.trailing_linebreak == LinebreakPolicy::TrimLast && output.len() > start_len {
        text::trim_last_linebreak(output);
    }
}

/// Surround the converted children with fixed markup.
pub(crate) fn wrap(
    tag: &tl::HTMLTag,
    prefix: &str,
    suffix: &str,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    output.push_str(prefix);
    walk_children(tag, parser, output, options, ctx, attribution);
    output.push_str(suffix);
}

/// Convert the children of `tag` into a fresh string.
pub(crate) fn convert_children(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) -> String {
    let mut inner = String::new();
    walk_children(tag, parser, &mut inner, options, ctx, attribution);
    inner
}

/// Convert the children of an optional element; an absent element yields an
/// empty string.
pub(crate) fn convert_element(
    element: Option<tl::NodeHandle>,
    parser: &tl::Parser,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) -> String {
    element
        .and_then(|handle| as_tag(handle, parser))
        .map(|tag| convert_children(tag, parser, options, ctx, attribution))
        .unwrap_or_default()
}

/// Convert a sequence of sibling nodes, such as the top level of a fragment.
pub(crate) fn convert_nodes(
    handles: &[tl::NodeHandle],
    parser: &tl::Parser,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) -> String {
    let mut output = String::new();
    for handle in handles {
        walk_node(handle, parser, &mut output, options, ctx, attribution);
    }
    output
}
