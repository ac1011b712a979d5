//! Block element rules.
//!
//! Headings, paragraphs and list items are rendered twice: a muted copy of the
//! source text followed by the machine-translated copy.

#![allow(clippy::too_many_arguments)]

use crate::converter::context::{Attribution, Context};
use crate::converter::dom::{as_tag, attribute, child_handles, has_class, normalized_tag_name};
use crate::converter::main::{convert_children, walk_children};
use crate::converter::media;
use crate::options::ConversionOptions;
use crate::templates::SPX_CREDIT;
use crate::text::{GREY_COLOR, LINK_COLOR, join_lines, slice_chars, to_grey, translate_bugs, translate_machinely};

const VIDEO_PLACEHOLDER: &str =
    "\n[/indent][/indent][align=center]【请将此处替换为含https的视频链接[media]XXX[/media]】[/align][indent][indent]\n";

/// `<h1>` to `<h4>`: sizes 6 down to 3, every level but the first opens a new line.
pub(crate) fn convert_heading(
    tag: &tl::HTMLTag,
    level: u8,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let size = 7u8.saturating_sub(level);
    let open = format!("[size={size}][b]");
    let close = "[/b][/size]";
    let inner = convert_children(tag, parser, options, ctx, attribution);
    let translated = translate_machinely(&format!("{open}{inner}{close}"), ctx.disable_punctuation_conversion);

    if level > 1 {
        output.push('\n');
    }
    output.push_str(&open);
    output.push_str(&format!("[color={GREY_COLOR}]"));
    output.push_str(&join_lines(&to_grey(&inner)));
    output.push_str("[/color]");
    output.push_str(close);
    output.push('\n');
    output.push_str(&join_lines(&translated));
    output.push_str("\n\n");
}

pub(crate) fn convert_paragraph(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let inner = convert_children(tag, parser, options, ctx, attribution);

    if has_class(tag, "lead") {
        let translated = translate_machinely(&inner, ctx.disable_punctuation_conversion);
        output.push_str(&format!(
            "[size=4][b][size=2][color={GREY_COLOR}]{inner}[/color][/size][/b][/size]\n[size=4][b]{translated}[/b][/size]\n\n"
        ));
    } else if ctx.in_list {
        output.push_str(&inner);
    } else {
        let translated = translate_machinely(&inner, ctx.disable_punctuation_conversion);
        output.push_str(&format!(
            "[size=2][color={GREY_COLOR}]{}[/color][/size]\n{translated}\n\n",
            to_grey(&inner)
        ));
    }
}

pub(crate) fn convert_list_item(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let inner = convert_children(tag, parser, options, &ctx.within_list(), attribution);
    let translated = translate_machinely(&translate_bugs(&inner, ctx.bugs), ctx.disable_punctuation_conversion);

    if wraps_only_a_list(tag, parser) {
        output.push_str(&format!("[*]{translated}\n"));
    } else {
        output.push_str(&format!("[*][color={GREY_COLOR}]{}[/color]\n[*]{translated}\n", to_grey(&inner)));
    }
}

/// An item whose single child node is itself a list only groups sub-items.
fn wraps_only_a_list(tag: &tl::HTMLTag, parser: &tl::Parser) -> bool {
    match child_handles(tag).as_slice() {
        [only] => as_tag(*only, parser).is_some_and(|child| matches!(normalized_tag_name(child).as_str(), "ol" | "ul")),
        _ => false,
    }
}

/// `<div>` and `<section>`: class-driven variants, otherwise transparent.
pub(crate) fn convert_division(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    if has_class(tag, "text-center") {
        let inner = convert_children(tag, parser, options, ctx, attribution);
        output.push_str(&format!("[/indent][/indent][align=center]{inner}[/align][indent][indent]\n"));
    } else if has_class(tag, "article-image-carousel") {
        media::convert_carousel(tag, parser, output, options, ctx, attribution);
    } else if has_class(tag, "video") {
        output.push_str(VIDEO_PLACEHOLDER);
    } else if has_class(tag, "quote") || has_class(tag, "attributed-quote") {
        let inner = convert_children(tag, parser, options, ctx, attribution);
        output.push_str(&format!("\n[quote]\n{inner}\n[/quote]\n"));
    } else if has_class(tag, "article-social") || has_class(tag, "modal") {
        // Share buttons and dialogs have no place in a forum post.
    } else {
        walk_children(tag, parser, output, options, ctx, attribution);
    }
}

/// `<dl>`: the article footer, closed with the tool credit.
pub(crate) fn convert_definition_list(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let inner = convert_children(tag, parser, options, ctx, attribution);
    output.push_str(&format!("\n\n{inner}\n{SPX_CREDIT}\n\n"));
}

/// `<dd>`: the publish date renders the translator credit, any other entry
/// is the author and is only recorded.
pub(crate) fn convert_definition_description(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    if !has_class(tag, "pubDate") {
        let author = convert_children(tag, parser, options, ctx, attribution);
        attribution.author = Some(author);
        return;
    }

    let Context {
        translator, url, title, ..
    } = *ctx;

    match attribute(tag, "data-value") {
        Some(date) => {
            let year = slice_chars(&date, 0, 4);
            let month = slice_chars(&date, 5, 7);
            let day = slice_chars(&date, 8, 10);
            let author = attribution.author.as_deref().unwrap_or_default();
            output.push_str(&format!(
                "[b]【{translator} 译自[url={url}][color={LINK_COLOR}][u]官网 {year} 年 {month} 月 {day} 日发布的 {title}[/u][/color][/url]；原作者 {author}】[/b]"
            ));
        }
        None => output.push_str(&format!(
            "[b]【{translator} 译自[url={url}][color={LINK_COLOR}][u]官网 哪 年 哪 月 哪 日发布的 {title}[/u][/color][/url]】[/b]"
        )),
    }
}
