//! Inline element rules: links, emphasis and code spans.

#![allow(clippy::too_many_arguments)]

use crate::converter::context::{Attribution, Context};
use crate::converter::dom::{attribute, has_class};
use crate::converter::main::{convert_children, walk_children, wrap};
use crate::options::ConversionOptions;
use crate::text::{LINK_COLOR, resolve_url};

const CODE_PREFIX: &str = "[backcolor=White][font=Monaco,Consolas,'Lucida Console','Courier New',serif]";
const CODE_SUFFIX: &str = "[/font][/backcolor]";

const SERVER_CODE_PREFIX: &str = "[backcolor=White][font=Monaco,Consolas,serif][color=#7824c5]";
const SERVER_CODE_SUFFIX: &str = "[/color][/font][/backcolor]";

pub(crate) fn convert_anchor(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let url = attribute(tag, "href")
        .map(|href| resolve_url(href.trim(), &options.origin))
        .unwrap_or_default();
    let inner = convert_children(tag, parser, options, ctx, attribution);

    if url.is_empty() {
        output.push_str(&inner);
    } else {
        output.push_str(&format!("[url={url}][color={LINK_COLOR}]{inner}[/color][/url]"));
    }
}

/// `<code>`: monospace markup, punctuation left half-width inside.
pub(crate) fn convert_code(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let verbatim = ctx.verbatim();
    wrap(tag, CODE_PREFIX, CODE_SUFFIX, parser, output, options, &verbatim, attribution);
}

/// `<span>`: inline server code and strikethrough variants, otherwise transparent.
pub(crate) fn convert_span(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    if has_class(tag, "bedrock-server") {
        let verbatim = ctx.verbatim();
        wrap(
            tag,
            SERVER_CODE_PREFIX,
            SERVER_CODE_SUFFIX,
            parser,
            output,
            options,
            &verbatim,
            attribution,
        );
    } else if has_class(tag, "strikethrough") {
        wrap(tag, "[s]", "[/s]", parser, output, options, ctx, attribution);
    } else {
        walk_children(tag, parser, output, options, ctx, attribution);
    }
}
