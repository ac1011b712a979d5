//! Images and image carousels.

use log::debug;

use crate::converter::context::{Attribution, Context};
use crate::converter::dom::{as_tag, attribute, child_handles, has_class, normalized_tag_name};
use crate::converter::main::convert_children;
use crate::options::{CarouselPolicy, ConversionOptions};
use crate::text::resolve_url;

/// Caption of a slide without a caption element.
const BLANK_CAPTION: &str = " ";

/// One picture of a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Absolute image URL.
    pub url: String,
    /// Converted caption, or a single space when the slide has none.
    pub caption: String,
}

impl Slide {
    fn has_caption(&self) -> bool {
        self.caption != BLANK_CAPTION
    }
}

/// `<img>`: author portraits are skipped, quote and byline avatars float left,
/// everything else is centred on its own line.
pub(crate) fn convert_image(tag: &tl::HTMLTag, output: &mut String, options: &ConversionOptions) {
    if attribute(tag, "alt").as_deref() == Some("Author image") {
        return;
    }

    let quote_avatar = has_class(tag, "attributed-quote__image");
    let byline_avatar = has_class(tag, "mr-3");
    let open = if quote_avatar {
        "[img=53,92]"
    } else if byline_avatar {
        "[img=82,121]"
    } else {
        "[img]"
    };
    let url = resolve_url(&attribute(tag, "src").unwrap_or_default(), &options.origin);

    if quote_avatar || byline_avatar {
        output.push_str(&format!("\n[float=left]{open}{url}[/img][/float]"));
    } else {
        output.push_str(&format!(
            "\n\n[/indent][/indent][align=center]{open}{url}[/img][/align][indent][indent]\n"
        ));
    }
}

/// Collect the slides below `handle`.
///
/// Cloned slides are skipped, and the search only descends through `<div>`
/// and `<img>` elements. A caption element attaches to the most recent slide.
pub(crate) fn find_slides(
    handle: tl::NodeHandle,
    parser: &tl::Parser,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
    slides: &mut Vec<Slide>,
) {
    let Some(tag) = as_tag(handle, parser) else { return };
    if has_class(tag, "slick-cloned") {
        return;
    }

    let tag_name = normalized_tag_name(tag);
    if tag_name == "img" && has_class(tag, "article-image-carousel__image") {
        slides.push(Slide {
            url: resolve_url(&attribute(tag, "src").unwrap_or_default(), &options.origin),
            caption: BLANK_CAPTION.to_string(),
        });
    } else if tag_name == "div" && has_class(tag, "article-image-carousel__caption") {
        let caption = format!("[b]{}[/b]", convert_children(tag, parser, options, ctx, attribution));
        if let Some(last) = slides.last_mut() {
            last.caption = caption;
        }
    } else {
        find_child_slides(tag, parser, options, ctx, attribution, slides);
    }
}

fn find_child_slides(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
    slides: &mut Vec<Slide>,
) {
    for child in child_handles(tag) {
        let descend = as_tag(child, parser).is_some_and(|child_tag| {
            let name = normalized_tag_name(child_tag);
            name == "div" || name == "img"
        });
        if descend {
            find_slides(child, parser, options, ctx, attribution, slides);
        }
    }
}

/// Whether a set of slides is rendered as an album.
#[must_use]
pub fn should_use_album(policy: CarouselPolicy, slides: &[Slide]) -> bool {
    match policy {
        CarouselPolicy::AlbumWhenMultiple => slides.len() > 1,
        CarouselPolicy::AlbumWhenCaptionless => slides.iter().all(|slide| !slide.has_caption()),
    }
}

/// Render collected slides; no slides render nothing.
#[must_use]
pub fn render_slides(slides: &[Slide], policy: CarouselPolicy) -> String {
    if slides.is_empty() {
        return String::new();
    }

    if should_use_album(policy, slides) {
        let images = slides
            .iter()
            .map(|slide| format!("[aimg={}]{}[/aimg]", slide.url, slide.caption))
            .collect::<Vec<_>>()
            .join("\n");
        format!("[/indent][/indent][album]\n{images}\n[/album][indent][indent]\n")
    } else {
        let images = slides
            .iter()
            .map(|slide| format!("[/indent][/indent][align=center][img]{}[/img]\n{}", slide.url, slide.caption))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{images}[/align][indent][indent]\n")
    }
}

pub(crate) fn convert_carousel(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    attribution: &mut Attribution,
) {
    let mut slides = Vec::new();
    find_child_slides(tag, parser, options, ctx, attribution, &mut slides);
    debug!("Carousel with {} slide(s), album: {}", slides.len(), should_use_album(options.carousel, &slides));
    output.push_str(&render_slides(&slides, options.carousel));
}
