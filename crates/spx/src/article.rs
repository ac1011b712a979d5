//! Whole-page entry points for minecraft.net, feedback and help articles.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::converter::dom::{as_tag, attribute, find_by_class, find_by_tag, find_first, text_content};
use crate::converter::main::{convert_element, convert_nodes};
use crate::converter::{ArticleMeta, Attribution, BugLookup, Context};
use crate::error::{ConversionError, Result};
use crate::options::ConversionOptions;
use crate::postprocess;
use crate::templates::{self, SPX_CREDIT};
use crate::text::{LINK_COLOR, resolve_url, translate_machinely};

static BETA_NOTICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?si)\[size=2\]\[color=Silver\]\[b\]PLEASE READ before participating in the Minecraft Beta: \[/b\]\[/color\]\[/size\].*?\[/list\]",
    )
    .expect("valid regex")
});

const FEEDBACK_TITLE_SUFFIX: &str = " – Minecraft Feedback";
const HELP_TITLE_SUFFIX: &str = " – Home";

/// Release channel an article announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionType {
    /// Java Edition snapshot.
    Snapshot,
    /// Java Edition pre-release.
    PreRelease,
    /// Java Edition release candidate.
    ReleaseCandidate,
    /// Java Edition release.
    Release,
    /// Bedrock Edition release changelog.
    BedrockRelease,
    /// Bedrock Edition beta changelog.
    BedrockBeta,
    /// Anything else.
    #[default]
    Normal,
}

impl VersionType {
    /// Guess the release channel of a minecraft.net article from its URL.
    pub fn from_url(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("pre-release") {
            Self::PreRelease
        } else if url.contains("release-candidate") {
            Self::ReleaseCandidate
        } else if url.contains("snapshot") {
            Self::Snapshot
        } else if url.contains("minecraft java edition") {
            Self::Release
        } else {
            Self::Normal
        }
    }
}

fn parse_document(html: &str) -> Result<tl::VDom<'_>> {
    tl::parse(html, tl::ParserOptions::default())
        .map_err(|_| ConversionError::ParseError("Failed to parse HTML".to_string()))
}

/// Text of the document `<title>`, empty when there is none.
fn document_title(dom: &tl::VDom) -> String {
    let parser = dom.parser();
    find_by_tag(dom.children(), parser, "title")
        .and_then(|handle| handle.get(parser))
        .map(|node| text_content(node, parser).trim().to_string())
        .unwrap_or_default()
}

/// Article title from a minecraft.net page title: the last ` | ` segment is
/// the site name.
pub fn minecraft_title(page_title: &str) -> String {
    let segments: Vec<&str> = page_title.split(" | ").collect();
    segments[..segments.len().saturating_sub(1)].join(" | ")
}

/// Drop the site suffix from a help-center page title.
pub fn strip_title_suffix<'a>(page_title: &'a str, suffix: &str) -> &'a str {
    page_title.rfind(suffix).map_or(page_title, |index| &page_title[..index])
}

/// Upper-cased article category, empty when the page has none.
fn article_category(dom: &tl::VDom) -> String {
    let parser = dom.parser();
    find_by_class(dom.children(), parser, "article-category__text")
        .and_then(|handle| handle.get(parser))
        .map(|node| text_content(node, parser).trim().to_uppercase())
        .unwrap_or_default()
}

fn hero_image(dom: &tl::VDom, category: &str, options: &ConversionOptions) -> String {
    let category_block = if category.is_empty() {
        String::new()
    } else {
        format!(
            "\n[backcolor=Black][color=White][font=\"Noto Sans\",sans-serif][b]{category}[/b][/font][/color][/backcolor][/align]"
        )
    };

    let parser = dom.parser();
    let image = find_by_class(dom.children(), parser, "article-head__image").and_then(|handle| as_tag(handle, parser));
    match image {
        Some(tag) => {
            let src = resolve_url(&attribute(tag, "src").unwrap_or_default(), &options.origin);
            format!("[postbg]bg3.png[/postbg][align=center][img=1200,513]{src}[/img]\n{category_block}[indent][indent]\n")
        }
        None => format!("[postbg]bg3.png[/postbg]\n\n[align=center]{category_block}[indent][indent]\n"),
    }
}

fn feedback_version(dom: &tl::VDom) -> VersionType {
    let parser = dom.parser();
    let has_title = |wanted: &str| {
        find_first(dom.children(), parser, &|tag: &tl::HTMLTag| {
            attribute(tag, "title").as_deref() == Some(wanted)
        })
        .is_some()
    };

    if has_title("Beta Information and Changelogs") {
        VersionType::BedrockBeta
    } else if has_title("Release Changelogs") {
        VersionType::BedrockRelease
    } else {
        VersionType::Normal
    }
}

/// Convert the children of the first element with `class`.
fn convert_root(
    dom: &tl::VDom,
    step: &'static str,
    class: &'static str,
    meta: &ArticleMeta,
    bugs: &BugLookup,
    options: &ConversionOptions,
) -> Result<String> {
    let parser = dom.parser();
    let root = find_by_class(dom.children(), parser, class).ok_or(ConversionError::MissingElement { step, class })?;
    let ctx = Context::new(meta, bugs);
    let mut attribution = Attribution::default();
    Ok(convert_element(Some(root), parser, options, &ctx, &mut attribution))
}

/// Use the caller's title when given, otherwise the one derived from the page.
fn with_title(meta: &ArticleMeta, derive: impl FnOnce() -> String) -> ArticleMeta {
    let mut meta = meta.clone();
    if meta.title.is_empty() {
        meta.title = derive();
    }
    meta
}

fn title_block(title: &str) -> String {
    let translated = translate_machinely(&format!("[size=6][b]{title}[/b][/size]"), false);
    format!("[size=6][b][color=Silver]{title}[/color][/b][/size]\n{translated}\n\n")
}

fn source_footer(meta: &ArticleMeta, site: &str) -> String {
    format!(
        "[b]【{} 译自[url={}][color={LINK_COLOR}][u]{site} 哪 年 哪 月 哪 日发布的 {}[/u][/color][/url]】[/b]\n{SPX_CREDIT}\n\n",
        meta.translator, meta.url, meta.title
    )
}

/// Convert a minecraft.net article page.
///
/// # Errors
///
/// Returns [`ConversionError::MissingElement`] when the page has no
/// `article-body` element.
pub fn convert_minecraft_article(
    html: &str,
    meta: &ArticleMeta,
    bugs: &BugLookup,
    options: &ConversionOptions,
) -> Result<String> {
    let dom = parse_document(html)?;
    let category = article_category(&dom);
    let version = VersionType::from_url(&meta.url);
    debug!("Article category '{category}', version type {version:?}");
    let meta = with_title(meta, || minecraft_title(&document_title(&dom)));

    let beginning = templates::beginning(&category, version);
    let hero = hero_image(&dom, &category, options);
    let body = convert_root(&dom, "minecraft.net article content", "article-body", &meta, bugs, options)?;
    let content = postprocess::finalize_article(&body);
    let ending = templates::ending(&category, version);

    Ok(format!("{beginning}{hero}{content}[/indent][/indent]{ending}"))
}

/// Convert a feedback.minecraft.net article page.
///
/// # Errors
///
/// Returns [`ConversionError::MissingElement`] when the page has no
/// `article-info` element.
pub fn convert_feedback_article(html: &str, meta: &ArticleMeta, options: &ConversionOptions) -> Result<String> {
    let dom = parse_document(html)?;
    let meta = with_title(meta, || {
        strip_title_suffix(&document_title(&dom), FEEDBACK_TITLE_SUFFIX).to_string()
    });
    let version = feedback_version(&dom);

    let body = convert_root(&dom, "feedback article content", "article-info", &meta, &BugLookup::new(), options)?;
    let content = postprocess::fix_spacing(&body);
    let content = BETA_NOTICE.replace(&content, "");

    Ok(format!(
        "{}{}{content}[/indent][/indent]\n\n{}{}",
        templates::beginning("news", version),
        title_block(&meta.title),
        source_footer(&meta, "feedback.minecraft.net"),
        templates::ending("news", version),
    ))
}

/// Convert a help.minecraft.net article page.
///
/// # Errors
///
/// Returns [`ConversionError::MissingElement`] when the page has no
/// `article-body` element.
pub fn convert_help_article(html: &str, meta: &ArticleMeta, options: &ConversionOptions) -> Result<String> {
    let dom = parse_document(html)?;
    let meta = with_title(meta, || strip_title_suffix(&document_title(&dom), HELP_TITLE_SUFFIX).to_string());

    let body = convert_root(&dom, "help article content", "article-body", &meta, &BugLookup::new(), options)?;
    let content = postprocess::fix_spacing(&body);

    Ok(format!(
        "{}{content}[/indent][/indent]\n\n{}",
        title_block(&meta.title),
        source_footer(&meta, "help.minecraft.net"),
    ))
}

/// Convert an HTML fragment node by node, without any document-level pass.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] if the fragment cannot be parsed.
pub fn convert_fragment(html: &str, meta: &ArticleMeta, bugs: &BugLookup, options: &ConversionOptions) -> Result<String> {
    let dom = parse_document(html)?;
    let ctx = Context::new(meta, bugs);
    let mut attribution = Attribution::default();
    Ok(convert_nodes(dom.children(), dom.parser(), options, &ctx, &mut attribution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_type_from_url() {
        let base = "https://www.minecraft.net/en-us/article/";
        assert_eq!(VersionType::from_url(&format!("{base}minecraft-1-17-pre-release-1")), VersionType::PreRelease);
        assert_eq!(
            VersionType::from_url(&format!("{base}minecraft-1-17-release-candidate-1")),
            VersionType::ReleaseCandidate
        );
        assert_eq!(VersionType::from_url(&format!("{base}minecraft-snapshot-21w15a")), VersionType::Snapshot);
        assert_eq!(VersionType::from_url("Minecraft Java Edition 1.17"), VersionType::Release);
        assert_eq!(VersionType::from_url(&format!("{base}taking-inventory-axolotl")), VersionType::Normal);
    }

    #[test]
    fn test_titles() {
        assert_eq!(minecraft_title("Minecraft Snapshot 21w15a | Minecraft"), "Minecraft Snapshot 21w15a");
        assert_eq!(minecraft_title("A | B | Minecraft"), "A | B");
        assert_eq!(minecraft_title("Minecraft"), "");
        assert_eq!(strip_title_suffix("Beta 1.17 – Minecraft Feedback", FEEDBACK_TITLE_SUFFIX), "Beta 1.17");
        assert_eq!(strip_title_suffix("Plain", HELP_TITLE_SUFFIX), "Plain");
    }

    #[test]
    fn test_category_and_hero_image() {
        let html = r#"<html><body><div class="article-category__text">News</div>
            <img class="article-head__image" src="/hero.jpg"></body></html>"#;
        let dom = parse_document(html).unwrap();
        assert_eq!(article_category(&dom), "NEWS");
        assert_eq!(
            hero_image(&dom, "NEWS", &ConversionOptions::default()),
            "[postbg]bg3.png[/postbg][align=center][img=1200,513]https://www.minecraft.net/hero.jpg[/img]\n\
             \n[backcolor=Black][color=White][font=\"Noto Sans\",sans-serif][b]NEWS[/b][/font][/color][/backcolor][/align][indent][indent]\n"
        );

        let bare = parse_document("<p>x</p>").unwrap();
        assert_eq!(article_category(&bare), "");
        assert_eq!(
            hero_image(&bare, "", &ConversionOptions::default()),
            "[postbg]bg3.png[/postbg]\n\n[align=center][indent][indent]\n"
        );
    }

    #[test]
    fn test_feedback_version() {
        let beta = parse_document(r#"<a title="Beta Information and Changelogs">Beta</a>"#).unwrap();
        assert_eq!(feedback_version(&beta), VersionType::BedrockBeta);
        let release = parse_document(r#"<a title="Release Changelogs">Release</a>"#).unwrap();
        assert_eq!(feedback_version(&release), VersionType::BedrockRelease);
        let other = parse_document("<a>x</a>").unwrap();
        assert_eq!(feedback_version(&other), VersionType::Normal);
    }

    #[test]
    fn test_missing_root_names_step() {
        let meta = ArticleMeta::new("X", "https://www.minecraft.net/en-us/article/x", "");
        let err = convert_minecraft_article("<p>no body</p>", &meta, &BugLookup::new(), &ConversionOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::MissingElement {
                class: "article-body",
                ..
            }
        ));
        assert!(err.to_string().contains("minecraft.net article content"));

        let err = convert_feedback_article("<p>x</p>", &meta, &ConversionOptions::default()).unwrap_err();
        assert!(err.to_string().contains("article-info"));
    }
}
