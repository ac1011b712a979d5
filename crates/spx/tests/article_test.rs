//! End-to-end conversion of whole pages and fragments.

use pretty_assertions::assert_eq;
use spx::templates::{self, SPX_CREDIT};
use spx::{
    ArticleMeta, BugCache, BugLookup, ColorCache, ConversionError, ConversionOptions, VersionType,
    convert_feedback_article, convert_fragment, convert_help_article, convert_minecraft_article, resolve_bugs,
};

const ARTICLE_URL: &str = "https://www.minecraft.net/en-us/article/minecraft-snapshot-21w15a";

fn meta(url: &str) -> ArticleMeta {
    ArticleMeta::new("X", url, "")
}

#[test]
fn test_minecraft_article_minimal() {
    let html = concat!(
        "<html><head><title>Hello | Minecraft</title></head><body>",
        r#"<div class="article-body"><h1>Title</h1><p>Hello, world.</p></div>"#,
        "</body></html>"
    );
    let output = convert_minecraft_article(
        html,
        &meta("https://www.minecraft.net/en-us/article/hello"),
        &BugLookup::new(),
        &ConversionOptions::default(),
    )
    .unwrap();

    assert_eq!(
        output,
        "[postbg]bg3.png[/postbg]\n\n[align=center][indent][indent]\n\
         [size=6][b][color=Silver]Title[/color][/b][/size]\n[size=6][b]Title[/b][/size]\n\n\
         [size=2][color=Silver]Hello, world.[/color][/size]\nHello，world。\n\n\
         [/indent][/indent]"
    );
}

#[test]
fn test_minecraft_news_snapshot_article() {
    let html = concat!(
        "<html><head><title>Minecraft Snapshot 21w15a | Minecraft</title></head><body>",
        r#"<div class="article-category__text">News</div>"#,
        r#"<img class="article-head__image" src="/content/hero.jpg">"#,
        r#"<div class="article-body">"#,
        "<p>A new snapshot.</p>",
        r#"<p>Get the <a href="https://launcher.mojang.com/v1/objects/abc/server.jar">server jar</a></p>"#,
        "<dl><dt>Written By</dt><dd>Someone</dd>",
        r#"<dt>Published</dt><dd class="pubDate" data-value="2021-04-14T15:00:00Z">April 14</dd></dl>"#,
        "<p>Share this story</p>",
        "</div></body></html>"
    );
    let output =
        convert_minecraft_article(html, &meta(ARTICLE_URL), &BugLookup::new(), &ConversionOptions::default()).unwrap();

    let beginning = templates::beginning("NEWS", VersionType::Snapshot);
    assert!(!beginning.is_empty());
    assert!(output.starts_with(&beginning));
    assert!(output.ends_with(templates::ending("NEWS", VersionType::Snapshot)));

    assert!(output.contains("[img=1200,513]https://www.minecraft.net/content/hero.jpg[/img]"));
    assert!(output.contains("[b]NEWS[/b]"));
    assert!(output.contains("A new snapshot。"));
    assert!(output.contains(
        "[b]【X 译自[url=https://www.minecraft.net/en-us/article/minecraft-snapshot-21w15a][color=#388d40][u]\
         官网 2021 年 04 月 14 日发布的 Minecraft Snapshot 21w15a[/u][/color][/url]；原作者 Someone】[/b]"
    ));
    assert!(output.contains(SPX_CREDIT));
    assert!(!output.contains("Share this story"));
    assert!(output.contains(&templates::server_download_block(
        "https://launcher.mojang.com/v1/objects/abc/server.jar"
    )));
}

#[test]
fn test_caller_title_wins() {
    let html = concat!(
        "<html><head><title>Page | Minecraft</title></head><body>",
        r#"<div class="article-body"><dl><dd class="pubDate">today</dd></dl></div>"#,
        "</body></html>"
    );
    let meta = ArticleMeta::new("X", "https://www.minecraft.net/a", "Custom");
    let output = convert_minecraft_article(html, &meta, &BugLookup::new(), &ConversionOptions::default()).unwrap();
    assert!(output.contains("官网 哪 年 哪 月 哪 日发布的 Custom[/u]"), "{output}");
}

#[test]
fn test_missing_article_body() {
    let err = convert_minecraft_article(
        "<html><body><p>Nothing here</p></body></html>",
        &meta(ARTICLE_URL),
        &BugLookup::new(),
        &ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConversionError::MissingElement { class: "article-body", .. }));
}

#[test]
fn test_feedback_article() {
    let html = concat!(
        "<html><head><title>Release Notes – Minecraft Feedback</title></head><body>",
        r#"<a title="Beta Information and Changelogs">Beta</a>"#,
        r#"<div class="article-info"><p>Fixed a crash.</p></div>"#,
        "</body></html>"
    );
    let url = "https://feedback.minecraft.net/hc/en-us/articles/1";
    let output = convert_feedback_article(html, &meta(url), &ConversionOptions::default()).unwrap();

    assert!(output.starts_with(&templates::beginning("news", VersionType::BedrockBeta)));
    assert!(output.contains("[size=6][b][color=Silver]Release Notes[/color][/b][/size]\n[size=6][b]Release Notes[/b][/size]\n\n"));
    assert!(output.contains("Fixed a crash。\n\n[/indent][/indent]\n\n"));
    assert!(output.contains(&format!(
        "[b]【X 译自[url={url}][color=#388d40][u]feedback.minecraft.net 哪 年 哪 月 哪 日发布的 Release Notes[/u][/color][/url]】[/b]\n{SPX_CREDIT}\n\n"
    )));
    assert!(output.ends_with(templates::ending("news", VersionType::BedrockBeta)));
}

#[test]
fn test_help_article() {
    let html = concat!(
        "<html><head><title>Installing Minecraft – Home</title></head><body>",
        r#"<div class="article-body"><p>Open the launcher.</p></div>"#,
        "</body></html>"
    );
    let url = "https://help.minecraft.net/hc/en-us/articles/2";
    let output = convert_help_article(html, &meta(url), &ConversionOptions::default()).unwrap();

    assert!(output.starts_with("[size=6][b][color=Silver]Installing Minecraft[/color][/b][/size]\n"));
    assert!(output.contains("Open the launcher。\n\n[/indent][/indent]\n\n"));
    assert!(output.ends_with(&format!(
        "help.minecraft.net 哪 年 哪 月 哪 日发布的 Installing Minecraft[/u][/color][/url]】[/b]\n{SPX_CREDIT}\n\n"
    )));
}

#[test]
fn test_fragment_with_cached_bug_translation() {
    let mut bugs = BugCache::default();
    bugs.set("MC-1", "苦力怕不会爆炸", Some("a".to_string()), 0);
    bugs.set("MC-2", "箱子无法打开", None, 0);
    let lookup = resolve_bugs(&bugs, &ColorCache::default());

    let html = concat!(
        "<ul>",
        r#"<li><a href="https://bugs.mojang.com/browse/MC-1">MC-1</a> - Creepers don't explode</li>"#,
        r#"<li><a href="https://bugs.mojang.com/browse/MC-2">MC-2</a> - Chests don't open</li>"#,
        r#"<li><a href="https://bugs.mojang.com/browse/MC-3">MC-3</a> - Unknown</li>"#,
        "</ul>"
    );
    let output = convert_fragment(html, &meta(ARTICLE_URL), &lookup, &ConversionOptions::default()).unwrap();

    assert!(output.starts_with("[list]\n"));
    assert!(output.ends_with("[/list]\n"));
    assert!(output.contains("[*][url=https://bugs.mojang.com/browse/MC-1][color=#000061][b]MC-1[/b][/color][/url]- 苦力怕不会爆炸\n"));
    assert!(output.contains("[*][url=https://bugs.mojang.com/browse/MC-2][color=#388d40][b]MC-2[/b][/color][/url]- 箱子无法打开\n"));
    assert!(output.contains("[*][url=https://bugs.mojang.com/browse/MC-3][color=#388d40]MC-3[/color][/url] —— Unknown\n"));
}
