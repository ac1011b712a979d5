//! Document-level passes run once over a fully converted article.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::templates;

static SERVER_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://launcher\.mojang\.com/.+/server\.jar").expect("valid regex"));

static TEXT_BEFORE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z0-9\-._])(\[[A-Za-z])").expect("valid regex"));

static CLOSING_TAG_BEFORE_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\[/[^\]]+?\])([a-zA-Z0-9\-._])").expect("valid regex"));

/// Closing mark of the attribution line; nothing after it belongs to the article.
const ATTRIBUTION_END: char = '】';

/// Release stages in the order their "GET THE ..." banners are looked for.
const BANNER_STAGES: [&str; 4] = ["snapshot", "pre-release", "release", "release candidate"];

/// Remove the first server download URL from `content` and return it.
pub fn extract_server_url(content: &mut String) -> Option<String> {
    let (range, url) = SERVER_URL
        .find(content.as_str())
        .map(|m| (m.range(), m.as_str().to_string()))?;
    content.replace_range(range, "");
    debug!("Found server download URL: {url}");
    Some(url)
}

/// Drop everything after the last attribution mark. Text without one is
/// left alone.
pub fn truncate_after_attribution(content: &mut String) {
    if let Some(index) = content.rfind(ATTRIBUTION_END) {
        content.truncate(index + ATTRIBUTION_END.len_utf8());
    }
}

fn banner(stage: &str) -> String {
    format!("[size=6][b][color=silver]get the {stage}[/color][/b][/size]")
}

/// Cut at the last "GET THE <stage>" banner.
///
/// Stages are tried in a fixed priority order and the first stage with a
/// banner decides the cut, even if another stage's banner occurs later.
pub fn truncate_at_banner(content: &mut String) {
    let lowered = content.to_ascii_lowercase();
    for stage in BANNER_STAGES {
        if let Some(index) = lowered.rfind(&banner(stage)) {
            debug!("Truncating at the '{stage}' banner");
            content.truncate(index);
            return;
        }
    }
}

/// Separate markup from adjacent word characters with a single space.
pub fn fix_spacing(content: &str) -> String {
    let opened = TEXT_BEFORE_TAG.replace_all(content, "$1 $2");
    CLOSING_TAG_BEFORE_TEXT.replace_all(&opened, "$1 $2").into_owned()
}

/// Run every minecraft.net pass in order.
pub fn finalize_article(content: &str) -> String {
    let mut text = content.to_string();
    let server_url = extract_server_url(&mut text);
    truncate_after_attribution(&mut text);
    truncate_at_banner(&mut text);
    let mut text = fix_spacing(&text);
    if let Some(url) = server_url {
        text.push_str(&templates::server_download_block(&url));
    }
    text
}
