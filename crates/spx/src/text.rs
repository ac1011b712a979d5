//! Text processing utilities: whitespace collapsing, the mechanical
//! translation pipeline and quote pairing.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::converter::context::BugLookup;
use crate::options::WhitespacePolicy;

/// Color used for links in the translated copy.
pub const LINK_COLOR: &str = "#388d40";

/// Color used for the muted original-language copy.
pub const GREY_COLOR: &str = "Silver";

const BUG_LINK_PREFIX: &str = "[url=https://bugs.mojang.com/browse/";

static FORMATTING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r\t]+").expect("valid regex"));
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r]+").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Ordered phrase dictionary.
///
/// Entries run top to bottom over the output of the previous entry. The
/// specific "A Minecraft Java ..." titles must precede the generic bedrock
/// title rules, and `[i]` must be rewritten before `[/i]`.
const PHRASES: &[(&str, &str)] = &[
    (r"(?i)Block of the Week: ", "本周方块："),
    (r"(?i)Taking Inventory: ", "背包盘点："),
    (r"(?i)Around the Block: ", "群系漫游："),
    (r"(?i)A Minecraft Java Snapshot", "Minecraft Java版 快照"),
    (r"(?i)A Minecraft Java Pre-Release", "Minecraft Java版 预发布版"),
    (r"(?i)A Minecraft Java Release Candidate", "Minecraft Java版 候选版本"),
    (r"(?i)Minecraft Beta (?:-|——) (.*?) \((.*?)\)", "Minecraft 基岩版 Beta ${1}（${2}）"),
    (r"(?i)Minecraft (?:-|——) (.*?) \(Bedrock\)", "Minecraft 基岩版 ${1}"),
    (r"(?i)Minecraft (?:-|——) (.*?) \((.*?) Only\)", "Minecraft 基岩版 ${1}（仅${2}）"),
    (r"(?i)Minecraft (?:-|——) (.*?) \((.*?)\)", "Minecraft 基岩版 ${1}（仅${2}）"),
    (r"(?i)Caves & Cliffs Experimental Features", "洞穴与山崖实验性特性"),
    (r"(?i)Marketplace", "市场"),
    (r"(?i)Data-Driven", "数据驱动"),
    (r"(?i)Graphical", "图像"),
    (r"(?i)Player", "玩家"),
    (r"(?i)Experimental Features", "实验性特性"),
    (r"(?i)Mobs", "生物"),
    (r"(?i)Features and Bug Fixes", "特性和漏洞修复"),
    (r"(?i)Stability and Performance", "稳定性和性能"),
    (r"(?i)Accessibility", "辅助功能"),
    (r"(?i)Gameplay", "玩法"),
    (r"(?i)Items", "物品"),
    (r"(?i)Blocks", "方块"),
    (r"(?i)User Interface", "用户界面"),
    (r"(?i)Commands", "命令"),
    (r"(?i)Technical Updates", "技术性更新"),
    (r"(?i)Vanilla Parity", "待同步特性"),
    (r"(?i)Character Creator", "角色创建器"),
    (r"(?i)Minecraft Snapshot ", "Minecraft 快照 "),
    (r"(?i)Pre-Release ", "预发布版 "),
    (r"(?i)Release Candidate ", "候选版本 "),
    (r"(?i)Image credit:", "图片来源："),
    (r"(?i)CC BY:", "知识共享 署名"),
    (r"(?i)CC BY-NC:", "知识共享 署名-非商业性使用"),
    (r"(?i)CC BY-ND:", "知识共享 署名-禁止演绎"),
    (r"(?i)CC BY-SA:", "知识共享 署名-相同方式共享"),
    (r"(?i)CC BY-NC-ND:", "知识共享 署名-非商业性使用-禁止演绎"),
    (r"(?i)CC BY-NC-SA:", "知识共享 署名-非商业性使用-相同方式共享"),
    (r"(?i)Public Domain:", "公有领域"),
    (r"(?i)The Caves & Cliffs Preview", "洞穴与山崖预览数据包"),
    (
        r"(?i)\[size=6\]\[b\]New Features in ([^\r\n]+)\[/b\]\[/size\]",
        "[size=6][b]${1} 的新增特性[/b][/size]",
    ),
    (
        r"(?i)\[size=6\]\[b\]Changes in ([^\r\n]+)\[/b\]\[/size\]",
        "[size=6][b]${1} 的修改内容[/b][/size]",
    ),
    (
        r"(?i)\[size=6\]\[b\]Technical changes in ([^\r\n]+)\[/b\]\[/size\]",
        "[size=6][b]${1} 的技术性修改[/b][/size]",
    ),
    (
        r"(?i)\[size=6\]\[b\]Fixed bugs in ([^\r\n]+)\[/b\]\[/size\]",
        "[size=6][b]${1} 修复的漏洞[/b][/size]",
    ),
    (r"(?i)\[i\]", "[font=楷体]"),
    (r"\[/i\]", "[/font]"),
];

/// Half-width punctuation followed by a space or the end of the text.
const PUNCTUATION: &[(&str, &str)] = &[
    (r",( |$)", "，"),
    (r"!( |$)", "！"),
    (r"\.\.\.( |$)", "…"),
    (r"\.( |$)", "。"),
    (r"\?( |$)", "？"),
    (r"( |^)-( |$)", " —— "),
];

static PHRASE_TABLE: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(PHRASES));
static PUNCTUATION_TABLE: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(PUNCTUATION));

fn compile(table: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    table
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid translation pattern"), *replacement))
        .collect()
}

/// Collapse the whitespace of a text node according to `policy`.
pub fn collapse_whitespace(text: &str, policy: WhitespacePolicy) -> String {
    match policy {
        WhitespacePolicy::Strip => {
            let stripped = FORMATTING_WHITESPACE.replace_all(text, "");
            WHITESPACE_RUN.replace_all(&stripped, "").into_owned()
        }
        WhitespacePolicy::CollapseAndTrim => {
            let spaced = LINE_BREAKS.replace_all(text, " ");
            WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
        }
    }
}

/// Replace every run of line breaks with a single space.
pub fn join_lines(text: &str) -> Cow<'_, str> {
    LINE_BREAKS.replace_all(text, " ")
}

/// Recolor links for the muted copy of a dual rendering.
pub fn to_grey(text: &str) -> String {
    text.replace(LINK_COLOR, GREY_COLOR)
}

/// Resolve a root-relative URL against `origin`; anything else is returned as is.
pub fn resolve_url(url: &str, origin: &str) -> String {
    if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        url.to_string()
    }
}

/// Drop a single trailing line break.
pub fn trim_last_linebreak(output: &mut String) {
    if output.ends_with('\n') {
        output.pop();
    }
}

/// Apply the phrase dictionary, the half-width to full-width punctuation
/// pass (unless `disable_punctuation` is set) and quote pairing.
pub fn translate_machinely(input: &str, disable_punctuation: bool) -> String {
    let mut text = input.to_string();
    for (pattern, replacement) in PHRASE_TABLE.iter() {
        if let Cow::Owned(replaced) = pattern.replace_all(&text, *replacement) {
            text = replaced;
        }
    }
    if !disable_punctuation {
        for (pattern, replacement) in PUNCTUATION_TABLE.iter() {
            if let Cow::Owned(replaced) = pattern.replace_all(&text, *replacement) {
                text = replaced;
            }
        }
    }
    pair_quotes(&text)
}

/// Replace straight double quotes with curly quotes, alternating opening and
/// closing by occurrence index.
///
/// When the count is odd the last `"` stays as is.
pub fn pair_quotes(input: &str) -> String {
    let total = input.matches('"').count();
    let paired = total - total % 2;
    let mut seen = 0;
    let mut output = String::with_capacity(input.len() + paired * 2);
    for ch in input.chars() {
        if ch == '"' && seen < paired {
            output.push(if seen % 2 == 0 { '“' } else { '”' });
            seen += 1;
        } else {
            output.push(ch);
        }
    }
    output
}

/// Replace a leading bug-tracker link with the resolved summary.
///
/// Unknown ids and text that does not start with a bug link are returned
/// unchanged.
pub fn translate_bugs<'a>(text: &'a str, bugs: &BugLookup) -> Cow<'a, str> {
    let Some(rest) = text.strip_prefix(BUG_LINK_PREFIX) else {
        return Cow::Borrowed(text);
    };
    if !rest.starts_with("MC-") {
        return Cow::Borrowed(text);
    }
    let id = rest.find(']').map_or(rest, |end| &rest[..end]);
    match bugs.get(id) {
        Some(bug) => Cow::Owned(format!(
            "{BUG_LINK_PREFIX}{id}][color={}][b]{id}[/b][/color][/url]- {}",
            bug.color, bug.summary
        )),
        None => Cow::Borrowed(text),
    }
}

/// Slice by character positions, clamping to the text length.
pub fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}
