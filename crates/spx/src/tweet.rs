//! BBCode cards for tweets.

use serde::{Deserialize, Serialize};

const ATTRIBUTE_COLOR: &str = "#5B7083";
const MISSING_PICTURE: &str = "【TODO：头像】";
const PICTURE_BASE: &str = "https://attachment.mcbbs.net/data/myattachment/forum/";

/// Uploaded profile pictures of accounts whose tweets are commonly translated.
const PROFILE_PICTURES: &[(&str, &str)] = &[
    ("Mojang", "202105/18/124525b5b85bb8ob8t8o0b.jpg"),
    ("MojangSupport", "202105/18/124525b5b85bb8ob8t8o0b.jpg"),
    ("MojangStatus", "202105/18/124525b5b85bb8ob8t8o0b.jpg"),
    ("Minecraft", "202105/18/124524kfu7hzreleueuexh.jpg"),
    ("henrikkniberg", "202105/18/124519x0r898zl6gc8gna8.jpg"),
    ("_LadyAgnes", "202105/18/124515qnwcdnz82vyz9ezs.png"),
    ("kingbdogz", "202105/18/124523da4of54hl7e3fchn.jpg"),
    ("JasperBoerstra", "202105/18/124522uk3hbr2gx62pbrfh.jpg"),
    ("adrian_ivl", "202105/18/124513jppdcsu8lsxllxll.jpg"),
    ("slicedlime", "202105/18/124528na53pu1444w1pdys.jpg"),
    ("Cojomax99", "202105/18/124516jgwgrzgerr11g9kn.png"),
    ("Mojang_Ined", "202105/18/124520dpqpa0fufu0fq0l1.jpg"),
    ("SeargeDP", "202105/18/124527syfrwsstbvxf8jf0.png"),
    ("Dinnerbone", "202105/18/124517k1n33zuxaumkakam.jpg"),
    ("Marc_IRL", "202105/28/104919xl2ac5dihxlqxxdf.jpg"),
    ("Mega_Spud", "202107/07/230046homkfqlhwvkfqkbh.jpg"),
];

/// Facts scraped from a tweet page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tweet {
    /// Display name.
    pub user_name: String,
    /// Handle without the leading `@`.
    pub user_tag: String,
    /// Tweet body.
    pub text: String,
    /// Date as shown on the page.
    pub date: String,
    /// Client the tweet was posted from.
    pub source: String,
    /// Permalink.
    pub tweet_link: String,
    /// BCP 47 language tag of the text.
    pub lang: String,
}

/// Card color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TweetMode {
    /// White background.
    #[default]
    Light,
    /// Black background.
    Dark,
}

impl TweetMode {
    const fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("#FFFFFF", "#0F1419"),
            Self::Dark => ("#000000", "#D9D9D9"),
        }
    }
}

/// Uploaded profile picture for a handle.
pub fn profile_picture(user_tag: &str) -> Option<String> {
    PROFILE_PICTURES
        .iter()
        .find(|(tag, _)| *tag == user_tag)
        .map(|(_, path)| format!("{PICTURE_BASE}{path}"))
}

fn source_language(lang: &str) -> String {
    if lang.starts_with("en") {
        "英语".to_string()
    } else {
        format!(" {lang}")
    }
}

/// Render a tweet as a forum card with slots for the translation.
pub fn render_tweet(tweet: &Tweet, mode: TweetMode) -> String {
    let (background, foreground) = mode.colors();
    let picture = profile_picture(&tweet.user_tag).unwrap_or_else(|| MISSING_PICTURE.to_string());
    let date_line = format!("{} · {} · SPX", tweet.date, tweet.source);
    let language = source_language(&tweet.lang);

    format!(
        "[align=center][table=560,{background}]
[tr][td][font=-apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, Arial, sans-serif][indent]
[float=left][img=44,44]{picture}[/img][/float][size=15px][b][color={foreground}]{name}[/color][/b]
[color={ATTRIBUTE_COLOR}]@{tag}[/color][/size]

[color={foreground}][size=23px]{text}[/size]
[size=15px]由 【请填写你的用户名】 翻译自{language}[/size]
[size=23px]【插入：译文】[/size][/color][/indent][align=center][img=451,254]【TODO：配图】[/img][/align][indent][size=15px][url={link}][color={ATTRIBUTE_COLOR}]{date_line}[/color][/url][/size][/indent][/font]
[/td][/tr]
[/table][/align]",
        name = tweet.user_name,
        tag = tweet.user_tag,
        text = tweet.text,
        link = tweet.tweet_link,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(user_tag: &str, lang: &str) -> Tweet {
        Tweet {
            user_name: "Someone".to_string(),
            user_tag: user_tag.to_string(),
            text: "Hello there".to_string(),
            date: "10:00 AM · May 18, 2021".to_string(),
            source: "Twitter Web App".to_string(),
            tweet_link: "https://twitter.com/x/status/1".to_string(),
            lang: lang.to_string(),
        }
    }

    #[test]
    fn test_known_account_light_card() {
        let card = render_tweet(&tweet("slicedlime", "en"), TweetMode::Light);
        assert!(card.starts_with("[align=center][table=560,#FFFFFF]\n"));
        assert!(card.contains(
            "[img=44,44]https://attachment.mcbbs.net/data/myattachment/forum/202105/18/124528na53pu1444w1pdys.jpg[/img]"
        ));
        assert!(card.contains("[color=#0F1419]Someone[/color]"));
        assert!(card.contains("[color=#5B7083]@slicedlime[/color]"));
        assert!(card.contains("翻译自英语[/size]"));
        assert!(card.contains(
            "[url=https://twitter.com/x/status/1][color=#5B7083]10:00 AM · May 18, 2021 · Twitter Web App · SPX[/color][/url]"
        ));
        assert!(card.ends_with("[/td][/tr]\n[/table][/align]"));
    }

    #[test]
    fn test_unknown_account_dark_card() {
        let card = render_tweet(&tweet("nobody", "sv"), TweetMode::Dark);
        assert!(card.starts_with("[align=center][table=560,#000000]"));
        assert!(card.contains("[img=44,44]【TODO：头像】[/img]"));
        assert!(card.contains("[color=#D9D9D9][size=23px]Hello there[/size]"));
        assert!(card.contains("翻译自 sv[/size]"));
    }

    #[test]
    fn test_tweet_from_json() {
        let tweet: Tweet = serde_json::from_str(r#"{"userName":"Mojang","userTag":"Mojang","lang":"en"}"#).unwrap();
        assert_eq!(tweet.user_tag, "Mojang");
        assert!(tweet.text.is_empty());
        assert!(profile_picture(&tweet.user_tag).is_some());
    }
}
