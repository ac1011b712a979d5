//! Fixed BBCode banners placed around converted articles.
//!
//! Beginnings explain the release channel of a news article; endings carry the
//! download tables and the external source links. Only NEWS articles get them.

use crate::article::VersionType;

/// The next main Java Edition release, quoted by the preview banners.
pub const NEXT_MAIN_RELEASE: &str = "1.17.1";

const NEXT_MAIN_RELEASE_SLOT: &str = "{next_main_release}";

/// Credit line closing every converted article.
pub const SPX_CREDIT: &str = "【本文排版借助了：[url=https://spx.spgoding.com][color=#388d40][u]SPX[/u][/color][/url]】";

const BEGINNING_SNAPSHOT: &str = "[align=center][table=80%,#EDFBFF]
[tr][td][align=center][color=red]每周快照[/color]是Minecraft Java版的测试机制，主要用于下一个正式版的特性预览。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center]然而，每周快照主要用于新特性展示，通常存在大量漏洞。因此对于普通玩家建议仅做[color=Red][b]测试尝鲜[/b][/color]用。在快照中打开存档前请务必[color=Red][b]进行备份[/b][/color]。[b]适用于正式版的Mod不兼容快照，且大多数Mod都不对每周快照提供支持[/b]。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center][color=Red][b]Minecraft {next_main_release} 仍未发布，<版本>为其第<计数器>个预览版。[/b][/color][/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#FFEBED]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#FFFFCE]
[tr][td][align=center]部分新特性译名仅供新闻预览
请到[url=https://crowdin.com/project/minecraft/zh-CN]Crowdin[/url]讨论游戏正式译名。[/align][/td][/tr]
[/table][/align]

[hr]\n
【如果没有新方块物品等内容，请删去上方待定译名提示框。】\n";

const BEGINNING_PRE_RELEASE: &str = "[align=center][table=80%,#EDFBFF]
[tr][td][align=center][color=red]预发布版[/color]是Minecraft Java版的测试机制，如果该版本作为正式版发布，那么预发布版的游戏文件将与启动器推送的正式版完全相同。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center]然而，预发布版主要用于服主和Mod制作者的预先体验，如果发现重大漏洞，该预发布版会被新的预发布版代替。因此建议普通玩家[color=Red]持观望态度[/color]。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center][color=Red][b]Minecraft {next_main_release} 仍未发布，<版本>为其第<计数器>个预发布版，第<计数器>个预览版。[/b][/color][/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#FFEBED]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr]
[/table][/align]

[hr]\n";

const BEGINNING_RELEASE_CANDIDATE: &str = "[align=center][table=80%,#EDFBFF]
[tr][td][align=center][color=red]候选版[/color]是Minecraft Java版正式版的候选版本，如果发现重大漏洞，该候选版会被新的候选版代替。如果一切正常，该版本将会作为正式版发布。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center]候选版已可供普通玩家进行抢鲜体验，但仍需当心可能存在的漏洞。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center][color=Red][b]Minecraft {next_main_release} 仍未发布，<版本>为其第<计数器>个候选版，第<计数器>个预览版。[/b][/color][/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#FFEBED]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr]
[/table][/align]

[hr]\n";

const BEGINNING_RELEASE: &str = "[align=center][table=80%,#EDFBFF]
[tr][td][align=center][b][color=Red]Minecraft Java版[/color]是指Windows、Mac OS与Linux平台上，使用Java语言开发的Minecraft版本。[/b][/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#EDFBFF]
[tr][td][align=center][color=red]正式版[/color]是Minecraft Java版经过一段时间的预览版测试后得到的稳定版本，也是众多材质、Mod与服务器插件会逐渐跟进的版本。官方启动器也会第一时间进行推送。[/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center]建议玩家与服主关注其相关服务端、Mod与插件的更新，[color=red]迎接新的正式版吧！[/color]专注于单人原版游戏的玩家可立即更新，多人游戏玩家请关注您所在服务器的通知。[/align][/td][/tr]
[/b][/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#FFEBED]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr][/table][/align]

[hr]\n";

const BEGINNING_BEDROCK_RELEASE: &str = "[align=center][table=80%,#EDFBFF]
[tr][td][align=center][b][color=Red]Minecraft基岩版[/color]是指包括Minecraft手机版（Android、IOS）、Win10版（VR）、主机版（XboxOne、NS、PS4）在内，使用“基岩引擎”（C++语言）开发的Minecraft统一版本。[/b][/align][/td][/tr]
[/table][/align]
[align=center][table=90%,#FFEBED]
[tr][td][align=center][b][color=red]正式版是[color=DarkRed]Minecraft基岩版[/color]经过一段时间的测试版测试之后得到的稳定版本，也是众多材质、Addon和官方领域服会逐渐跟进的版本。与此同时Google Play、Win10 Store等官方软件商店也会推送此次更新。[/color][/b][/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#FFEBED]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr][/table][/align]

[hr]\n
";

const BEGINNING_BEDROCK_BETA: &str = "[align=center][table=80%,#EDFBFF]
[tr][td][align=center][b][color=Red]测试版[/color]是Minecraft基岩版的测试机制，主要用于下一个正式版的特性预览。[/b][/align][/td][/tr]
[/table][/align]
[align=center][table=90%,#FFEBED]
[tr][td][align=center][b]然而，测试版主要用于新特性展示，通常存在大量漏洞。因此对于普通玩家建议仅做[color=red]测试尝鲜[/color]用。使用测试版打开存档前请[color=red]务必备份[/color]。适用于正式版的领域服务器与测试版不兼容。[/b][/align][/td][/tr]
[/table][/align]
[align=center][table=90%,#FFEBED]
[tr][td][align=center][b]如果在测试版中遇到旧版存档无法使用的问题，测试版将允许你将存档上传以供开发团队查找问题。[/b][/align][/td][/tr]
[/table][/align]
[align=center][table=80%,#FFEBED]
[tr][td][align=center][color=Red][b]Minecraft基岩版 <正式版版本号> 仍未发布，<当前版本号>为其第<计数器>个测试版。[/b][/color][/align][/td][/tr]
[/table][/align]
[align=center][table=50%,#EDFBFF]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr]
[/table][/align]

[hr]\n
";

const BEGINNING_NORMAL: &str = "\n[align=center][table=50%,#FFEBED]
[tr][td][align=center]转载本贴时须要注明[b]原作者[/b]以及[b]本帖地址[/b]。[/align][/td][/tr][/table][/align]
[hr]\n";

const ENDING_PREVIEW: &str = "\n[hr]
[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]正版启动器下载地址[/b][/color][/size][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Windows[/align][/color][/td][td][align=center][url=https://launcher.mojang.com/download/MinecraftInstaller.msi]https://launcher.mojang.com/download/MinecraftInstaller.msi[/url][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Mac/OSX[/align][/color][/td][td][align=center][url=https://launcher.mojang.com/download/Minecraft.dmg]https://launcher.mojang.com/download/Minecraft.dmg[/url][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Linux/其他[/align][/color][/td][td][align=center][url=https://launcher.mojang.com/download/Minecraft.tar.gz]https://launcher.mojang.com/download/Minecraft.tar.gz[/url][/align][/td][/tr]
[/table][/align]
[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]预览版的下载方式以及运行说明[/b][/color][/size][/align][/td][/tr]
[tr][td=15%][color=#D10A0A][align=center]对于正版用户[/align][/color][/td][td][align=center]官方启动器是跟进最及时、运行最稳定的启动器，每次启动均会自动检查并下载启动器最新版本。Java版的启动器下载地址在上文已经提供。[/align][/td][/tr]
[tr][td=15%][color=#D10A0A][align=center]对于非正版用户[/align][/color][/td][td][align=center]非正版用户[b]完全可以[/b]体验预览版本，请于[url=http://www.mcbbs.net/forum.php?mod=viewthread&tid=38297&page=1#pid547821]推荐启动器列表[/url]寻找合适的启动器。目前绝大多数主流启动器都带有游戏下载功能。如有仍疑惑请到[url=http://www.mcbbs.net/forum-qanda-1.html]原版问答[/url]板块提问。[/align][/td][/tr]
[/table][/align]
[align=center][img=416,132]https://attachment.mcbbs.net/data/myattachment/forum/201905/10/183113w1yyttpjz8epq60s.jpg[/img][/align]
[align=center][table=75%,#FFEBED]
[tr][td][align=center][url=https://www.mcbbs.net/thread-874677-1-1.html]外部来源以及详细的更新条目追踪[/url][/align][/td][/tr]
[/table][/align]";

const ENDING_RELEASE: &str = "\n[hr]
[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]正版启动器下载地址[/b][/color][/size][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Windows[/align][/color][/td][td][align=center][url=https://launcher.mojang.com/download/MinecraftInstaller.msi]https://launcher.mojang.com/download/MinecraftInstaller.msi[/url][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Mac/OSX[/align][/color][/td][td][align=center][url=https://launcher.mojang.com/download/Minecraft.dmg]https://launcher.mojang.com/download/Minecraft.dmg[/url][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Linux/其他[/align][/color][/td][td][align=center][url=https://launcher.mojang.com/download/Minecraft.tar.gz]https://launcher.mojang.com/download/Minecraft.tar.gz[/url][/align][/td][/tr]
[/table][/align]
[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]正式版的下载方式以及运行说明[/b][/color][/size][/align][/td][/tr]
[tr][td=15%][color=#D10A0A][align=center]对于正版用户[/align][/color][/td][td][align=center]官方启动器是跟进最及时、运行最稳定的启动器，每次启动均会自动检查并下载启动器最新版本。Java版的启动器下载地址在上文已经提供。[/align][/td][/tr]
[tr][td=15%][color=#D10A0A][align=center]对于非正版用户[/align][/color][/td][td][align=center]非正版用户也请使用启动器下载游戏，请于[url=http://www.mcbbs.net/forum.php?mod=viewthread&tid=38297&page=1#pid547821]推荐启动器列表[/url]寻找合适的启动器。目前绝大多数主流启动器都带有游戏下载功能。如有仍疑惑请到[url=http://www.mcbbs.net/forum-qanda-1.html]原版问答[/url]板块提问。[/align][/td][/tr]
[/table][/align]
[align=center][img=416,132]https://attachment.mcbbs.net/data/myattachment/forum/201905/10/183113w1yyttpjz8epq60s.jpg[/img][/align]
[align=center][table=75%,#FFEBED]
[tr][td][align=center][url=https://www.mcbbs.net/thread-874677-1-1.html]外部来源以及详细的更新条目追踪[/url][/align][/td][/tr]
[/table][/align]";

const ENDING_BEDROCK_RELEASE: &str = "\n[hr]
[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]正版地址[/b][/color][/size][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Google Play[/align][/color][/td][td][align=center][url=https://play.google.com/store/apps/details?id=com.mojang.minecraftpe]https://play.google.com/store/apps/details?id=com.mojang.minecraftpe[/url][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]Win10 Store[/align][/color][/td][td][align=center][url=https://www.microsoft.com/zh-cn/store/p/minecraft-for-windows-10/9nblggh2jhxj]https://www.microsoft.com/zh-cn/store/p/minecraft-for-windows-10/9nblggh2jhxj[/url][/align][/td][/tr]
[/table][/align]
[align=center][img=416,132]https://attachment.mcbbs.net/data/myattachment/forum/201905/10/183113w1yyttpjz8epq60s.jpg[/img][/align]
[align=center][table=75%,#FFEBED]
[tr][td][align=center][url=https://www.mcbbs.net/thread-874677-1-1.html]外部来源以及详细的更新条目追踪[/url][/align][/td][/tr]
[/table][/align]";

const ENDING_BEDROCK_BETA: &str = "\n[hr]
[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]相关地址[/b][/color][/size][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]谷歌正版[/align][/color][/td][td][align=center][url=https://play.google.com/store/apps/details?id=com.mojang.minecraftpe]https://play.google.com/store/apps/details?id=com.mojang.minecraftpe[/url][/align][/td][/tr]
[tr][td][color=#D10A0A][align=center]基岩版测试组[/align][/color][/td][td][align=center]安卓Google Play：[url=https://play.google.com/apps/testing/com.mojang.minecraftpe]https://play.google.com/apps/testing/com.mojang.minecraftpe[/url][/align][align=center]Win10 Store：[url=https://www.microsoft.com/zh-cn/store/p/xbox-insider-hub/9nblggh68vsk]https://www.microsoft.com/zh-cn/store/p/xbox-insider-hub/9nblggh68vsk[/url][/align][/td][/tr]
[/table][/align]
[align=center][img=416,132]https://attachment.mcbbs.net/data/myattachment/forum/201905/10/183113w1yyttpjz8epq60s.jpg[/img][/align]
[align=center][table=75%,#FFEBED]
[tr][td][align=center][url=https://www.mcbbs.net/thread-874677-1-1.html]外部来源以及详细的更新条目追踪[/url][/align][/td][/tr]
[/table][/align]";

const ENDING_NORMAL: &str = "\n[hr]

[align=center][img=416,132]https://attachment.mcbbs.net/data/myattachment/forum/201905/10/183113w1yyttpjz8epq60s.jpg[/img][/align]
[align=center][table=75%,#FFEBED]
[tr][td][align=center][url=https://www.mcbbs.net/thread-874677-1-1.html]外部来源以及详细的更新条目追踪[/url][/align][/td][/tr]
[/table][/align]";

/// Banner placed before the hero image of an article.
///
/// Returns an empty string unless `category` is `NEWS` (case-insensitive).
pub fn beginning(category: &str, version: VersionType) -> String {
    if !category.eq_ignore_ascii_case("news") {
        return String::new();
    }
    let template = match version {
        VersionType::Snapshot => BEGINNING_SNAPSHOT,
        VersionType::PreRelease => BEGINNING_PRE_RELEASE,
        VersionType::ReleaseCandidate => BEGINNING_RELEASE_CANDIDATE,
        VersionType::Release => BEGINNING_RELEASE,
        VersionType::BedrockRelease => BEGINNING_BEDROCK_RELEASE,
        VersionType::BedrockBeta => BEGINNING_BEDROCK_BETA,
        VersionType::Normal => BEGINNING_NORMAL,
    };
    template.replace(NEXT_MAIN_RELEASE_SLOT, NEXT_MAIN_RELEASE)
}

/// Banner placed after the article content.
///
/// Returns an empty string unless `category` is `NEWS` (case-insensitive).
pub fn ending(category: &str, version: VersionType) -> &'static str {
    if !category.eq_ignore_ascii_case("news") {
        return "";
    }
    match version {
        VersionType::Snapshot | VersionType::PreRelease | VersionType::ReleaseCandidate => ENDING_PREVIEW,
        VersionType::Release => ENDING_RELEASE,
        VersionType::BedrockRelease => ENDING_BEDROCK_RELEASE,
        VersionType::BedrockBeta => ENDING_BEDROCK_BETA,
        VersionType::Normal => ENDING_NORMAL,
    }
}

/// Download block for a dedicated server jar found in the article body.
pub fn server_download_block(url: &str) -> String {
    format!(
        "\n[align=center][table=70%,#EDFBFF]
[tr][td=2,1][align=center][size=3][color=#D6D604][b]官方服务端下载地址[/b][/color][/size][/align][/td][/tr]
[tr][td][align=center][url={url}]Minecraft server.jar[/url][/align][/td][/tr]
[/table][/align]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_news_has_no_banners() {
        assert_eq!(beginning("INSIDER", VersionType::Snapshot), "");
        assert_eq!(ending("", VersionType::Release), "");
    }

    #[test]
    fn test_snapshot_beginning_names_next_release() {
        let banner = beginning("NEWS", VersionType::Snapshot);
        assert!(banner.contains("Minecraft 1.17.1 仍未发布"));
        assert!(!banner.contains(NEXT_MAIN_RELEASE_SLOT));
    }

    #[test]
    fn test_preview_endings_are_shared() {
        assert_eq!(ending("news", VersionType::Snapshot), ending("news", VersionType::PreRelease));
        assert_eq!(ending("news", VersionType::Snapshot), ending("news", VersionType::ReleaseCandidate));
        assert!(ending("news", VersionType::Release).contains("正式版的下载方式以及运行说明"));
    }

    #[test]
    fn test_server_download_block() {
        let block = server_download_block("https://launcher.mojang.com/v1/objects/abc/server.jar");
        assert!(block.starts_with("\n[align=center][table=70%,#EDFBFF]"));
        assert!(block.contains("[url=https://launcher.mojang.com/v1/objects/abc/server.jar]Minecraft server.jar[/url]"));
    }
}
