//! spx - convert Minecraft article HTML into forum BBCode

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info};

use spx::{
    ArticleMeta, BugCache, BugLookup, CarouselPolicy, ColorCache, ConversionOptions, LinebreakPolicy, Tweet, TweetMode,
    WhitespacePolicy,
};

const UNKNOWN_TRANSLATOR: &str = "？？？";

#[derive(Parser)]
#[command(name = "spx")]
#[command(version, about = "Convert Minecraft article HTML into forum BBCode", long_about = None)]
#[command(after_help = "EXAMPLES:
    spx page.html --url https://www.minecraft.net/en-us/article/x --translator Me
    spx --kind fragment < snippet.html
    spx --kind tweet tweet.json --dark")]
struct Cli {
    /// Input file, `-` or nothing for stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write BBCode to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// What the input is
    #[arg(short, long, value_enum, default_value_t = Kind::Minecraft)]
    kind: Kind,

    /// Translator credited in the attribution line
    #[arg(short, long, default_value = UNKNOWN_TRANSLATOR)]
    translator: String,

    /// Address of the source article
    #[arg(long, default_value = "")]
    url: String,

    /// Article title, derived from the page when omitted
    #[arg(long, default_value = "")]
    title: String,

    /// Bug translation cache (JSON)
    #[arg(long, value_name = "FILE")]
    bugs: Option<PathBuf>,

    /// Translator color cache (JSON)
    #[arg(long, value_name = "FILE")]
    colors: Option<PathBuf>,

    /// Text node whitespace handling
    #[arg(long, value_enum, default_value_t = Whitespace::Strip)]
    whitespace: Whitespace,

    /// When an image carousel becomes an album
    #[arg(long, value_enum, default_value_t = Carousel::Multiple)]
    carousel: Carousel,

    /// Drop a trailing line break from every element's children
    #[arg(long)]
    trim_linebreaks: bool,

    /// Origin for root-relative links and images
    #[arg(long, default_value = spx::options::DEFAULT_ORIGIN)]
    origin: String,

    /// Dark tweet card
    #[arg(long)]
    dark: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// minecraft.net article page
    Minecraft,
    /// feedback.minecraft.net article page
    Feedback,
    /// help.minecraft.net article page
    Help,
    /// Bare HTML, no page-level processing
    Fragment,
    /// Tweet facts as JSON
    Tweet,
}

#[derive(Clone, Copy, ValueEnum)]
enum Whitespace {
    Strip,
    Collapse,
}

#[derive(Clone, Copy, ValueEnum)]
enum Carousel {
    Multiple,
    Captionless,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = read_input(cli.input.as_deref())?;
    let mut bbcode = convert(cli, &input)?;
    if !bbcode.ends_with('\n') {
        bbcode.push('\n');
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, bbcode).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout()
            .write_all(bbcode.as_bytes())
            .map_err(|e| format!("cannot write to stdout: {e}"))?,
    }
    Ok(())
}

fn convert(cli: &Cli, input: &str) -> Result<String, String> {
    let meta = ArticleMeta::new(cli.translator.as_str(), cli.url.as_str(), cli.title.as_str());
    let options = options(cli);

    let converted = match cli.kind {
        Kind::Minecraft => spx::convert_minecraft_article(input, &meta, &bug_lookup(cli)?, &options),
        Kind::Feedback => spx::convert_feedback_article(input, &meta, &options),
        Kind::Help => spx::convert_help_article(input, &meta, &options),
        Kind::Fragment => spx::convert_fragment(input, &meta, &bug_lookup(cli)?, &options),
        Kind::Tweet => {
            let tweet: Tweet = serde_json::from_str(input).map_err(|e| format!("invalid tweet JSON: {e}"))?;
            let mode = if cli.dark { TweetMode::Dark } else { TweetMode::Light };
            return Ok(spx::render_tweet(&tweet, mode));
        }
    };
    converted.map_err(|e| e.to_string())
}

fn options(cli: &Cli) -> ConversionOptions {
    ConversionOptions {
        whitespace: match cli.whitespace {
            Whitespace::Strip => WhitespacePolicy::Strip,
            Whitespace::Collapse => WhitespacePolicy::CollapseAndTrim,
        },
        carousel: match cli.carousel {
            Carousel::Multiple => CarouselPolicy::AlbumWhenMultiple,
            Carousel::Captionless => CarouselPolicy::AlbumWhenCaptionless,
        },
        trailing_linebreak: if cli.trim_linebreaks {
            LinebreakPolicy::TrimLast
        } else {
            LinebreakPolicy::Keep
        },
        origin: cli.origin.clone(),
    }
}

fn bug_lookup(cli: &Cli) -> Result<BugLookup, String> {
    let bugs = match &cli.bugs {
        Some(path) => BugCache::from_json(&read_file(path)?).map_err(|e| format!("{}: {e}", path.display()))?,
        None => BugCache::default(),
    };
    let colors = match &cli.colors {
        Some(path) => ColorCache::from_json(&read_file(path)?).map_err(|e| format!("{}: {e}", path.display()))?,
        None => ColorCache::default(),
    };
    debug!("Loaded {} bug translations", bugs.len());
    Ok(spx::resolve_bugs(&bugs, &colors))
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(buffer)
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}
