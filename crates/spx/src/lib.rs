#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::must_use_candidate)]
//! Convert Minecraft article HTML into forum BBCode.
//!
//! Every paragraph, heading and list item is emitted twice: a grey copy of the
//! source text followed by a machine-translated copy in which common phrases
//! and punctuation are already converted, ready for a human translator to
//! finish.
//!
//! # Example
//!
//! ```
//! use spx::{ArticleMeta, BugLookup, ConversionOptions, convert_fragment};
//!
//! let meta = ArticleMeta::new("X", "https://www.minecraft.net/en-us/article/x", "X");
//! let bbcode = convert_fragment("<p>Hello, world.</p>", &meta, &BugLookup::new(), &ConversionOptions::default())?;
//! assert!(bbcode.contains("Hello，world。"));
//! # Ok::<(), spx::ConversionError>(())
//! ```

pub mod article;
pub mod cache;
pub mod command;
pub mod converter;
pub mod error;
pub mod options;
pub mod postprocess;
pub mod templates;
pub mod text;
pub mod tweet;

pub use article::{
    VersionType, convert_feedback_article, convert_fragment, convert_help_article, convert_minecraft_article,
};
pub use cache::{BugCache, BugEntry, ColorCache, ReviewCache, ReviewEntry, color_from_translator, resolve_bugs};
pub use command::{
    ApprovalStatus, Translation, TranslationOutcome, apply_translation, approve_translation, parse_translation,
};
pub use converter::{ArticleMeta, BugLookup, ResolvedBug};
pub use error::{ConversionError, Result, ReviewError};
pub use options::{CarouselPolicy, ConversionOptions, LinebreakPolicy, WhitespacePolicy};
pub use text::translate_machinely;
pub use tweet::{Tweet, TweetMode, render_tweet};
