//! DOM to BBCode conversion engine.
//!
//! [`main::walk_node`] is the single recursive entry point; the rule modules
//! implement one conversion per element kind.

mod block;
pub mod context;
pub mod dispatch;
pub(crate) mod dom;
mod inline;
pub(crate) mod main;
pub mod media;

pub use context::{ArticleMeta, Attribution, BugLookup, Context, ResolvedBug};
pub use dispatch::{IGNORED_CLASS, TagKind};
pub use media::{Slide, render_slides, should_use_album};
