//! Grouptext renderer
//!
//! Width-aware pretty-printing for `grouptext_tree` trees: every branch
//! renders on a single line when it fits the remaining width, and one
//! child per line when it does not.
//!
//! # Architecture
//!
//! Two passes per branch:
//!
//! 1. **Measure**: estimate the branch's inline length, stopping early
//!    once the width budget at its depth is breached
//! 2. **Render**: emit inline if it fits, expanded otherwise; children
//!    repeat the decision independently one level deeper
//!
//! The decision is local and greedy: there is no global line-breaking
//! search, and an expanded parent does not force its children to expand.
//!
//! # Modules
//!
//! - [`width`]: inline-length estimation
//! - [`emitter`]: output sinks (in-memory string and writer-backed)
//! - [`context`]: writer state (depth, pending space, touched line)
//! - [`render`]: the recursive renderer
//! - [`options`]: per-call configuration
//!
//! # Example
//!
//! ```
//! use grouptext_fmt::{render_with, RenderMode, RenderOptions};
//! use grouptext_tree::{BranchInfo, Tree};
//!
//! let tuple = Tree::group(["one", "two", "three"], BranchInfo::delimited("(", ")", ","));
//!
//! let inline = render_with(&tuple, &RenderOptions::with_mode(RenderMode::Inline));
//! assert_eq!(inline, "( one, two, three )");
//! ```

pub mod context;
pub mod emitter;
mod error;
pub mod options;
pub mod render;
mod stack;
pub mod width;

pub use emitter::{Emitter, StringEmitter, WriteEmitter, LINE_BREAK};
pub use error::RenderError;
pub use options::{RenderMode, RenderOptions, INDENT_UNIT, MAX_LINE_LENGTH};
pub use render::{render, render_to_writer, render_with, Renderer};
pub use width::Estimator;
