//! Render configuration.
//!
//! [`RenderOptions`] is immutable for the duration of one render call.

use crate::width::text_width;

/// Default maximum line length before a branch expands.
pub const MAX_LINE_LENGTH: usize = 74;

/// Default indentation unit, repeated once per nesting level.
pub const INDENT_UNIT: &str = "  ";

/// Rendering mode for a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Single-line rendering.
    Inline,
    /// One child per line, indented one level deeper than the branch's
    /// own head and tail.
    Expanded,
}

/// Configuration for a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Forced mode. When set, every branch uses this mode; when unset,
    /// each branch measures itself against `max_line_length` and
    /// expands only if it would not fit.
    pub mode: Option<RenderMode>,

    /// Width budget used by the estimator.
    pub max_line_length: usize,

    /// Indentation unit repeated per depth level in expanded mode.
    pub indentation: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            mode: None,
            max_line_length: MAX_LINE_LENGTH,
            indentation: INDENT_UNIT.to_owned(),
        }
    }
}

impl RenderOptions {
    /// Create options that force the given mode on every branch.
    pub fn with_mode(mode: RenderMode) -> Self {
        RenderOptions {
            mode: Some(mode),
            ..Default::default()
        }
    }

    /// Create options with the specified maximum line length.
    pub fn with_max_line_length(max_line_length: usize) -> Self {
        RenderOptions {
            max_line_length,
            ..Default::default()
        }
    }

    /// Create options with the specified indentation unit.
    pub fn with_indentation(indentation: impl Into<String>) -> Self {
        RenderOptions {
            indentation: indentation.into(),
            ..Default::default()
        }
    }

    /// Display width of one indentation unit.
    pub(crate) fn indent_width(&self) -> usize {
        text_width(&self.indentation)
    }
}
