//! Render context.
//!
//! The per-call writer state threaded through the recursion: nesting
//! depth, whether a space is pending before the next token, and whether
//! the current output line already has content. All of it is local to
//! one render invocation; nothing survives the call.
//!
//! Spacing rules:
//!
//! - a fresh line gets one indentation unit per depth level before its
//!   first token
//! - writing a token leaves a pending space, so the next token on the
//!   same line is separated by exactly one space
//! - separators ignore the pending space: they attach directly to the
//!   token before them (`one,` rather than `one ,`)

use crate::emitter::{Emitter, StringEmitter};
use crate::options::RenderOptions;

/// Writer state for a single render call.
pub struct RenderContext<'a, E: Emitter = StringEmitter> {
    emitter: E,
    options: &'a RenderOptions,
    depth: usize,
    pending_space: bool,
    line_touched: bool,
}

impl<'a, E: Emitter> RenderContext<'a, E> {
    /// Create a context writing to the given emitter.
    pub fn with_emitter(options: &'a RenderOptions, emitter: E) -> Self {
        RenderContext {
            emitter,
            options,
            depth: 0,
            pending_space: false,
            // The first line continues the caller's cursor and is never
            // indented, whatever depth the first token lands at.
            line_touched: true,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the current output line already has content.
    pub fn line_touched(&self) -> bool {
        self.line_touched
    }

    /// Enter one nesting level.
    pub fn descend(&mut self) {
        self.depth += 1;
    }

    /// Leave one nesting level.
    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write a plain token: indentation if the line is fresh, a single
    /// space if one is pending, then the token text.
    pub fn token(&mut self, text: &str) {
        self.ensure_indentation();
        if self.pending_space {
            self.emitter.emit_space();
        }
        self.emitter.emit(text);
        self.pending_space = true;
        self.line_touched = true;
    }

    /// Write a token as a full terminated line.
    pub fn token_line(&mut self, text: &str) {
        self.token(text);
        self.line_break();
    }

    /// Write a separator token. No pending space is applied: separators
    /// attach to the token before them.
    pub fn separator(&mut self, text: &str) {
        self.ensure_indentation();
        self.emitter.emit(text);
        self.pending_space = true;
        self.line_touched = true;
    }

    /// Write a separator as a full terminated line.
    pub fn separator_line(&mut self, text: &str) {
        self.separator(text);
        self.line_break();
    }

    /// End the current line; the next token starts fresh, indented.
    pub fn line_break(&mut self) {
        self.emitter.emit_line_break();
        self.pending_space = false;
        self.line_touched = false;
    }

    /// Hand back the emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }

    fn ensure_indentation(&mut self) {
        if self.line_touched {
            return;
        }
        for _ in 0..self.depth {
            self.emitter.emit(&self.options.indentation);
        }
        self.line_touched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::LINE_BREAK;

    fn context(options: &RenderOptions) -> RenderContext<'_, StringEmitter> {
        RenderContext::with_emitter(options, StringEmitter::new())
    }

    #[test]
    fn tokens_get_a_single_separating_space() {
        let options = RenderOptions::default();
        let mut ctx = context(&options);
        ctx.token("one");
        ctx.token("two");
        assert_eq!(ctx.into_emitter().output(), "one two");
    }

    #[test]
    fn separators_attach_to_the_previous_token() {
        let options = RenderOptions::default();
        let mut ctx = context(&options);
        ctx.token("one");
        ctx.separator(",");
        ctx.token("two");
        assert_eq!(ctx.into_emitter().output(), "one, two");
    }

    #[test]
    fn fresh_lines_are_indented_to_depth() {
        let options = RenderOptions::default();
        let mut ctx = context(&options);
        ctx.descend();
        ctx.token("a");
        ctx.line_break();
        ctx.token("b");
        // The first line is never indented; the second is at depth 1.
        assert_eq!(ctx.into_emitter().output(), format!("a{LINE_BREAK}  b"));
    }

    #[test]
    fn line_breaks_clear_the_pending_space() {
        let options = RenderOptions::default();
        let mut ctx = context(&options);
        ctx.token("a");
        ctx.line_break();
        ctx.token("b");
        assert_eq!(ctx.into_emitter().output(), format!("a{LINE_BREAK}b"));
    }

    #[test]
    fn separator_lines_restart_indentation() {
        let options = RenderOptions::default();
        let mut ctx = context(&options);
        ctx.descend();
        ctx.token("a");
        ctx.separator_line(",");
        ctx.token("b");
        assert_eq!(ctx.into_emitter().output(), format!("a,{LINE_BREAK}  b"));
    }

    #[test]
    fn custom_indentation_unit_is_repeated_per_level() {
        let options = RenderOptions::with_indentation("....");
        let mut ctx = context(&options);
        ctx.descend();
        ctx.descend();
        ctx.line_break();
        ctx.token("deep");
        assert_eq!(
            ctx.into_emitter().output(),
            format!("{LINE_BREAK}........deep")
        );
    }
}
