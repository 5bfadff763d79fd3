//! Recursive renderer.
//!
//! Top-down walk over a [`Tree`]. Every branch decides its own mode on
//! entry: a forced mode from the options applies outright; otherwise the
//! branch measures its inline length against the width remaining at its
//! depth and expands only if it would not fit. Children repeat the
//! decision independently one level deeper, so a short child inside an
//! expanded parent still renders inline.
//!
//! Emission order for a branch: head, children with separators between
//! them (each separator a full line in expanded mode), the terminating
//! separator when configured, a final line break in expanded mode, then
//! the tail at the branch's own depth.

use std::io::Write;

use grouptext_tree::{Branch, Tree};

use crate::context::RenderContext;
use crate::emitter::{Emitter, StringEmitter, WriteEmitter};
use crate::error::RenderError;
use crate::options::{RenderMode, RenderOptions};
use crate::stack::ensure_sufficient_stack;
use crate::width::Estimator;

/// Render a tree with default options.
pub fn render(tree: &Tree) -> String {
    render_with(tree, &RenderOptions::default())
}

/// Render a tree with explicit options.
pub fn render_with(tree: &Tree, options: &RenderOptions) -> String {
    Renderer::new(options).render(tree)
}

/// Render a tree into any writer.
///
/// Returns the writer on success. Emission never stops mid-token; the
/// first write error is surfaced here after the walk completes.
pub fn render_to_writer<W: Write>(
    tree: &Tree,
    options: &RenderOptions,
    writer: W,
) -> Result<W, RenderError> {
    let emitter = Renderer::with_emitter(options, WriteEmitter::new(writer)).render_to(tree);
    Ok(emitter.finish()?)
}

/// Recursive tree renderer.
///
/// Holds the state for exactly one render call: the output context and
/// the mode of the branch currently being emitted. Nothing is shared
/// between calls, so concurrent renders of the same tree are safe with
/// distinct sinks.
pub struct Renderer<'a, E: Emitter = StringEmitter> {
    ctx: RenderContext<'a, E>,
    options: &'a RenderOptions,
    inline: bool,
}

impl<'a> Renderer<'a, StringEmitter> {
    /// Renderer writing to an in-memory string.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self::with_emitter(options, StringEmitter::new())
    }

    /// Render and return the output string.
    pub fn render(self, tree: &Tree) -> String {
        self.render_to(tree).output()
    }
}

impl<'a, E: Emitter> Renderer<'a, E> {
    /// Renderer writing to a caller-provided emitter.
    pub fn with_emitter(options: &'a RenderOptions, emitter: E) -> Self {
        Renderer {
            ctx: RenderContext::with_emitter(options, emitter),
            options,
            inline: true,
        }
    }

    /// Render and hand back the emitter.
    pub fn render_to(mut self, tree: &Tree) -> E {
        self.visit(tree);
        self.ctx.into_emitter()
    }

    fn visit(&mut self, tree: &Tree) {
        ensure_sufficient_stack(|| match tree {
            Tree::Leaf(text) => self.ctx.token(text),
            Tree::Branch(branch) => self.visit_branch(branch),
        });
    }

    fn visit_branch(&mut self, branch: &Branch) {
        let enclosing = self.inline;
        self.inline = self.decide_inline(branch);

        let info = branch.info();
        if let Some(head) = &info.head {
            if self.inline {
                self.ctx.token(head);
            } else {
                self.ctx.token_line(head);
            }
        }

        self.ctx.descend();
        for (index, child) in branch.children().iter().enumerate() {
            if index > 0 {
                self.between_children(info.separator.as_deref());
            }
            self.visit(child);
        }
        if info.separator_is_terminator && !branch.children().is_empty() {
            if let Some(separator) = &info.separator {
                self.ctx.separator(separator);
            }
        }
        if !self.inline && self.ctx.line_touched() {
            self.ctx.line_break();
        }
        self.ctx.ascend();

        if let Some(tail) = &info.tail {
            self.ctx.token(tail);
        }

        self.inline = enclosing;
    }

    /// Between two children: separator text when configured, and in
    /// expanded mode the break that puts the next child on its own line.
    /// Expanded mode keeps one child per line even without a separator
    /// token; the break is line structure, not separator text.
    fn between_children(&mut self, separator: Option<&str>) {
        match (separator, self.inline) {
            (Some(text), true) => self.ctx.separator(text),
            (Some(text), false) => self.ctx.separator_line(text),
            (None, true) => {}
            (None, false) => self.ctx.line_break(),
        }
    }

    /// Pick this branch's mode. A forced mode decides every branch;
    /// otherwise the branch renders inline only when its estimated
    /// inline length fits the width remaining at this depth.
    fn decide_inline(&self, branch: &Branch) -> bool {
        match self.options.mode {
            Some(RenderMode::Inline) => true,
            Some(RenderMode::Expanded) => false,
            None => {
                let indent = self.options.indent_width() * self.ctx.depth();
                let budget = self.options.max_line_length.saturating_sub(indent);
                !Estimator::branch_too_long(branch, budget)
            }
        }
    }
}
