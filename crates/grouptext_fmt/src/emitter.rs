//! Output emitters.
//!
//! Abstraction over the sink the renderer writes into: an in-memory
//! string for the common case, or any `io::Write` for streaming.

use std::io::{self, Write};

/// Platform line-break sequence used for all emitted line breaks.
#[cfg(windows)]
pub const LINE_BREAK: &str = "\r\n";

/// Platform line-break sequence used for all emitted line breaks.
#[cfg(not(windows))]
pub const LINE_BREAK: &str = "\n";

/// Sink for rendered output.
///
/// The renderer writes to an emitter during rendering. Different
/// implementations support in-memory strings, writer-backed streaming,
/// or other destinations.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a platform line break.
    fn emit_line_break(&mut self);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// String-based emitter for in-memory rendering.
///
/// This is the primary emitter; it builds a string incrementally and
/// hands it back via [`StringEmitter::output`].
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        StringEmitter {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_line_break(&mut self) {
        self.buffer.push_str(LINE_BREAK);
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}

/// Streams output to any writer.
///
/// Write errors do not interrupt emission; the first one is kept and
/// surfaced by [`WriteEmitter::finish`], so a failed render never
/// produces a partial-output success.
pub struct WriteEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteEmitter<W> {
    /// Create an emitter over the given writer.
    pub fn new(writer: W) -> Self {
        WriteEmitter {
            writer,
            error: None,
        }
    }

    /// Flush and return the writer, or the first error hit while
    /// emitting.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_all(bytes) {
            self.error = Some(error);
        }
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_line_break(&mut self) {
        self.write(LINE_BREAK.as_bytes());
    }

    fn emit_space(&mut self) {
        self.write(b" ");
    }
}
