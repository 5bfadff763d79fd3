//! Render errors.

use std::io;

use thiserror::Error;

/// Failure while streaming rendered output to a writer.
///
/// Rendering to a `String` is total; only the writer-backed surface can
/// fail, and only with an I/O error from the underlying sink.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The underlying writer rejected output.
    #[error("failed to write rendered output")]
    Io(#[from] io::Error),
}
