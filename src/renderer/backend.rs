//! Output sinks for the text renderer

use std::{fmt, io};

use crate::error::TableError;

/// Adapts a byte sink to the character sink the renderer writes to,
/// keeping the first I/O error so it can be surfaced instead of `fmt::Error`.
pub(crate) struct IoSink<'a, W: io::Write + ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: io::Write + ?Sized> IoSink<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self { inner, error: None }
    }

    /// Translate a failed render into the error that caused it
    pub(crate) fn into_error(self, err: fmt::Error) -> TableError {
        match self.error {
            Some(e) => TableError::Io(e),
            None => TableError::Fmt(err),
        }
    }
}

impl<W: io::Write + ?Sized> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
