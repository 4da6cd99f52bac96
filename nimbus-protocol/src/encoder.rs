//! Outbound frame writer
//!
//! A fluent append-only writer over the stream. It adds nothing on its own:
//! the caller composes start marker, tag, fields and end marker, one message
//! per update.
//!
//! ```ignore
//! codec.writer().start().tag(b'R').emit(255).end().newline();
//! ```
//!
//! Writes are best-effort. A full outbound buffer loses bytes in the
//! transport and the writer does not try to detect it.

use core::fmt::{self, Write as _};

use nimbus_hal::SerialStream;

use crate::config::CodecConfig;

/// Fluent writer for one or more frames
pub struct FrameWriter<'a, S> {
    stream: &'a mut S,
    start_marker: u8,
    end_marker: u8,
    separator: u8,
}

impl<'a, S: SerialStream> FrameWriter<'a, S> {
    /// Create a writer using the markers and separator from `config`
    pub fn new(stream: &'a mut S, config: &CodecConfig) -> Self {
        Self {
            stream,
            start_marker: config.start_marker,
            end_marker: config.end_marker,
            separator: config.separator,
        }
    }

    /// Append the textual representation of `value`
    pub fn emit(&mut self, value: impl fmt::Display) -> &mut Self {
        let _ = write!(StreamFmt(&mut *self.stream), "{}", value);
        self
    }

    /// Append raw bytes
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        let _ = self.stream.write_all(bytes);
        self
    }

    /// Append the start marker
    pub fn start(&mut self) -> &mut Self {
        let marker = self.start_marker;
        self.raw(&[marker])
    }

    /// Append a message type tag
    pub fn tag(&mut self, tag: u8) -> &mut Self {
        self.raw(&[tag])
    }

    /// Append the field separator
    pub fn separator(&mut self) -> &mut Self {
        let separator = self.separator;
        self.raw(&[separator])
    }

    /// Append the end marker
    pub fn end(&mut self) -> &mut Self {
        let marker = self.end_marker;
        self.raw(&[marker])
    }

    /// Append a CRLF line ending
    pub fn newline(&mut self) -> &mut Self {
        self.raw(b"\r\n")
    }

    /// Flush the underlying stream
    pub fn flush(&mut self) -> &mut Self {
        let _ = self.stream.flush();
        self
    }
}

/// `core::fmt` sink over a serial stream
struct StreamFmt<'s, S>(&'s mut S);

impl<S: SerialStream> fmt::Write for StreamFmt<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
