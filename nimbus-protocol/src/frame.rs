//! Frame scanning for the lamp link
//!
//! Frame format:
//! - START (1 byte): start marker, `<` by default
//! - TAG (1 byte): message type
//! - PAYLOAD (0-126 bytes): tag-specific ASCII text
//! - END (1 byte): end marker, `>` by default
//!
//! There is no length field and no escaping. Anything between a start marker
//! and the next end marker is the frame body, including further start
//! markers. Bytes outside a frame are noise (the same UART also carries
//! human-readable log lines).

use core::mem;

use heapless::Vec;

use crate::config::Markers;

/// Receive buffer capacity in bytes
///
/// One slot is reserved, so the longest accepted body (tag plus payload) is
/// `RX_CAPACITY - 1` bytes.
pub const RX_CAPACITY: usize = 128;

/// A completed frame body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const N: usize = RX_CAPACITY> {
    body: Vec<u8, N>,
    dropped: usize,
}

impl<const N: usize> Frame<N> {
    /// Message type tag, `None` for an empty frame (`<>`)
    pub fn tag(&self) -> Option<u8> {
        self.body.first().copied()
    }

    /// Payload after the tag
    pub fn payload(&self) -> &[u8] {
        self.body.get(1..).unwrap_or(&[])
    }

    /// Tag and payload as received
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns true if the frame had no tag
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns true if bytes were dropped because the body overflowed
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// Number of body bytes dropped on overflow
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Outcome of feeding one byte to the receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed<const N: usize = RX_CAPACITY> {
    /// Byte arrived outside a frame and was not buffered
    Noise(u8),
    /// Byte accepted, frame still open (also returned for the start marker)
    Pending,
    /// Frame body is full, byte dropped; the frame stays open until its end marker
    Overflow,
    /// End marker closed a frame
    Complete(Frame<N>),
}

/// Byte-at-a-time frame scanner
///
/// Holds the receive session: whether a frame is open, and the body read so
/// far (its length is the write cursor). The buffer never grows beyond
/// `N - 1` bytes regardless of input.
#[derive(Debug, Clone)]
pub struct FrameReceiver<const N: usize = RX_CAPACITY> {
    in_progress: bool,
    buffer: Vec<u8, N>,
    dropped: usize,
}

impl<const N: usize> Default for FrameReceiver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameReceiver<N> {
    /// Longest body kept; further bytes are dropped
    pub const MAX_BODY: usize = N.saturating_sub(1);

    /// Create a receiver waiting for a start marker
    pub fn new() -> Self {
        Self {
            in_progress: false,
            buffer: Vec::new(),
            dropped: 0,
        }
    }

    /// Abandon any open frame
    pub fn reset(&mut self) {
        self.in_progress = false;
        self.buffer.clear();
        self.dropped = 0;
    }

    /// Returns true while a frame is open
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Write position in the body buffer
    pub fn cursor(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte to the receiver
    pub fn feed(&mut self, byte: u8, markers: Markers) -> Feed<N> {
        if !self.in_progress {
            if byte == markers.start {
                self.buffer.clear();
                self.dropped = 0;
                self.in_progress = true;
                return Feed::Pending;
            }
            return Feed::Noise(byte);
        }

        if byte == markers.end {
            let frame = Frame {
                body: mem::take(&mut self.buffer),
                dropped: self.dropped,
            };
            self.reset();
            return Feed::Complete(frame);
        }

        if self.buffer.len() >= Self::MAX_BODY {
            self.dropped = self.dropped.saturating_add(1);
            return Feed::Overflow;
        }

        // Cannot fail: length is below MAX_BODY, which is below N
        let _ = self.buffer.push(byte);
        Feed::Pending
    }

    /// Feed multiple bytes to the receiver
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8], markers: Markers) -> Option<Frame<N>> {
        for &byte in bytes {
            if let Feed::Complete(frame) = self.feed(byte, markers) {
                return Some(frame);
            }
        }
        None
    }
}
