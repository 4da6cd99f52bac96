//! Serial link codec
//!
//! One [`SerialCodec`] per UART, on both ends of the link. The host loop
//! calls [`SerialCodec::poll`] once per iteration; each call checks the
//! report timer and then does at most one byte of receive work, so a poll
//! never blocks and its cost is bounded.

use core::mem;

use nimbus_core::LampState;
use nimbus_hal::SerialStream;

use crate::config::CodecConfig;
use crate::diagnostics::{Diagnostics, LinkEvent};
use crate::dispatch::{Dispatch, Dispatcher};
use crate::encoder::FrameWriter;
use crate::frame::{Feed, Frame, FrameReceiver, RX_CAPACITY};
use crate::messages::LampMessage;
use crate::reporter::PeriodicReporter;

/// Framed message codec bound to one serial stream
///
/// - `S`: the stream capability
/// - `N`: receive buffer capacity; frame bodies longer than `N - 1` bytes
///   are truncated
pub struct SerialCodec<S, const N: usize = RX_CAPACITY> {
    stream: S,
    config: CodecConfig,
    receiver: FrameReceiver<N>,
    reporter: PeriodicReporter,
    diagnostics: Diagnostics,
}

impl<S: SerialStream, const N: usize> SerialCodec<S, N> {
    /// Create a codec with the default wire format
    pub fn new(stream: S) -> Self {
        Self::with_config(stream, CodecConfig::default())
    }

    /// Create a codec with a custom configuration
    pub fn with_config(stream: S, config: CodecConfig) -> Self {
        Self {
            stream,
            reporter: PeriodicReporter::new(config.print_frequency_hz),
            config,
            receiver: FrameReceiver::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Swap in a new stream, returning the old one
    ///
    /// Any partially received frame belonged to the old stream and is dropped.
    pub fn set_stream(&mut self, stream: S) -> S {
        self.receiver.reset();
        mem::replace(&mut self.stream, stream)
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Release the stream
    pub fn into_stream(self) -> S {
        self.stream
    }

    pub fn set_start_marker(&mut self, marker: u8) {
        self.config.start_marker = marker;
    }

    pub fn set_end_marker(&mut self, marker: u8) {
        self.config.end_marker = marker;
    }

    pub fn set_separator(&mut self, separator: u8) {
        self.config.separator = separator;
    }

    /// Set the report rate; zero or negative disables reporting
    pub fn set_print_frequency(&mut self, frequency_hz: f32) {
        self.config.print_frequency_hz = frequency_hz;
        self.reporter.set_frequency(frequency_hz);
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Reject frames with malformed numbers instead of applying them
    pub fn set_strict(&mut self, strict: bool) {
        self.config.strict = strict;
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Receive session state, for inspection
    pub fn receiver(&self) -> &FrameReceiver<N> {
        &self.receiver
    }

    /// Run one iteration of the link
    ///
    /// Checks the report timer, then consumes at most one waiting byte. A
    /// byte that completes a frame is dispatched into `state` before this
    /// returns. `now_ms` is a free-running millisecond counter and may wrap.
    pub fn poll(&mut self, now_ms: u32, state: &mut LampState) -> Option<LinkEvent> {
        if self.reporter.report_if_due(now_ms) {
            self.diagnostics.record_report();
            self.report(state);
        }

        let event = self.receive(state)?;
        self.diagnostics.record(&event);
        Some(event)
    }

    /// Start composing outbound frames
    pub fn writer(&mut self) -> FrameWriter<'_, S> {
        FrameWriter::new(&mut self.stream, &self.config)
    }

    /// Send one message as a complete frame
    pub fn send(&mut self, message: &LampMessage) {
        let mut writer = self.writer();
        message.write_to(&mut writer);
    }

    /// Announce a full lamp state to the peer
    pub fn send_state(&mut self, state: &LampState) {
        for message in LampMessage::announce(state) {
            self.send(&message);
        }
    }

    fn receive(&mut self, state: &mut LampState) -> Option<LinkEvent> {
        match self.stream.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(_) => return Some(LinkEvent::ReadError),
        }
        let Ok(byte) = self.stream.read_byte() else {
            return Some(LinkEvent::ReadError);
        };

        match self.receiver.feed(byte, self.config.markers()) {
            Feed::Pending => None,
            Feed::Noise(byte) => Some(LinkEvent::Noise(byte)),
            Feed::Overflow => Some(LinkEvent::Overflow),
            Feed::Complete(frame) => {
                let dispatch = Dispatcher::from_config(&self.config).dispatch(frame.body(), state);
                self.log_frame(&frame, &dispatch);
                Some(LinkEvent::Frame {
                    dispatch,
                    truncated: frame.is_truncated(),
                })
            }
        }
    }

    /// Periodic status dump
    ///
    /// With debug enabled the status line also goes out on the link, where
    /// the peer sees it as noise between frames.
    fn report(&mut self, state: &LampState) {
        if !self.config.debug {
            return;
        }
        self.writer().emit(state).newline();

        #[cfg(feature = "defmt")]
        defmt::info!("Link status: {} {}", state, self.diagnostics);
    }

    #[cfg(feature = "defmt")]
    fn log_frame(&self, frame: &Frame<N>, dispatch: &Dispatch) {
        if frame.is_truncated() {
            defmt::warn!(
                "Buffer overflow: frame truncated, {} bytes dropped",
                frame.dropped()
            );
        }
        match dispatch {
            Dispatch::Applied {
                message,
                malformed: true,
            } => defmt::debug!("Best-effort value in {}", message),
            Dispatch::Applied { message, .. } => {
                if self.config.debug {
                    defmt::debug!("Applied {}", message);
                }
            }
            Dispatch::Rejected { tag } => {
                defmt::warn!("Rejected frame '{}' with malformed number", *tag as char)
            }
            Dispatch::UnknownTag(tag) => {
                if self.config.strict {
                    defmt::warn!("Unknown tag '{}'", *tag as char);
                }
            }
            Dispatch::Empty => defmt::debug!("Empty frame"),
        }
    }

    #[cfg(not(feature = "defmt"))]
    fn log_frame(&self, _frame: &Frame<N>, _dispatch: &Dispatch) {}
}
