//! Link events and counters
//!
//! Every non-fatal condition the codec handles is reported twice: as the
//! [`LinkEvent`] returned from the poll that saw it, and as a running count
//! in [`Diagnostics`].

use crate::dispatch::Dispatch;

/// Something the receive step observed during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Byte outside any frame, for the caller to echo or log
    Noise(u8),
    /// Frame body full; byte dropped
    Overflow,
    /// A frame completed and was dispatched
    Frame {
        dispatch: Dispatch,
        /// Frame body was cut to the buffer capacity
        truncated: bool,
    },
    /// The stream reported an error; treated as no data
    ReadError,
}

/// Running counters for one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Diagnostics {
    /// Frames completed by an end marker
    pub frames: u32,
    /// Frames whose message was written to the state
    pub applied: u32,
    /// Frames carrying a malformed number, applied or not
    pub malformed: u32,
    /// Frames dropped by strict mode
    pub rejected: u32,
    /// Frames with a tag outside the vocabulary
    pub unknown_tags: u32,
    /// Frames with no tag at all
    pub empty_frames: u32,
    /// Frames cut to the buffer capacity
    pub truncated_frames: u32,
    /// Body bytes dropped on overflow
    pub dropped_bytes: u32,
    /// Bytes received outside any frame
    pub noise_bytes: u32,
    /// Stream read errors
    pub read_errors: u32,
    /// Periodic reports emitted
    pub reports: u32,
}

impl Diagnostics {
    /// Count an event
    pub fn record(&mut self, event: &LinkEvent) {
        match event {
            LinkEvent::Noise(_) => bump(&mut self.noise_bytes),
            LinkEvent::Overflow => bump(&mut self.dropped_bytes),
            LinkEvent::ReadError => bump(&mut self.read_errors),
            LinkEvent::Frame {
                dispatch,
                truncated,
            } => {
                bump(&mut self.frames);
                if *truncated {
                    bump(&mut self.truncated_frames);
                }
                match dispatch {
                    Dispatch::Applied { malformed, .. } => {
                        bump(&mut self.applied);
                        if *malformed {
                            bump(&mut self.malformed);
                        }
                    }
                    Dispatch::Rejected { .. } => {
                        bump(&mut self.rejected);
                        bump(&mut self.malformed);
                    }
                    Dispatch::UnknownTag(_) => bump(&mut self.unknown_tags),
                    Dispatch::Empty => bump(&mut self.empty_frames),
                }
            }
        }
    }

    /// Count a periodic report
    pub fn record_report(&mut self) {
        bump(&mut self.reports);
    }
}

fn bump(counter: &mut u32) {
    *counter = counter.saturating_add(1);
}
