//! In-memory serial stream
//!
//! Fixed-capacity stand-in for a UART, used for host testing and for
//! simulating both ends of a link without hardware.

use heapless::{Deque, Vec};

use crate::stream::SerialStream;

/// Errors reported by [`MemoryStream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryStreamError {
    /// Receive queue is empty
    Empty,
    /// Receive queue cannot accept more bytes
    RxFull,
    /// Transmit buffer is full, remaining bytes were dropped
    TxFull,
}

/// Serial stream backed by a receive queue and a transmit buffer
///
/// - `RX`: receive queue capacity (bytes waiting to be read)
/// - `TX`: transmit buffer capacity (bytes written and not yet taken)
#[derive(Debug, Clone, Default)]
pub struct MemoryStream<const RX: usize, const TX: usize> {
    rx: Deque<u8, RX>,
    tx: Vec<u8, TX>,
}

impl<const RX: usize, const TX: usize> MemoryStream<RX, TX> {
    /// Create an empty stream
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
        }
    }

    /// Queue bytes for reading
    ///
    /// Bytes that do not fit are rejected; the ones already queued stay.
    pub fn push_rx(&mut self, data: &[u8]) -> Result<(), MemoryStreamError> {
        for &byte in data {
            self.rx
                .push_back(byte)
                .map_err(|_| MemoryStreamError::RxFull)?;
        }
        Ok(())
    }

    /// Number of bytes waiting to be read
    pub fn rx_len(&self) -> usize {
        self.rx.len()
    }

    /// Bytes written to the stream so far
    pub fn written(&self) -> &[u8] {
        &self.tx
    }

    /// Discard written bytes
    pub fn clear_written(&mut self) {
        self.tx.clear();
    }

    /// Move everything written here into the receive queue of `peer`
    ///
    /// Models a point-to-point wire: TX of one end is RX of the other.
    pub fn forward_to<const PRX: usize, const PTX: usize>(
        &mut self,
        peer: &mut MemoryStream<PRX, PTX>,
    ) -> Result<(), MemoryStreamError> {
        let result = peer.push_rx(&self.tx);
        self.tx.clear();
        result
    }
}

impl<const RX: usize, const TX: usize> SerialStream for MemoryStream<RX, TX> {
    type Error = MemoryStreamError;

    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.rx.pop_front().ok_or(MemoryStreamError::Empty)
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let room = TX - self.tx.len();
        let n = data.len().min(room);
        // Cannot fail: n is bounded by the remaining capacity
        let _ = self.tx.extend_from_slice(&data[..n]);
        if n < data.len() {
            return Err(MemoryStreamError::TxFull);
        }
        Ok(())
    }
}
