//! Serial byte-stream capability
//!
//! The link codec never owns a peripheral directly. It holds something that
//! can report whether a byte is waiting, read one byte, and write bytes.
//! Chip HALs provide this through [`embedded_io`], so [`IoStream`] adapts any
//! `Read + ReadReady + Write + WriteReady` port without further glue.

use embedded_io::{Read, ReadReady, Write, WriteReady};

/// Non-blocking serial stream
///
/// `read_ready` must never block. `read_byte` is only called after
/// `read_ready` returned `Ok(true)`, so implementations may assume a byte is
/// waiting.
pub trait SerialStream {
    /// Error type for stream operations
    type Error;

    /// Check whether at least one byte can be read without blocking
    fn read_ready(&mut self) -> Result<bool, Self::Error>;

    /// Read a single waiting byte
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Write all of `data` to the stream
    ///
    /// Buffered and best-effort: never blocks, and the transport may drop
    /// bytes when its outbound buffer is full.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered outbound data
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: SerialStream + ?Sized> SerialStream for &mut T {
    type Error = T::Error;

    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        T::read_ready(self)
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        T::read_byte(self)
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_all(self, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

/// Errors reported by [`IoStream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoStreamError<E> {
    /// The underlying port reported an error
    Io(E),
    /// A read returned no data although the port claimed to be ready
    NoData,
    /// Outbound buffer full; the rest of the write was dropped
    TxFull,
}

/// Adapter from an `embedded-io` port to [`SerialStream`]
///
/// Works with buffered UARTs such as `embassy_rp::uart::BufferedUart`, which
/// implement `ReadReady` and `WriteReady` on top of their interrupt-driven
/// ring buffers. Writes only go out while the port reports room, so a full
/// TX ring drops bytes instead of stalling the caller.
#[derive(Debug)]
pub struct IoStream<T> {
    inner: T,
}

impl<T> IoStream<T> {
    /// Wrap a port
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped port
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped port
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Release the wrapped port
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + ReadReady + Write + WriteReady> SerialStream for IoStream<T> {
    type Error = IoStreamError<T::Error>;

    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        self.inner.read_ready().map_err(IoStreamError::Io)
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf).map_err(IoStreamError::Io)? {
            0 => Err(IoStreamError::NoData),
            _ => Ok(buf[0]),
        }
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut rest = data;
        while !rest.is_empty() {
            // A ready port accepts at least one byte without blocking
            if !self.inner.write_ready().map_err(IoStreamError::Io)? {
                return Err(IoStreamError::TxFull);
            }
            match self.inner.write(rest).map_err(IoStreamError::Io)? {
                0 => return Err(IoStreamError::TxFull),
                n => rest = &rest[n..],
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush().map_err(IoStreamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_io::ErrorType;

    /// Port that serves a fixed script and records writes
    struct ScriptPort {
        rx: &'static [u8],
        pos: usize,
        tx: heapless::Vec<u8, 32>,
    }

    impl ErrorType for ScriptPort {
        type Error = Infallible;
    }

    impl Read for ScriptPort {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.rx.len() - self.pos);
            buf[..n].copy_from_slice(&self.rx[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl ReadReady for ScriptPort {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(self.pos < self.rx.len())
        }
    }

    impl Write for ScriptPort {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.tx.capacity() - self.tx.len());
            let _ = self.tx.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl WriteReady for ScriptPort {
        fn write_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.tx.is_full())
        }
    }

    #[test]
    fn test_io_stream_reads_one_byte_at_a_time() {
        let mut stream = IoStream::new(ScriptPort {
            rx: b"<M",
            pos: 0,
            tx: heapless::Vec::new(),
        });

        assert_eq!(stream.read_ready(), Ok(true));
        assert_eq!(stream.read_byte(), Ok(b'<'));
        assert_eq!(stream.read_ready(), Ok(true));
        assert_eq!(stream.read_byte(), Ok(b'M'));
        assert_eq!(stream.read_ready(), Ok(false));
    }

    #[test]
    fn test_io_stream_read_without_data() {
        let mut stream = IoStream::new(ScriptPort {
            rx: b"",
            pos: 0,
            tx: heapless::Vec::new(),
        });
        assert_eq!(stream.read_byte(), Err(IoStreamError::NoData));
    }

    #[test]
    fn test_io_stream_write_passthrough() {
        let mut stream = IoStream::new(ScriptPort {
            rx: b"",
            pos: 0,
            tx: heapless::Vec::new(),
        });
        stream.write_all(b"<M2>").unwrap();
        assert_eq!(&stream.inner().tx[..], b"<M2>");
    }

    #[test]
    fn test_io_stream_write_full_buffer_drops() {
        let mut stream = IoStream::new(ScriptPort {
            rx: b"",
            pos: 0,
            tx: heapless::Vec::new(),
        });
        stream.write_all(&[b'x'; 30]).unwrap();

        assert_eq!(stream.write_all(b"<M2>"), Err(IoStreamError::TxFull));
        assert_eq!(stream.inner().tx.len(), 32);
        assert_eq!(&stream.inner().tx[30..], b"<M");

        // Nothing left to give; returns at once
        assert_eq!(stream.write_all(b">"), Err(IoStreamError::TxFull));
        assert_eq!(stream.write_all(b""), Ok(()));
    }
}
