//! Entropy sources and the per-run entropy pool.

pub mod urand;

use std::io::Read;

use crate::error::{Error, Result};
use crate::secure::{BufferKind, Heap, SecureBuf};

pub use urand::DEFAULT_DEVICE;

// =============================================================================
// Sources
// =============================================================================

/// Provider of uniformly random bytes.
pub trait EntropySource {
    /// Name used in diagnostics, e.g. the device path.
    fn name(&self) -> &str;

    /// Fill all of `buf` with a single read. A short read is an error, never
    /// retried.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Entropy from anything readable: a device, a file, an in-memory cursor.
pub struct ReadSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReadSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: Read> EntropySource for ReadSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let (received, cause) = match self.reader.read(buf) {
            Ok(n) => (n, None),
            Err(e) => (0, Some(e)),
        };

        if received != buf.len() {
            return Err(Error::EntropyShortRead {
                origin: self.name.clone(),
                requested: buf.len(),
                received,
                cause,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Pool
// =============================================================================

/// One read's worth of entropy, handed out front to back exactly once.
pub struct EntropyPool<'h> {
    bytes: SecureBuf<'h>,
    cursor: usize,
}

impl<'h> EntropyPool<'h> {
    /// Acquire a `len` byte buffer and fill it from `source`.
    ///
    /// On a short read the buffer is dropped, and therefore zeroized, before
    /// the error reaches the caller.
    pub fn fill(heap: &'h dyn Heap, len: usize, source: &mut dyn EntropySource) -> Result<Self> {
        let mut bytes = SecureBuf::acquire(heap, BufferKind::EntropyPool, len)?;
        source.fill(&mut bytes)?;
        tracing::debug!(len, source = source.name(), "entropy pool filled");
        Ok(Self { bytes, cursor: 0 })
    }

    /// Next `n` unread bytes. The cursor never moves backwards.
    pub fn take(&mut self, n: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::EntropyExhausted {
                requested: n,
                remaining,
            });
        }
        let start = self.cursor;
        self.cursor += n;
        Ok(&self.bytes[start..self.cursor])
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }
}
