//! Buffered writer that never leaves password bytes behind.

use std::io::{self, Write};

use zeroize::Zeroize;

const CAPACITY: usize = 8 * 1024;

/// Like `BufWriter`, but the staging buffer is fixed-size (never reallocated,
/// so never copied) and zeroized after every drain and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.drain()?;
        }
        if data.len() > self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.drain();
    }
}
