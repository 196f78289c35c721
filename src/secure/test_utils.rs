//! Instrumented heaps for exercising the buffer lifecycle in tests.

use std::cell::RefCell;

use super::{BufferKind, Heap};
use crate::error::{Error, Result};

/// Hands out plain vectors and keeps a copy of every released one.
///
/// The copy is taken after `SecureBuf` zeroized the bytes and before the
/// allocation is freed, i.e. what the allocator would get back.
#[derive(Debug, Default)]
pub struct RecordingHeap {
    released: RefCell<Vec<(BufferKind, Vec<u8>)>>,
}

impl RecordingHeap {
    pub fn released(&self) -> Vec<(BufferKind, Vec<u8>)> {
        self.released.borrow().clone()
    }

    pub fn released_kinds(&self) -> Vec<BufferKind> {
        self.released.borrow().iter().map(|(kind, _)| *kind).collect()
    }

    pub fn all_released_zeroed(&self) -> bool {
        self.released
            .borrow()
            .iter()
            .all(|(_, bytes)| bytes.iter().all(|&b| b == 0))
    }
}

impl Heap for RecordingHeap {
    fn acquire(&self, _kind: BufferKind, len: usize) -> Result<Vec<u8>> {
        Ok(vec![0; len])
    }

    fn release(&self, kind: BufferKind, bytes: Vec<u8>) {
        self.released.borrow_mut().push((kind, bytes));
    }
}

/// Refuses one buffer kind, records the rest like [`RecordingHeap`].
#[derive(Debug)]
pub struct FailingHeap {
    refuse: BufferKind,
    inner: RecordingHeap,
}

impl FailingHeap {
    pub fn new(refuse: BufferKind) -> Self {
        Self {
            refuse,
            inner: RecordingHeap::default(),
        }
    }

    pub fn recorder(&self) -> &RecordingHeap {
        &self.inner
    }
}

impl Heap for FailingHeap {
    fn acquire(&self, kind: BufferKind, len: usize) -> Result<Vec<u8>> {
        if kind == self.refuse {
            return Err(Error::AllocationFailure { buffer: kind, len });
        }
        self.inner.acquire(kind, len)
    }

    fn release(&self, kind: BufferKind, bytes: Vec<u8>) {
        self.inner.release(kind, bytes);
    }
}

/// Deterministic stand-in for the entropy device: byte `i` is `i * 37 + 11`.
pub fn stepped_entropy(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 37 + 11) as u8).collect()
}
