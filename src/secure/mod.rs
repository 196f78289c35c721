//! Zeroize-on-release buffers for entropy, dictionary and password bytes.
//!
//! Every buffer that ever holds secret material is a [`SecureBuf`]. It is
//! obtained from a [`Heap`], registered for emergency zeroing while alive, and
//! on drop it is overwritten with zeros before the heap gets the memory back.
//! Dropping happens in reverse declaration order, so a run that bails out early
//! with `?` releases exactly the buffers it acquired, newest first.

mod pages;
pub mod registry;
#[cfg(test)]
pub mod test_utils;

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, Once};

use zeroize::Zeroize;

use crate::cli::prompts;
use crate::error::{Error, Result};

/// Which of the three run buffers a [`SecureBuf`] backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    EntropyPool,
    Dictionary,
    Password,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferKind::EntropyPool => "entropy pool",
            BufferKind::Dictionary => "dictionary",
            BufferKind::Password => "password buffer",
        })
    }
}

/// Source of backing memory for secure buffers.
///
/// `release` always receives the buffer already zeroized, with its length
/// unchanged.
pub trait Heap {
    fn acquire(&self, kind: BufferKind, len: usize) -> Result<Vec<u8>>;

    fn release(&self, _kind: BufferKind, _bytes: Vec<u8>) {}
}

/// Process heap, with pages pinned in RAM where the kernel allows it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHeap;

impl Heap for SystemHeap {
    fn acquire(&self, kind: BufferKind, len: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailure { buffer: kind, len })?;
        bytes.resize(len, 0);
        lock(&bytes);
        Ok(bytes)
    }

    fn release(&self, _kind: BufferKind, bytes: Vec<u8>) {
        unlock(&bytes);
    }
}

static MLOCK_WARNING: Once = Once::new();
static LOCKED_PAGES: Mutex<pages::PageLocks> = Mutex::new(pages::PageLocks::new());

fn locked_pages() -> MutexGuard<'static, pages::PageLocks> {
    LOCKED_PAGES.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(unix)]
fn page_size() -> usize {
    use std::sync::OnceLock;

    static PAGE_SIZE: OnceLock<usize> = OnceLock::new();
    *PAGE_SIZE.get_or_init(|| {
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        usize::try_from(size).ok().filter(|&s| s > 0).unwrap_or(4096)
    })
}

#[cfg(unix)]
fn lock(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    // Held across the syscall so a concurrent unlock cannot undo this lock.
    let mut locked = locked_pages();
    let failed = unsafe { libc::mlock(bytes.as_ptr() as *const libc::c_void, bytes.len()) != 0 };
    if failed {
        drop(locked);
        tracing::debug!(len = bytes.len(), "mlock refused");
        MLOCK_WARNING.call_once(prompts::mlock_failed);
        return;
    }
    locked.hold(pages::covering(bytes.as_ptr() as usize, bytes.len(), page_size()));
}

/// Unlock only the pages no other live buffer still sits on.
#[cfg(unix)]
fn unlock(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let page = page_size();
    let mut locked = locked_pages();
    for index in locked.release(pages::covering(bytes.as_ptr() as usize, bytes.len(), page)) {
        unsafe { libc::munlock((index * page) as *const libc::c_void, page) };
    }
}

#[cfg(not(unix))]
fn lock(_bytes: &[u8]) {
    MLOCK_WARNING.call_once(prompts::mlock_failed);
}

#[cfg(not(unix))]
fn unlock(_bytes: &[u8]) {}

/// Owned byte buffer that is zeroized before its memory goes back to the heap.
pub struct SecureBuf<'h> {
    heap: &'h dyn Heap,
    kind: BufferKind,
    bytes: Vec<u8>,
    slot: Option<usize>,
}

impl<'h> SecureBuf<'h> {
    /// Acquire `len` zeroed bytes from `heap`.
    pub fn acquire(heap: &'h dyn Heap, kind: BufferKind, len: usize) -> Result<Self> {
        let mut bytes = heap.acquire(kind, len)?;
        let slot = registry::track(&mut bytes);
        tracing::trace!(%kind, len, "acquired secure buffer");
        Ok(Self {
            heap,
            kind,
            bytes,
            slot,
        })
    }
}

impl Deref for SecureBuf<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for SecureBuf<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl fmt::Debug for SecureBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} ({} bytes)]", self.kind, self.bytes.len())
    }
}

impl Drop for SecureBuf<'_> {
    fn drop(&mut self) {
        // Zero first: once the slot is gone a signal can no longer reach it.
        self.bytes.as_mut_slice().zeroize();
        if let Some(slot) = self.slot.take() {
            registry::untrack(slot);
        }
        tracing::trace!(kind = %self.kind, "released secure buffer");
        self.heap.release(self.kind, mem::take(&mut self.bytes));
    }
}
