//! Table of live secure buffers for signal-time zeroing.
//!
//! Fixed size and lock-free so the signal handlers in `exits` can walk it.
//! A buffer that finds the table full is simply not tracked; its `Drop` still
//! zeroizes it on every normal exit path.

use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

const SLOTS: usize = 64;

static PTRS: [AtomicPtr<u8>; SLOTS] = [const { AtomicPtr::new(ptr::null_mut()) }; SLOTS];
static LENS: [AtomicUsize; SLOTS] = [const { AtomicUsize::new(0) }; SLOTS];

/// Register `bytes` and return its slot.
pub fn track(bytes: &mut [u8]) -> Option<usize> {
    if bytes.is_empty() {
        return None;
    }

    let ptr = bytes.as_mut_ptr();
    for (slot, entry) in PTRS.iter().enumerate() {
        if entry
            .compare_exchange(ptr::null_mut(), ptr, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            LENS[slot].store(bytes.len(), Ordering::Release);
            return Some(slot);
        }
    }

    tracing::debug!("secure buffer registry full");
    None
}

pub fn untrack(slot: usize) {
    LENS[slot].store(0, Ordering::Release);
    PTRS[slot].store(ptr::null_mut(), Ordering::Release);
}

/// Zero every tracked buffer. Async-signal-safe.
///
/// # Safety
///
/// Writes through raw pointers that are owned elsewhere; only call this when
/// the process is about to die and no other code will touch those buffers.
#[inline(never)]
pub unsafe fn emergency_zero() {
    for slot in 0..SLOTS {
        unsafe { zero_slot(slot) };
    }
}

/// Zero the buffer tracked in `slot`, if any.
///
/// # Safety
///
/// Same contract as [`emergency_zero`], for the one buffer in `slot`.
#[inline(never)]
pub unsafe fn zero_slot(slot: usize) {
    let ptr = PTRS[slot].load(Ordering::Acquire);
    let len = LENS[slot].load(Ordering::Acquire);
    if ptr.is_null() {
        return;
    }
    for i in 0..len {
        unsafe { ptr::write_volatile(ptr.add(i), 0u8) };
    }
}
