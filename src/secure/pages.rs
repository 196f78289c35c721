//! Page reference counts for `mlock`.
//!
//! Locks are per page and not counted by the kernel, so one `munlock` undoes
//! every `mlock` on the pages it covers. Small buffers routinely share a page;
//! a page is only unlocked once no live buffer sits on it.

use std::collections::BTreeMap;
use std::ops::Range;

#[derive(Debug, Default)]
pub struct PageLocks {
    counts: BTreeMap<usize, usize>,
}

impl PageLocks {
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Record one more locked buffer on each page in `pages`.
    pub fn hold(&mut self, pages: Range<usize>) {
        for page in pages {
            *self.counts.entry(page).or_default() += 1;
        }
    }

    /// Drop one hold per page and return the pages nothing holds any more.
    pub fn release(&mut self, pages: Range<usize>) -> Vec<usize> {
        let mut freed = Vec::new();
        for page in pages {
            let Some(count) = self.counts.get_mut(&page) else {
                continue;
            };
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&page);
                freed.push(page);
            }
        }
        freed
    }

    #[cfg(test)]
    pub fn is_held(&self, page: usize) -> bool {
        self.counts.contains_key(&page)
    }
}

/// Page numbers covered by `len` bytes at `addr`. `len` must be non-zero.
pub fn covering(addr: usize, len: usize, page_size: usize) -> Range<usize> {
    let first = addr / page_size;
    let last = (addr + len - 1) / page_size;
    first..last + 1
}
