//! Per-run working alphabet.
//!
//! Each selected class gets a region of `base_len` bytes: its table copied
//! verbatim, then padded with entries drawn from that same table. The whole
//! buffer is then swept twice, swapping each position with one picked by the
//! next pool byte over the entire dictionary. That sweep is not Fisher-Yates
//! and its swap rule is part of the output contract for a given entropy
//! stream.

use super::charset::ClassSelection;
use super::sizes::Sizes;
use crate::error::Result;
use crate::rand::EntropyPool;
use crate::secure::{BufferKind, Heap, SecureBuf};

pub struct Dictionary<'h> {
    bytes: SecureBuf<'h>,
}

impl<'h> Dictionary<'h> {
    /// Fill, pad and shuffle.
    pub fn build(
        heap: &'h dyn Heap,
        classes: ClassSelection,
        sizes: &Sizes,
        pool: &mut EntropyPool<'_>,
    ) -> Result<Self> {
        let mut dictionary = Self::fill(heap, classes, sizes, pool)?;
        dictionary.shuffle(pool)?;
        tracing::trace!(mix_len = dictionary.len(), "dictionary ready");
        Ok(dictionary)
    }

    /// Unshuffled dictionary: one padded region per selected class, in fill
    /// order.
    pub fn fill(
        heap: &'h dyn Heap,
        classes: ClassSelection,
        sizes: &Sizes,
        pool: &mut EntropyPool<'_>,
    ) -> Result<Self> {
        let mut bytes = SecureBuf::acquire(heap, BufferKind::Dictionary, sizes.mix_len)?;

        for (class, region) in classes.selected().zip(bytes.chunks_exact_mut(sizes.base_len)) {
            let table = class.table();
            let (verbatim, padding) = region.split_at_mut(table.len());
            verbatim.copy_from_slice(table);

            let draws = pool.take(padding.len())?;
            for (slot, &byte) in padding.iter_mut().zip(draws) {
                *slot = table[byte as usize % table.len()];
            }
        }

        Ok(Self { bytes })
    }

    /// Two sweeps over the dictionary, one pool byte per swap.
    pub fn shuffle(&mut self, pool: &mut EntropyPool<'_>) -> Result<()> {
        let mix_len = self.bytes.len();
        let draws = pool.take(2 * mix_len)?;

        for (i, &byte) in draws.iter().enumerate() {
            self.bytes.swap(i % mix_len, byte as usize % mix_len);
        }
        Ok(())
    }

    /// Character selected by one pool byte.
    #[inline]
    pub fn pick(&self, byte: u8) -> u8 {
        self.bytes[byte as usize % self.bytes.len()]
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[cfg(test)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
