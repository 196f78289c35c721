//! Password generation.

use std::io::Write;

use super::charset::ClassSelection;
use super::dictionary::Dictionary;
use super::sizes::Sizes;
use crate::error::Result;
use crate::rand::{EntropyPool, EntropySource};
use crate::secure::{BufferKind, Heap, SecureBuf};

/// Generate `pass_count` passwords of `pass_len` characters and write them to
/// `out`, one per line.
///
/// Every buffer is acquired before the first line is written, so a failed run
/// writes nothing. All buffers are zeroized on the way out regardless of the
/// outcome, newest first: password, dictionary, entropy pool.
pub fn run(
    heap: &dyn Heap,
    source: &mut dyn EntropySource,
    classes: ClassSelection,
    pass_len: usize,
    pass_count: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let sizes = Sizes::compute(classes, pass_len, pass_count)?;

    let mut pool = EntropyPool::fill(heap, sizes.ent_len, source)?;
    let dictionary = Dictionary::build(heap, classes, &sizes, &mut pool)?;
    // One extra byte carries the line terminator so each password is a
    // single write.
    let mut line = SecureBuf::acquire(heap, BufferKind::Password, sizes.pass_len + 1)?;

    for _ in 0..sizes.pass_count {
        generate_into(&dictionary, &mut pool, &mut line)?;
        out.write_all(&line)?;
    }
    out.flush()?;

    tracing::debug!(
        count = sizes.pass_count,
        consumed = pool.consumed(),
        unread = pool.remaining(),
        "passwords written"
    );
    Ok(())
}

/// Fill `line` with one password followed by `\n`.
pub fn generate_into(
    dictionary: &Dictionary<'_>,
    pool: &mut EntropyPool<'_>,
    line: &mut [u8],
) -> Result<()> {
    let Some((terminator, password)) = line.split_last_mut() else {
        return Ok(());
    };
    let draws = pool.take(password.len())?;
    for (slot, &byte) in password.iter_mut().zip(draws) {
        *slot = dictionary.pick(byte);
    }
    *terminator = b'\n';
    Ok(())
}
