//! Buffer sizes for one run.

use super::charset::{Class, ClassSelection};
use crate::error::{Error, Result};

pub const MIN_PASSLEN: usize = 4;
pub const MAX_PASSLEN: usize = 1024;
pub const MAX_PASSCNT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizes {
    /// Length every selected class is padded to: the largest selected table.
    pub base_len: usize,
    /// Dictionary length, `base_len` per selected class.
    pub mix_len: usize,
    /// Entropy pool length: padding, two shuffle sweeps, then one byte per
    /// password character.
    pub ent_len: usize,
    pub pass_len: usize,
    pub pass_count: usize,
}

impl Sizes {
    pub fn compute(classes: ClassSelection, pass_len: usize, pass_count: usize) -> Result<Self> {
        if classes.is_empty() {
            return Err(Error::invalid_input("no character class selected"));
        }
        if !(MIN_PASSLEN..=MAX_PASSLEN).contains(&pass_len) {
            return Err(Error::invalid_input(format!(
                "password length {pass_len} outside {MIN_PASSLEN}..={MAX_PASSLEN}"
            )));
        }
        if !(1..=MAX_PASSCNT).contains(&pass_count) {
            return Err(Error::invalid_input(format!(
                "password count {pass_count} outside 1..={MAX_PASSCNT}"
            )));
        }

        let base_len = classes
            .selected()
            .map(|c| c.table().len())
            .max()
            .unwrap_or_default();
        let mix_len = base_len * classes.count();
        let mut sizes = Self {
            base_len,
            mix_len,
            ent_len: 0,
            pass_len,
            pass_count,
        };
        let padding: usize = classes.selected().map(|c| sizes.padding(c)).sum();
        sizes.ent_len = 2 * mix_len + pass_count * pass_len + padding;

        tracing::debug!(
            base_len,
            mix_len,
            ent_len = sizes.ent_len,
            pass_len,
            pass_count,
            "sizes computed"
        );
        Ok(sizes)
    }

    /// Random fill slots a class needs to reach `base_len`.
    pub fn padding(&self, class: Class) -> usize {
        self.base_len - class.table().len()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn default_classes() {
        let sizes = Sizes::compute(ClassSelection::DEFAULT, 12, 3).unwrap();
        assert_eq!(sizes.base_len, 26);
        assert_eq!(sizes.mix_len, 78);
        // 2 * 78 + 3 * 12 + 16 digit pads
        assert_eq!(sizes.ent_len, 208);
        assert_eq!(sizes.padding(Class::Digit), 16);
        assert_eq!(sizes.padding(Class::Lower), 0);
    }

    #[test]
    fn punctuation_dominates_base_length() {
        let sizes = Sizes::compute(ClassSelection::ALL, 16, 2).unwrap();
        assert_eq!(sizes.base_len, 32);
        assert_eq!(sizes.mix_len, 128);
        assert_eq!(sizes.ent_len, 2 * 128 + 32 + (22 + 6 + 6));
    }

    #[test]
    fn digits_alone_need_no_padding() {
        let sel = ClassSelection::from_flags("d").unwrap();
        let sizes = Sizes::compute(sel, 8, 1).unwrap();
        assert_eq!((sizes.base_len, sizes.mix_len, sizes.ent_len), (10, 10, 28));
    }

    #[test]
    fn rejects_out_of_range_input() {
        let sel = ClassSelection::DEFAULT;
        assert!(matches!(
            Sizes::compute(ClassSelection::default(), 12, 1),
            Err(Error::InvalidInput(_))
        ));
        assert!(Sizes::compute(sel, MIN_PASSLEN - 1, 1).is_err());
        assert!(Sizes::compute(sel, MAX_PASSLEN + 1, 1).is_err());
        assert!(Sizes::compute(sel, 12, 0).is_err());
        assert!(Sizes::compute(sel, 12, MAX_PASSCNT + 1).is_err());
        assert!(Sizes::compute(sel, MAX_PASSLEN, MAX_PASSCNT).is_ok());
    }

    fn selection() -> impl Strategy<Value = ClassSelection> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(digits, lower, upper, punct)| ClassSelection {
                digits,
                lower,
                upper,
                punct,
            })
            .prop_filter("non-empty", |s| !s.is_empty())
    }

    proptest! {
        #[test]
        fn size_formula_holds(
            sel in selection(),
            pass_len in MIN_PASSLEN..=64usize,
            pass_count in 1..=16usize,
        ) {
            let sizes = Sizes::compute(sel, pass_len, pass_count).unwrap();
            let max = sel.selected().map(|c| c.table().len()).max().unwrap();

            prop_assert_eq!(sizes.base_len, max);
            prop_assert_eq!(sizes.mix_len, max * sel.count());
            for class in sel.selected() {
                prop_assert!(sizes.base_len >= class.table().len());
            }
            let pads: usize = sel.selected().map(|c| sizes.padding(c)).sum();
            prop_assert_eq!(sizes.ent_len, 2 * sizes.mix_len + pass_len * pass_count + pads);
        }
    }
}
