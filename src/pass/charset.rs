//! Character classes and their tables.

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^{|}~_`";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Digit,
    Lower,
    Upper,
    Punct,
}

impl Class {
    /// Fill order of the dictionary.
    pub const ALL: [Class; 4] = [Class::Digit, Class::Lower, Class::Upper, Class::Punct];

    pub const fn table(self) -> &'static [u8] {
        match self {
            Class::Digit => DIGITS,
            Class::Lower => LOWERCASE,
            Class::Upper => UPPERCASE,
            Class::Punct => PUNCTUATION,
        }
    }

    /// Command-line letter, also used in the settings file.
    pub const fn flag(self) -> char {
        match self {
            Class::Digit => 'd',
            Class::Lower => 'l',
            Class::Upper => 'u',
            Class::Punct => 'p',
        }
    }
}

/// Which classes feed the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSelection {
    pub digits: bool,
    pub lower: bool,
    pub upper: bool,
    pub punct: bool,
}

impl ClassSelection {
    /// Applied when nothing was chosen.
    pub const DEFAULT: Self = Self {
        digits: true,
        lower: true,
        upper: true,
        punct: false,
    };

    pub const ALL: Self = Self {
        digits: true,
        lower: true,
        upper: true,
        punct: true,
    };

    pub fn contains(self, class: Class) -> bool {
        match class {
            Class::Digit => self.digits,
            Class::Lower => self.lower,
            Class::Upper => self.upper,
            Class::Punct => self.punct,
        }
    }

    pub fn insert(&mut self, class: Class) {
        match class {
            Class::Digit => self.digits = true,
            Class::Lower => self.lower = true,
            Class::Upper => self.upper = true,
            Class::Punct => self.punct = true,
        }
    }

    /// Selected classes in fill order.
    pub fn selected(self) -> impl Iterator<Item = Class> {
        Class::ALL.into_iter().filter(move |&c| self.contains(c))
    }

    pub fn count(self) -> usize {
        self.selected().count()
    }

    pub fn is_empty(self) -> bool {
        self.count() == 0
    }

    pub fn or_default(self) -> Self {
        if self.is_empty() { Self::DEFAULT } else { self }
    }

    /// True if `byte` belongs to any selected class.
    #[cfg(test)]
    pub fn allows(self, byte: u8) -> bool {
        self.selected().any(|c| c.table().contains(&byte))
    }

    /// Parse a string of class letters such as `"dlu"`. Unknown letters are
    /// rejected; an empty string gives an empty selection.
    pub fn from_flags(flags: &str) -> Option<Self> {
        let mut selection = Self::default();
        for ch in flags.chars() {
            let class = Class::ALL.into_iter().find(|c| c.flag() == ch)?;
            selection.insert(class);
        }
        Some(selection)
    }

    pub fn to_flags(self) -> String {
        self.selected().map(Class::flag).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn tables_are_disjoint() {
        for (i, a) in Class::ALL.iter().enumerate() {
            for b in &Class::ALL[i + 1..] {
                assert!(a.table().iter().all(|x| !b.table().contains(x)));
            }
        }
    }

    #[test]
    fn selected_follows_fill_order() {
        let sel = ClassSelection {
            punct: true,
            digits: true,
            ..Default::default()
        };
        assert_eq!(sel.selected().collect::<Vec<_>>(), vec![Class::Digit, Class::Punct]);
        assert_eq!(sel.count(), 2);
    }

    #[test]
    fn empty_selection_falls_back_to_default() {
        assert!(ClassSelection::default().is_empty());
        assert_eq!(ClassSelection::default().or_default(), ClassSelection::DEFAULT);
        assert_eq!(ClassSelection::ALL.or_default(), ClassSelection::ALL);
    }

    #[test]
    fn flags_round_trip() {
        let sel = ClassSelection::from_flags("pd").unwrap();
        assert!(sel.digits && sel.punct && !sel.lower && !sel.upper);
        assert_eq!(sel.to_flags(), "dp");
        assert_eq!(ClassSelection::from_flags(""), Some(ClassSelection::default()));
        assert_eq!(ClassSelection::from_flags("dx"), None);
    }

    #[test]
    fn allows_only_selected_alphabets() {
        let sel = ClassSelection::from_flags("l").unwrap();
        assert!(sel.allows(b'q'));
        assert!(!sel.allows(b'Q'));
        assert!(!sel.allows(b'7'));
    }
}
