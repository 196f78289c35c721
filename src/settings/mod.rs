//! Password generation settings.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::{ClassSelection, MAX_PASSCNT, MAX_PASSLEN, MIN_PASSLEN};

pub const DEF_PASSLEN: usize = 12;
pub const DEF_PASSCNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    /// Empty means "use the built-in default classes".
    pub classes: ClassSelection,
}

impl Settings {
    pub fn load_from_file() -> std::io::Result<Self> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> std::io::Result<PathBuf> {
        let path = file::default_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        file::save(path, self)
    }

    pub fn length_in_range(len: usize) -> bool {
        (MIN_PASSLEN..=MAX_PASSLEN).contains(&len)
    }

    pub fn count_in_range(count: usize) -> bool {
        (1..=MAX_PASSCNT).contains(&count)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEF_PASSLEN,
            number_of_passwords: DEF_PASSCNT,
            classes: ClassSelection::default(),
        }
    }
}
