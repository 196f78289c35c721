//! Settings file persistence.
//!
//! One line, `passlen,passcnt,classes`, e.g. `12,10,dlu`. Fields that do not
//! parse or are out of range keep their default.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::cli::prompts;
use crate::pass::ClassSelection;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.classes.to_flags()
    );
    file.write_all(data.as_bytes())?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        prompts::warn(&format!(
            "Ignoring malformed settings file {}",
            path.display()
        ));
        return Ok(());
    }

    match parts[0].parse() {
        Ok(len) if Settings::length_in_range(len) => settings.pass_length = len,
        _ => bad_field(path, "password length", parts[0]),
    }
    match parts[1].parse() {
        Ok(count) if Settings::count_in_range(count) => settings.number_of_passwords = count,
        _ => bad_field(path, "password count", parts[1]),
    }
    match ClassSelection::from_flags(parts[2]) {
        Some(classes) => settings.classes = classes,
        None => bad_field(path, "character classes", parts[2]),
    }

    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(())
}

fn bad_field(path: &Path, what: &str, value: &str) {
    prompts::warn(&format!(
        "Ignoring invalid {what} '{value}' in {}",
        path.display()
    ));
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/rndpassw/settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEF_PASSCNT, DEF_PASSLEN};

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/settings");
        let saved = Settings {
            pass_length: 20,
            number_of_passwords: 3,
            classes: ClassSelection::from_flags("lp").unwrap(),
        };
        saved.save_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "20,3,lp\n");
        assert_eq!(Settings::load_from(&path).unwrap(), saved);
    }

    #[test]
    fn invalid_fields_fall_back_individually() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "2,abc,du\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.pass_length, DEF_PASSLEN);
        assert_eq!(settings.number_of_passwords, DEF_PASSCNT);
        assert_eq!(settings.classes, ClassSelection::from_flags("du").unwrap());
    }

    #[test]
    fn wrong_field_count_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "16,4\n").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn empty_class_field_means_default_classes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "16,4,\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.pass_length, 16);
        assert_eq!(settings.number_of_passwords, 4);
        assert!(settings.classes.is_empty());
    }
}
