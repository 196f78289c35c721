//! CLI context - bundles settings and flags for one invocation.

use std::io;

use super::{CliFlags, prompts};
use crate::pass::{self, SecureBufWriter};
use crate::rand::urand;
use crate::secure::SystemHeap;
use crate::settings::Settings;

/// Run failed; the reason has already been printed.
#[derive(Debug)]
pub struct Failed;

/// Application context for one CLI run.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Load saved settings underneath the parsed flags.
    pub fn new(flags: CliFlags) -> Self {
        prompts::set_quiet(flags.quiet);
        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::settings_not_loaded(&e);
            Settings::default()
        });
        Self::with_settings(flags, settings)
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<(), Failed> {
        self.apply_flags()?;
        self.handle_save();
        self.generate_output()
    }

    /// Apply CLI flags to settings, rejecting malformed or out-of-range
    /// numbers.
    fn apply_flags(&mut self) -> Result<(), Failed> {
        if let Some(arg) = &self.flags.length {
            let Some(len) = parse_in_range(arg, Settings::length_in_range) else {
                prompts::invalid_length();
                return Err(Failed);
            };
            self.settings.pass_length = len;
        }
        if let Some(arg) = &self.flags.number {
            let Some(count) = parse_in_range(arg, Settings::count_in_range) else {
                prompts::invalid_count();
                return Err(Failed);
            };
            self.settings.number_of_passwords = count;
        }

        let classes = self.flags.classes();
        if !classes.is_empty() {
            self.settings.classes = classes;
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(path) => tracing::info!(path = %path.display(), "saved defaults"),
            Err(e) => prompts::settings_not_saved(&e),
        }
    }

    fn generate_output(&self) -> Result<(), Failed> {
        let classes = self.settings.classes.or_default();

        let result = urand::open(&self.flags.source).and_then(|mut source| {
            let stdout = io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            pass::run(
                &SystemHeap,
                &mut source,
                classes,
                self.settings.pass_length,
                self.settings.number_of_passwords,
                &mut out,
            )
        });

        result.map_err(|e| {
            tracing::debug!(error = ?e, "generation failed");
            prompts::error(&capitalize(&e.to_string()));
            Failed
        })
    }
}

fn parse_in_range(arg: &str, in_range: fn(usize) -> bool) -> Option<usize> {
    arg.trim().parse().ok().filter(|&n| in_range(n))
}

fn capitalize(msg: &str) -> String {
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
