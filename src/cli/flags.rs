use std::path::PathBuf;

use clap::Parser;

use crate::pass::ClassSelection;
use crate::rand::DEFAULT_DEVICE;

/// Generate random passwords from a single read of the system entropy device
#[derive(Debug, Default, Parser)]
#[command(name = "rndpassw", version)]
pub struct CliFlags {
    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include lowercase letters
    #[arg(short, long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(short, long)]
    pub upper: bool,

    /// Include punctuation
    #[arg(short, long)]
    pub punct: bool,

    /// Include every character class
    #[arg(short = 's', long = "all")]
    pub all: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Read entropy from this device or file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DEVICE)]
    pub source: PathBuf,

    /// Store length, count and classes of this run as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Password length
    #[arg(value_name = "PASSLEN", allow_negative_numbers = true)]
    pub length: Option<String>,

    /// Number of passwords
    #[arg(value_name = "PASSCNT", allow_negative_numbers = true)]
    pub number: Option<String>,
}

impl CliFlags {
    /// Classes chosen on the command line; empty if none.
    pub fn classes(&self) -> ClassSelection {
        if self.all {
            return ClassSelection::ALL;
        }
        ClassSelection {
            digits: self.digits,
            lower: self.lower,
            upper: self.upper,
            punct: self.punct,
        }
    }
}
