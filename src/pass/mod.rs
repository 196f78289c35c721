//! Password generation and output.

pub mod charset;
pub mod dictionary;
mod generate;
pub mod output;
pub mod sizes;

pub use charset::ClassSelection;
pub use generate::run;
pub use output::SecureBufWriter;
pub use sizes::{MAX_PASSCNT, MAX_PASSLEN, MIN_PASSLEN};
