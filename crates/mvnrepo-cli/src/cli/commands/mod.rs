//! CLI command handlers, one file per subcommand.

mod checksum;
mod exists;
mod glob;
mod verify;

pub use checksum::run_checksum;
pub use exists::run_exists;
pub use glob::run_glob;
pub use verify::run_verify;
