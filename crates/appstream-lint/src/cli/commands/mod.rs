//! CLI commands

mod check;
mod init;
mod inspect;
mod validate;

pub use check::CheckCommand;
pub use init::InitCommand;
pub use inspect::InspectCommand;
pub use validate::ValidateCommand;
