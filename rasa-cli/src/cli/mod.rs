mod cli;

pub use cli::{AddArgs, Cli, Command};
