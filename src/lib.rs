//! A small interactive shell for managing files in one working directory:
//! `pwd`, `cd`, `ls`, `mkdir`, `rmdir`, `touch`, `mv`, `rm`, `cat`, plus `>`
//! and `>>` redirection into text files.

pub mod command;
pub mod commands;
pub mod console;
pub mod error;
pub mod redirect;
pub mod session;
pub mod shell;

pub use command::{Command, CommandLine};
pub use console::Console;
pub use error::{ShellError, ShellResult};
pub use redirect::{RedirectMode, Redirection};
pub use session::Session;
pub use shell::{Flow, Shell};
