use std::io;
use std::path::PathBuf;

pub type ShellResult<T> = Result<T, ShellError>;

/// Every diagnostic the shell can report.
///
/// The `Display` text is exactly what gets printed on the console, so the
/// messages here are part of the user-facing contract.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    // ── Input errors ─────────────────────────────────────────────────

    #[error("{command}: missing argument")]
    MissingArgument { command: &'static str },

    #[error("Invalid command syntax. Usage: rm <fileName>")]
    RmUsage,

    #[error("Error, Expected at least 2 arguments.")]
    MvArity,

    #[error("{command}: invalid option: {option}")]
    InvalidOption { command: &'static str, option: String },

    #[error("{command}: unexpected argument: {argument}")]
    UnexpectedArgument { command: &'static str, argument: String },

    #[error("Invalid redirection target: {name}")]
    InvalidRedirectTarget { name: String },

    #[error("Error executing command: {name} not valid")]
    UnknownCommand { name: String },

    // ── Filesystem state ─────────────────────────────────────────────

    #[error("{command}: No such directory: {name}")]
    NoSuchDirectory { command: &'static str, name: String },

    #[error("Failed to create Directory: {}", .path.display())]
    DirectoryExists { path: PathBuf },

    #[error("Failed to create Directory: {}", .path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("Failed to create File: {}", .path.display())]
    FileExists { path: PathBuf },

    #[error("Failed to create File: {}", .path.display())]
    FileCreate { path: PathBuf, source: io::Error },

    #[error("Failed to Delete Directory (The directory isn't empty): {name}")]
    DirectoryNotEmpty { name: String },

    #[error("Failed to Delete Directory {name}: {source}")]
    DirectoryRemove { name: String, source: io::Error },

    #[error("rm: cannot remove {name} : Is a directory")]
    IsADirectory { name: String },

    #[error("{command}: Target file does not exist: {name}")]
    TargetMissing { command: &'static str, name: String },

    #[error("rm: failed to remove {name}: {source}")]
    FileRemove { name: String, source: io::Error },

    #[error("Source file does not exist.")]
    SourceMissing,

    #[error("Destination Directory does not exist.")]
    DestinationNotDirectory,

    #[error("Failed to move file.")]
    MoveFailed,

    #[error("Failed to rename file.")]
    RenameFailed,

    #[error("File not found or cannot be read.")]
    FileUnreadable { source: io::Error },

    // ── I/O ──────────────────────────────────────────────────────────

    #[error("Failed to write {}: {source}", .path.display())]
    Redirect { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
