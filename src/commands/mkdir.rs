use std::fs;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

/// `mkdir name...`
///
/// Each name is created independently, intermediate directories included.
/// A failure is reported and the next name is still attempted.
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    if args.is_empty() {
        return Err(ShellError::MissingArgument { command: "mkdir" });
    }
    for name in args {
        match create_dir(&session.resolve(name)) {
            Ok(path) => {
                console.println(format_args!(
                    "Directory Created Successfully! at : {}",
                    path.display()
                ))?;
            }
            Err(e) => {
                log::warn!("mkdir {name}: {e:?}");
                console.println(&e)?;
            }
        }
    }
    Ok(())
}

fn create_dir(path: &Path) -> ShellResult<PathBuf> {
    if path.exists() {
        return Err(ShellError::DirectoryExists {
            path: path.to_path_buf(),
        });
    }
    fs::create_dir_all(path).map_err(|source| ShellError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("created directory {}", path.display());
    Ok(path.to_path_buf())
}
