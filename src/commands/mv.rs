use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

/// `mv src dst` renames or moves into a directory.
/// `mv src... dir` moves every source into `dir` once all of them are known to exist.
///
/// Only the host rename primitive is used, never copy-and-delete.
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    match args {
        [] | [_] => Err(ShellError::MvArity),
        [source, destination] => move_or_rename(session, source, destination, console),
        [sources @ .., destination] => move_all(session, sources, destination, console),
    }
}

fn move_or_rename(
    session: &Session,
    source: &str,
    destination: &str,
    console: &mut Console<'_>,
) -> ShellResult<()> {
    let source = session.resolve(source);
    if !source.exists() {
        return Err(ShellError::SourceMissing);
    }
    let destination = session.resolve(destination);

    if destination.is_dir() {
        let target = into_dir(&source, &destination);
        rename(&source, &target).map_err(|e| failed(e, ShellError::MoveFailed))?;
        console.println(format_args!("File moved to {}", target.display()))?;
    } else {
        rename(&source, &destination).map_err(|e| failed(e, ShellError::RenameFailed))?;
        console.println(format_args!("File renamed to {}", destination.display()))?;
    }
    Ok(())
}

fn move_all(
    session: &Session,
    sources: &[String],
    destination: &str,
    console: &mut Console<'_>,
) -> ShellResult<()> {
    let destination = session.resolve(destination);
    if !destination.is_dir() {
        return Err(ShellError::DestinationNotDirectory);
    }
    if let Some(missing) = sources.iter().find(|s| !session.resolve(s).exists()) {
        return Err(ShellError::TargetMissing {
            command: "mv",
            name: missing.clone(),
        });
    }

    for name in sources {
        let source = session.resolve(name);
        let target = into_dir(&source, &destination);
        match rename(&source, &target) {
            Ok(()) => console.println(format_args!("File moved to {}", target.display()))?,
            Err(e) => console.println(failed(e, ShellError::MoveFailed))?,
        }
    }
    Ok(())
}

/// `dir/<base name of source>`
fn into_dir(source: &Path, dir: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}

/// Rename without ever replacing an existing path.
fn rename(from: &Path, to: &Path) -> io::Result<()> {
    if to.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }
    fs::rename(from, to)?;
    log::debug!("renamed {} -> {}", from.display(), to.display());
    Ok(())
}

fn failed(e: io::Error, err: ShellError) -> ShellError {
    log::warn!("mv: {e}");
    err
}
