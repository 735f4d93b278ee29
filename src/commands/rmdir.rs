use std::fs;

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

const NAME: &str = "rmdir";

/// `rmdir name...`: remove empty directories, one at a time.
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    if args.is_empty() {
        return Err(ShellError::MissingArgument { command: NAME });
    }
    for name in args {
        match remove_empty_dir(session, name) {
            Ok(()) => console.println("Directory Deleted Successfully!")?,
            Err(e) => {
                log::warn!("rmdir {name}: {e:?}");
                console.println(&e)?;
            }
        }
    }
    Ok(())
}

fn remove_empty_dir(session: &Session, name: &str) -> ShellResult<()> {
    let path = session.resolve(name);
    if !path.is_dir() {
        return Err(ShellError::NoSuchDirectory {
            command: NAME,
            name: name.to_owned(),
        });
    }
    let remove_err = |source| ShellError::DirectoryRemove {
        name: name.to_owned(),
        source,
    };
    if fs::read_dir(&path).map_err(remove_err)?.next().is_some() {
        return Err(ShellError::DirectoryNotEmpty {
            name: name.to_owned(),
        });
    }
    fs::remove_dir(&path).map_err(remove_err)?;
    log::debug!("removed directory {}", path.display());
    Ok(())
}
