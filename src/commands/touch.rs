use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

/// `touch path...`
///
/// `dir/name` creates `dir` first (pre-existence is fine), then the empty file
/// `name` inside it. Touching a file that already exists is a failure.
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    if args.is_empty() {
        return Err(ShellError::MissingArgument { command: "touch" });
    }
    for arg in args {
        match touch(session, arg) {
            Ok(path) => {
                console.println(format_args!(
                    "File Created Successfully! at : {}",
                    path.display()
                ))?;
            }
            Err(e) => {
                log::warn!("touch {arg}: {e:?}");
                console.println(&e)?;
            }
        }
    }
    Ok(())
}

fn touch(session: &Session, arg: &str) -> ShellResult<PathBuf> {
    let path = match arg.rsplit_once('/') {
        Some((dir, name)) => {
            let dir = session.resolve(dir);
            fs::create_dir_all(&dir).map_err(|source| ShellError::FileCreate {
                path: dir.join(name),
                source,
            })?;
            dir.join(name)
        }
        None => session.resolve(arg),
    };
    create_file(&path)?;
    Ok(path)
}

/// Create a new empty file at `path`, failing if anything is already there.
pub fn create_file(path: &Path) -> ShellResult<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            log::debug!("created file {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(ShellError::FileExists {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ShellError::FileCreate {
            path: path.to_path_buf(),
            source,
        }),
    }
}
