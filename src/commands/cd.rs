use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

const NAME: &str = "cd";

/// `cd <path>` / `cd ..`
///
/// The arguments are rejoined with single spaces, so `cd My Documents` names
/// one directory. On any failure the session is left where it was.
pub fn run(session: &mut Session, args: &[String], _console: &mut Console<'_>) -> ShellResult<()> {
    if args.is_empty() {
        return Err(ShellError::MissingArgument { command: NAME });
    }
    let path = args.join(" ");

    let target = if path == ".." {
        session.current_dir().parent().map(|p| p.to_path_buf())
    } else {
        Some(session.resolve(&path))
    };

    let no_such = || ShellError::NoSuchDirectory {
        command: NAME,
        name: path.clone(),
    };
    let target = target.filter(|t| t.is_dir()).ok_or_else(no_such)?;
    let target = target.canonicalize().map_err(|_| no_such())?;

    session.set_current_dir(target);
    Ok(())
}
