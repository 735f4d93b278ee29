use std::fs;

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

/// `rm name...`
///
/// All-or-nothing: every argument must be an existing non-directory before
/// anything is deleted.
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    if args.is_empty() {
        return Err(ShellError::RmUsage);
    }

    for name in args {
        let path = session.resolve(name);
        if path.is_dir() {
            return Err(ShellError::IsADirectory { name: name.clone() });
        }
        if !path.exists() {
            return Err(ShellError::TargetMissing {
                command: "rm",
                name: name.clone(),
            });
        }
    }

    for name in args {
        let path = session.resolve(name);
        if let Err(source) = fs::remove_file(&path) {
            let e = ShellError::FileRemove {
                name: name.clone(),
                source,
            };
            log::warn!("{e}");
            console.println(&e)?;
            continue;
        }
        log::debug!("removed {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, capture};

    #[test]
    fn requires_an_argument() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path()).unwrap();
        let (result, _) = capture("", |c| run(&session, &[], c));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid command syntax. Usage: rm <fileName>"
        );
    }

    #[test]
    fn deletes_every_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a"), b"").unwrap();
        fs::write(tmp.path().join("b"), b"").unwrap();
        let session = Session::new(tmp.path()).unwrap();

        let (result, _) = capture("", |c| run(&session, &args(&["a", "b"]), c));
        result.unwrap();
        assert!(!tmp.path().join("a").exists());
        assert!(!tmp.path().join("b").exists());
    }

    #[test]
    fn directory_aborts_everything() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a"), b"").unwrap();
        fs::create_dir(tmp.path().join("testDir")).unwrap();
        let session = Session::new(tmp.path()).unwrap();

        let (result, _) = capture("", |c| run(&session, &args(&["a", "testDir"]), c));
        assert_eq!(
            result.unwrap_err().to_string(),
            "rm: cannot remove testDir : Is a directory"
        );
        assert!(tmp.path().join("a").exists());
        assert!(tmp.path().join("testDir").is_dir());
    }

    #[test]
    fn missing_file_aborts_everything() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a"), b"").unwrap();
        fs::write(tmp.path().join("c"), b"").unwrap();
        let session = Session::new(tmp.path()).unwrap();

        let (result, _) = capture("", |c| {
            run(&session, &args(&["a", "nonexistentFile.txt", "c"]), c)
        });
        assert_eq!(
            result.unwrap_err().to_string(),
            "rm: Target file does not exist: nonexistentFile.txt"
        );
        assert!(tmp.path().join("a").exists());
        assert!(tmp.path().join("c").exists());
    }
}
