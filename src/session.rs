use std::io;
use std::path::{Path, PathBuf};

/// Extension appended to redirection targets and `cat` file names.
pub const TEXT_EXTENSION: &str = "txt";

/// The interpreter's only state: where it currently is.
///
/// `current_dir` is always canonical and pointed at a directory when it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_dir: PathBuf,
}

impl Session {
    /// Start a session at `dir`, which must exist and be a directory.
    pub fn new(dir: impl AsRef<Path>) -> io::Result<Self> {
        let current_dir = dir.as_ref().canonicalize()?;
        if !current_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", current_dir.display()),
            ));
        }
        Ok(Self { current_dir })
    }

    /// Start a session at the process working directory.
    pub fn from_env() -> io::Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Replace the current directory. Callers have already checked that `dir`
    /// is an existing directory in canonical form.
    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        log::debug!("current directory: {}", dir.display());
        self.current_dir = dir;
    }

    /// Resolve `name` as a child of the current directory.
    ///
    /// Leading separators are dropped so that `/foo` still means `<cwd>/foo`.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.current_dir
            .join(name.trim_start_matches(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR))
    }

    /// `<cwd>/<name>.txt`
    pub fn text_file(&self, name: &str) -> PathBuf {
        self.current_dir.join(format!("{name}.{TEXT_EXTENSION}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canonicalizes_the_start_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path().join(".")).unwrap();
        assert_eq!(session.current_dir(), tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn new_rejects_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain");
        std::fs::write(&file, b"").unwrap();
        assert!(Session::new(&file).is_err());
    }

    #[test]
    fn resolve_treats_leading_slash_as_relative() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path()).unwrap();
        assert_eq!(session.resolve("/a"), session.current_dir().join("a"));
        assert_eq!(session.resolve("a/b"), session.current_dir().join("a").join("b"));
    }

    #[test]
    fn text_file_appends_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path()).unwrap();
        assert_eq!(session.text_file("out"), session.current_dir().join("out.txt"));
    }
}
