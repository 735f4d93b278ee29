use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use bytes::Bytes;

use crate::commands::touch;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// `>`
    Overwrite,
    /// `>>`
    Append,
}

impl RedirectMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            ">" => Some(Self::Overwrite),
            ">>" => Some(Self::Append),
            _ => None,
        }
    }
}

/// `> name` or `>> name` at the end of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub mode: RedirectMode,
    pub target: String,
}

impl Redirection {
    /// Split a trailing redirection off `args`.
    ///
    /// The operator must be followed by exactly one bare name.
    pub fn split<'a>(
        command: &'static str,
        args: &'a [String],
    ) -> ShellResult<(&'a [String], Option<Redirection>)> {
        let operator = args
            .iter()
            .enumerate()
            .find_map(|(i, a)| RedirectMode::from_token(a).map(|mode| (i, mode)));
        let Some((pos, mode)) = operator else {
            return Ok((args, None));
        };
        let target = match &args[pos + 1..] {
            [] => return Err(ShellError::MissingArgument { command }),
            [target] => target,
            [_, extra, ..] => {
                return Err(ShellError::UnexpectedArgument {
                    command,
                    argument: extra.clone(),
                });
            }
        };
        if target.contains(['/', std::path::MAIN_SEPARATOR]) {
            return Err(ShellError::InvalidRedirectTarget { name: target.clone() });
        }
        let redirection = Redirection {
            mode,
            target: target.clone(),
        };
        Ok((&args[..pos], Some(redirection)))
    }

    /// Write `text` to `<cwd>/<target>.txt`, creating the file if needed.
    pub fn write(&self, session: &Session, text: &Bytes) -> ShellResult<PathBuf> {
        let path = session.text_file(&self.target);
        if !path.exists() {
            touch::create_file(&path)?;
        }

        let mut options = OpenOptions::new();
        match self.mode {
            RedirectMode::Overwrite => options.write(true).truncate(true),
            RedirectMode::Append => options.append(true),
        };
        let redirect_err = |source| ShellError::Redirect {
            path: path.clone(),
            source,
        };
        let mut file = options.open(&path).map_err(redirect_err)?;
        file.write_all(text).map_err(redirect_err)?;

        log::debug!("{:?} {} bytes to {}", self.mode, text.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_without_operator_keeps_args() {
        let a = args(&["-a"]);
        let (rest, redirection) = Redirection::split("ls", &a).unwrap();
        assert_eq!(rest, ["-a"]);
        assert!(redirection.is_none());
    }

    #[test]
    fn split_takes_the_trailing_target() {
        let a = args(&["-r", ">>", "out"]);
        let (rest, redirection) = Redirection::split("ls", &a).unwrap();
        assert_eq!(rest, ["-r"]);
        assert_eq!(
            redirection,
            Some(Redirection {
                mode: RedirectMode::Append,
                target: "out".into()
            })
        );
    }

    #[test]
    fn split_rejects_missing_and_extra_targets() {
        assert!(matches!(
            Redirection::split("ls", &args(&[">"])),
            Err(ShellError::MissingArgument { command: "ls" })
        ));
        assert!(matches!(
            Redirection::split("ls", &args(&[">", "a", "b"])),
            Err(ShellError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            Redirection::split("ls", &args(&[">", "dir/out"])),
            Err(ShellError::InvalidRedirectTarget { .. })
        ));
    }

    #[test]
    fn overwrite_then_append() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path()).unwrap();
        let overwrite = Redirection {
            mode: RedirectMode::Overwrite,
            target: "out".into(),
        };
        let append = Redirection {
            mode: RedirectMode::Append,
            target: "out".into(),
        };

        let path = overwrite.write(&session, &Bytes::from_static(b"first")).unwrap();
        assert_eq!(path, session.text_file("out"));
        append.write(&session, &Bytes::from_static(b" second")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first second");

        overwrite.write(&session, &Bytes::from_static(b"third")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "third");
    }
}
