use std::fs::{self, DirEntry};

use bytes::{BufMut, Bytes, BytesMut};

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::redirect::Redirection;
use crate::session::Session;

const NAME: &str = "ls";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Skip hidden entries.
    Visible,
    /// `-a`: include hidden entries.
    All,
    /// `-r`: skip hidden entries, reverse order.
    Reversed,
}

impl ListMode {
    fn from_flag(flag: &str) -> ShellResult<Self> {
        match flag {
            "-a" => Ok(Self::All),
            "-r" => Ok(Self::Reversed),
            _ => Err(ShellError::InvalidOption {
                command: NAME,
                option: flag.to_owned(),
            }),
        }
    }
}

/// `ls [-a|-r] [> name | >> name]`
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    let (args, redirection) = Redirection::split(NAME, args)?;
    let mode = match args {
        [] => ListMode::Visible,
        [flag] => ListMode::from_flag(flag)?,
        [_, extra, ..] => {
            return Err(ShellError::UnexpectedArgument {
                command: NAME,
                argument: extra.clone(),
            });
        }
    };

    let listing = render(session, mode);
    match redirection {
        Some(redirection) => {
            redirection.write(session, &listing)?;
        }
        None => console.println(String::from_utf8_lossy(&listing))?,
    }
    Ok(())
}

/// Render the current directory as `1- /dir/, 2-file, `.
///
/// An unreadable directory renders as an empty listing.
pub fn render(session: &Session, mode: ListMode) -> Bytes {
    let mut entries = match fs::read_dir(session.current_dir()) {
        Ok(dir) => dir.filter_map(Result::ok).collect::<Vec<_>>(),
        Err(e) => {
            log::warn!("cannot list {}: {e}", session.current_dir().display());
            Vec::new()
        }
    };
    entries.sort_by_cached_key(sort_key);
    if mode != ListMode::All {
        entries.retain(|entry| !is_hidden(entry));
    }
    if mode == ListMode::Reversed {
        entries.reverse();
    }

    let mut out = BytesMut::new();
    for (i, entry) in entries.iter().enumerate() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let n = i + 1;
        let segment = if entry.path().is_dir() {
            format!("{n}- /{name}/, ")
        } else {
            format!("{n}-{name}, ")
        };
        out.put_slice(segment.as_bytes());
    }
    out.freeze()
}

/// Name order, case-insensitive, ignoring the dot that hides a file.
fn sort_key(entry: &DirEntry) -> (String, std::ffi::OsString) {
    let name = entry.file_name();
    let key = name.to_string_lossy().trim_start_matches('.').to_lowercase();
    (key, name)
}

fn is_hidden(entry: &DirEntry) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
        if let Ok(meta) = entry.metadata() {
            if meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0 {
                return true;
            }
        }
    }
    entry.file_name().to_string_lossy().starts_with('.')
}
