use std::fs;

use bytes::{BufMut, Bytes, BytesMut};

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::redirect::Redirection;
use crate::session::Session;

const NAME: &str = "cat";

/// Line that ends interactive input.
pub const SENTINEL: &str = "stop";

/// `cat`           echo typed lines until `stop`
/// `cat name`      print `<cwd>/name.txt`
/// `cat > name`    collect typed lines into `name.txt` (`>>` appends)
pub fn run(session: &Session, args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    let (args, redirection) = Redirection::split(NAME, args)?;
    match (args, redirection) {
        ([], None) => echo(console),
        ([], Some(redirection)) => {
            let text = collect(console)?;
            redirection.write(session, &text)?;
            Ok(())
        }
        ([name], None) => print_file(session, name, console),
        ([_, extra, ..], _) | ([extra, ..], Some(_)) => Err(ShellError::UnexpectedArgument {
            command: NAME,
            argument: extra.clone(),
        }),
    }
}

fn echo(console: &mut Console<'_>) -> ShellResult<()> {
    console.println(format_args!("Enter text (type '{SENTINEL}' to finish):"))?;
    while let Some(line) = console.read_line()? {
        if line == SENTINEL {
            break;
        }
        console.println(line)?;
    }
    Ok(())
}

/// Read lines up to the sentinel (or end of input), each kept with a newline.
fn collect(console: &mut Console<'_>) -> ShellResult<Bytes> {
    console.println(format_args!("Enter text (type '{SENTINEL}' to finish):"))?;
    let mut text = BytesMut::new();
    while let Some(line) = console.read_line()? {
        if line == SENTINEL {
            break;
        }
        text.put_slice(line.as_bytes());
        text.put_u8(b'\n');
    }
    Ok(text.freeze())
}

fn print_file(session: &Session, name: &str, console: &mut Console<'_>) -> ShellResult<()> {
    let path = session.text_file(name);
    let contents = fs::read(&path).map_err(|source| {
        log::warn!("cat {}: {source}", path.display());
        ShellError::FileUnreadable { source }
    })?;
    for line in String::from_utf8_lossy(&contents).lines() {
        console.println(line)?;
    }
    Ok(())
}
