use crate::console::Console;
use crate::error::ShellResult;
use crate::session::Session;

pub fn run(session: &Session, _args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    console.println(session.current_dir().display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::capture;

    #[test]
    fn prints_the_absolute_path() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path()).unwrap();
        let (result, out) = capture("", |console| run(&session, &[], console));
        result.unwrap();
        assert_eq!(out, format!("{}\n", tmp.path().canonicalize().unwrap().display()));
    }
}
