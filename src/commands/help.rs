use crate::console::Console;
use crate::error::ShellResult;

const HELP: &str = "\
Available Commands:
 - pwd, cd, ls, ls -a, ls -r, mkdir, rmdir, touch, mv, rm, cat
 - >, >> (redirect ls and cat output to <name>.txt)
 - exit: To terminate the CLI
 - help: Displays this help message";

pub fn run(_args: &[String], console: &mut Console<'_>) -> ShellResult<()> {
    console.println(HELP)?;
    Ok(())
}
