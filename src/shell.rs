use std::io::{BufRead, Write};

use anyhow::Context;

use crate::command::{Command, CommandLine};
use crate::commands;
use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::session::Session;

/// Whether the read loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The read, dispatch, execute loop.
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt, read and execute lines until `exit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only a broken
    /// console ends it with an error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("session started in {}", self.session.current_dir().display());
        let mut console = Console::new(&mut self.input, &mut self.output);
        console
            .println("CLI \nType 'help' to see commands")
            .context("failed to write banner")?;

        loop {
            console
                .prompt(format_args!("{} > ", self.session.current_dir().display()))
                .context("failed to write prompt")?;
            let Some(line) = console.read_line().context("failed to read command")? else {
                log::info!("end of input");
                break;
            };
            if execute(&mut self.session, &line, &mut console)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single line without prompting.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Flow> {
        let mut console = Console::new(&mut self.input, &mut self.output);
        execute(&mut self.session, line, &mut console)
    }
}

fn execute(session: &mut Session, line: &str, console: &mut Console<'_>) -> anyhow::Result<Flow> {
    let Some(line) = CommandLine::parse(line) else {
        return Ok(Flow::Continue);
    };

    let result = match Command::from_name(line.name()) {
        Some(command) => {
            log::debug!("dispatch {} {:?}", command.name(), line.args());
            dispatch(command, session, line.args(), console)
        }
        None => Err(ShellError::UnknownCommand {
            name: line.name().to_owned(),
        }),
    };

    match result {
        Ok(flow) => Ok(flow),
        Err(e) => {
            log::warn!("{}: {e:?}", line.name());
            console.println(&e).context("failed to report error")?;
            Ok(Flow::Continue)
        }
    }
}

fn dispatch(
    command: Command,
    session: &mut Session,
    args: &[String],
    console: &mut Console<'_>,
) -> ShellResult<Flow> {
    match command {
        Command::Exit => {
            console.println("Exiting CLI...")?;
            return Ok(Flow::Exit);
        }
        Command::Help => commands::help::run(args, console)?,
        Command::Pwd => commands::pwd::run(session, args, console)?,
        Command::Cd => commands::cd::run(session, args, console)?,
        Command::Ls => commands::ls::run(session, args, console)?,
        Command::Mkdir => commands::mkdir::run(session, args, console)?,
        Command::Rmdir => commands::rmdir::run(session, args, console)?,
        Command::Touch => commands::touch::run(session, args, console)?,
        Command::Mv => commands::mv::run(session, args, console)?,
        Command::Rm => commands::rm::run(session, args, console)?,
        Command::Cat => commands::cat::run(session, args, console)?,
    }
    Ok(Flow::Continue)
}
