/// The commands the shell recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Pwd,
    Cd,
    Ls,
    Mkdir,
    Rmdir,
    Touch,
    Mv,
    Rm,
    Cat,
}

impl Command {
    /// Look up a command by its first token. `exit` and `help` match
    /// case-insensitively, everything else must be lowercase.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("exit") {
            return Some(Self::Exit);
        }
        if name.eq_ignore_ascii_case("help") {
            return Some(Self::Help);
        }
        let command = match name {
            "pwd" => Self::Pwd,
            "cd" => Self::Cd,
            "ls" => Self::Ls,
            "mkdir" => Self::Mkdir,
            "rmdir" => Self::Rmdir,
            "touch" => Self::Touch,
            "mv" => Self::Mv,
            "rm" => Self::Rm,
            "cat" => Self::Cat,
            _ => return None,
        };
        Some(command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Pwd => "pwd",
            Self::Cd => "cd",
            Self::Ls => "ls",
            Self::Mkdir => "mkdir",
            Self::Rmdir => "rmdir",
            Self::Touch => "touch",
            Self::Mv => "mv",
            Self::Rm => "rm",
            Self::Cat => "cat",
        }
    }
}

/// One line of input split on whitespace. No quoting or escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn name(&self) -> &str {
        &self.tokens[0]
    }

    /// Everything after the command word.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_and_help_ignore_case() {
        assert_eq!(Command::from_name("EXIT"), Some(Command::Exit));
        assert_eq!(Command::from_name("Help"), Some(Command::Help));
        assert_eq!(Command::from_name("LS"), None);
    }

    #[test]
    fn every_name_round_trips() {
        for command in [
            Command::Help,
            Command::Exit,
            Command::Pwd,
            Command::Cd,
            Command::Ls,
            Command::Mkdir,
            Command::Rmdir,
            Command::Touch,
            Command::Mv,
            Command::Rm,
            Command::Cat,
        ] {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn parse_splits_on_any_whitespace() {
        let line = CommandLine::parse("  mv\ta   b \n").unwrap();
        assert_eq!(line.name(), "mv");
        assert_eq!(line.args(), ["a", "b"]);
    }

    #[test]
    fn blank_line_is_none() {
        assert!(CommandLine::parse("   ").is_none());
    }
}
