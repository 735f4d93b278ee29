use std::io::{self, BufRead, Write};

/// The input and output streams a command may use.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn println(&mut self, msg: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    /// Write without a newline and flush, for prompts.
    pub fn prompt(&mut self, msg: impl std::fmt::Display) -> io::Result<()> {
        write!(self.output, "{msg}")?;
        self.output.flush()
    }
}
