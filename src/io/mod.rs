//! Console input/output seams
//!
//! The console loop and presenters only talk to these traits, so tests can
//! script a whole session with [`test_utils::MockInput`] and inspect what was
//! printed with [`test_utils::MockOutput`].

use std::io::{self, Write};

/// Source of console commands.
pub trait InputReader {
    /// Show `prompt` and read one line. `UnexpectedEof` once input runs out.
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Sink for console text.
pub trait OutputWriter {
    fn write(&mut self, message: &str);
    fn writeln(&mut self, message: &str);
}

/// stdin/stdout.
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
