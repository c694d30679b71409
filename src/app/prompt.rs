use std::io::{BufRead, Write};

use crate::error::Result;

/// Line-oriented console I/O over any reader/writer pair
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one trimmed line. `None` at end of input.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until the answer parses as `T`, printing `retry` after each
    /// failed attempt. `None` at end of input.
    pub fn ask_parsed<T: std::str::FromStr>(&mut self, label: &str, retry: &str) -> Result<Option<T>> {
        loop {
            match self.ask(label)? {
                None => return Ok(None),
                Some(answer) => match answer.parse() {
                    Ok(value) => return Ok(Some(value)),
                    Err(_) => self.say(retry)?,
                },
            }
        }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
