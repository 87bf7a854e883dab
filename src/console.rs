use std::{
    error::Error,
    fmt::Display,
    io::{BufRead, Write},
};

use log::warn;

pub const INVALID_FORMAT_MESSAGE: &str =
    "Invalid format. Try again (use a dot as the decimal separator).";

/// Line based console: writes prompts to `output` and reads answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {

    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `prompt` and reads lines until one parses as a number.
    /// Every rejected line is answered with [INVALID_FORMAT_MESSAGE] and the prompt again.
    /// # Errors
    /// Error is returned when input ends before a valid number is read.
    pub fn read_number(&mut self, prompt: &str) -> Result<f64, Box<dyn Error>> {
        self.write_prompt(prompt)?;

        loop {
            let line = self.read_line()?;
            match parse_number(&line) {
                Some(value) => return Ok(value),
                None => {
                    warn!("rejected numeric input {:?}", line.trim_end());
                    self.write_line(INVALID_FORMAT_MESSAGE)?;
                    self.write_prompt(prompt)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<(), Box<dyn Error>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Bytes that are not valid UTF-8 are replaced, so such a line is rejected
    /// by [parse_number] like any other malformed input.
    fn read_line(&mut self) -> Result<String, Box<dyn Error>> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Err(Box::new(ConsoleError("input ended before a number was read".to_string())));
        }
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Parses number written with `.` as decimal separator. Surrounding whitespace is ignored
/// and `,` may separate thousands in the integer part, e.g. `-1,234.5e2`.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let integer_end = text.find(|c: char| c == '.' || c == 'e' || c == 'E').unwrap_or(text.len());
    let (integer_part, rest) = text.split_at(integer_end);

    let mut normalized = String::with_capacity(text.len());
    let mut has_digit = false;
    for c in integer_part.chars() {
        match c {
            ',' if has_digit => continue,
            ',' => return None,
            _ => {
                has_digit |= c.is_ascii_digit();
                normalized.push(c);
            }
        }
    }
    normalized.push_str(rest);

    normalized.parse::<f64>().ok()
}

#[derive(Debug)]
struct ConsoleError(String);

impl Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Console: {}", self.0)
    }
}

impl Error for ConsoleError {}
