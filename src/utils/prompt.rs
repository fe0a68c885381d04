//! Interactive prompts used when the command line leaves a question open.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

/// Print `question` and read one line of input, without the line ending.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no answer given to '{}'", question.trim()),
        ));
    }
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

/// Interpret an integer answer as a flag: any non-zero value is `true`.
pub fn parse_flag(answer: &str) -> Result<bool, ParseIntError> {
    answer.trim().parse::<i64>().map(|value| value != 0)
}
