//! Interactive prompt loops for movie fields.
//!
//! Each function prompts on the output sink and reads lines from the input
//! source until the field rule is satisfied. Required fields re-prompt on
//! bad input; optional fields get a single attempt and soft-fail to absent.
//! `Ok(None)` always means the input source reached end of input.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use cinelog_catalog::fields;

/// Read one line, stripped of the trailing newline. `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompt for a menu choice.
pub fn read_menu_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    write!(output, "Choose an option: ")?;
    output.flush()?;
    read_line(input)
}

/// Prompt for a required text field, re-prompting until it is non-blank.
pub fn read_required_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "{prompt}: ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match fields::non_blank(&line) {
            Some(value) => return Ok(Some(value)),
            None => writeln!(output, "{prompt} is required.")?,
        }
    }
}

/// Prompt for a duration, re-prompting until it parses as a positive integer.
pub fn read_duration<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<u32>> {
    loop {
        write!(output, "{prompt} (in minutes): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match fields::parse_duration(&line) {
            Some(minutes) => return Ok(Some(minutes)),
            None => writeln!(output, "Duration must be a whole number above zero.")?,
        }
    }
}

/// Prompt for a record id, re-prompting until it parses as an integer.
pub fn read_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    loop {
        write!(output, "{prompt}: ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => writeln!(output, "Id must be a whole number.")?,
        }
    }
}

/// Prompt for the optional release date. One attempt; anything that doesn't
/// match the exact `ddmmyyyy` pattern means the field is absent.
pub fn read_optional_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<Option<NaiveDate>>> {
    write!(output, "{prompt} (ddmmyyyy, optional): ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    Ok(Some(fields::parse_release_date(&line)))
}

/// Prompt for an optional text field. One attempt; blank means absent.
pub fn read_optional_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<Option<String>>> {
    write!(output, "{prompt} (optional): ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    Ok(Some(fields::normalize_optional(&line)))
}
