//! Interactive prompts for values not given on the command line.

use crate::ebay::conditions::Condition;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const ITEM_PROMPT: &str = "Enter the item name: ";
pub const CONDITION_PROMPT: &str = "Enter the condition type (all/new/opened/refurbished/used): ";

/// Writes `prompt` and reads one line, without the line ending.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks for the item name.
pub fn ask_item<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    ask(input, output, ITEM_PROMPT)
}

/// Asks for the condition; the answer is matched case-insensitively.
pub fn ask_condition<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Condition> {
    let answer = ask(input, output, CONDITION_PROMPT)?;
    Ok(answer.parse::<Condition>()?)
}
