//! Interactive input
//!
//! All questions asked of the user go through the [`Prompter`] trait so that the
//! operations can be driven from a terminal, from command-line arguments, or
//! from a scripted list of answers in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::errors::{Result, generic_error, invalid_number_error};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Shows the question and returns the answer with surrounding whitespace trimmed
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from standard input
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{question} ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(generic_error(&format!(
                "No answer given for: {question}"
            )));
        }
        Ok(input.trim().to_string())
    }
}

/// Replays a fixed list of answers, in order
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| generic_error(&format!("No answer given for: {question}")))
    }
}

/// Parses a whole number typed by the user
///
/// # Errors
/// Returns an error naming `field` when the input is not a non-negative integer
pub fn parse_number(input: &str, field: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| invalid_number_error(e, field, trimmed))
}

/// Returns `value` if given, otherwise asks for a whole number
pub fn number_or_ask(
    prompter: &mut dyn Prompter,
    value: Option<u32>,
    question: &str,
    field: &str,
) -> Result<u32> {
    match value {
        Some(number) => Ok(number),
        None => {
            let answer = prompter.ask(question)?;
            parse_number(&answer, field)
        }
    }
}

/// Returns `value` if given, otherwise asks for free text
pub fn text_or_ask(
    prompter: &mut dyn Prompter,
    value: Option<String>,
    question: &str,
) -> Result<String> {
    match value {
        Some(text) => Ok(text),
        None => prompter.ask(question),
    }
}
