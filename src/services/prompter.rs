//! Line-oriented prompt engine.
//!
//! Generic over input/output streams so the integration tests can drive it
//! with piped stdin and the unit tests with in-memory buffers. Every prompt
//! blocks until the operator answers; invalid input is recovered by
//! re-prompting, never surfaced as an error.

use std::io::{BufRead, Write};

use console::style;

use crate::domain::AppError;
use crate::domain::question::{Question, match_choice, normalize_answer};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::UnexpectedEof);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn show_prompt(&mut self) -> Result<(), AppError> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask an open question, re-prompting until the answer is non-empty.
    /// Returns the trimmed raw answer.
    pub fn ask(&mut self, question: &str) -> Result<String, AppError> {
        loop {
            writeln!(self.output, "\n{}?", question)?;
            self.show_prompt()?;
            let answer = self.read_line()?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "\nYou need to provide an answer.")?;
        }
    }

    /// Ask a constrained question. Empty input takes the first answer (the
    /// echo shows the operator what was chosen for them); anything that does
    /// not match re-displays the choice list. Returns the matched answer,
    /// lowercased.
    pub fn ask_with_answers(&mut self, question: &Question<'_>) -> Result<String, AppError> {
        write!(self.output, "\n{}? [", question.text)?;
        self.write_answer_list(question)?;
        loop {
            self.show_prompt()?;
            let mut answer = normalize_answer(&self.read_line()?);
            if answer.is_empty() {
                answer = question.answers[0].to_lowercase();
                writeln!(self.output, "{}", style(&answer).yellow())?;
            }
            if let Some(matched) = match_choice(&answer, question.answers) {
                return Ok(matched.to_lowercase());
            }
            write!(self.output, "\nPossible answers are [")?;
            self.write_answer_list(question)?;
        }
    }

    fn write_answer_list(&mut self, question: &Question<'_>) -> Result<(), AppError> {
        for (i, answer) in question.answers.iter().enumerate() {
            if i == 0 {
                write!(self.output, " {}", style(*answer).underlined())?;
            } else {
                write!(self.output, " {}", answer)?;
            }
            if i != question.answers.len() - 1 {
                write!(self.output, " /")?;
            }
        }
        writeln!(self.output, " ]")?;
        Ok(())
    }
}
