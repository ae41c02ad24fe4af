//! Line-oriented terminal front end for the calculator and feedback form.

pub mod command;
pub mod render;

pub use command::{Command, FeedbackCommand};

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::calculator::Calculator;
use crate::config::Config;
use crate::error::AppError;
use crate::feedback::FeedbackForm;

/// Whether the shell should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    config: Config,
    calculator: Calculator,
    feedback: FeedbackForm,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            calculator: Calculator::new(),
            feedback: FeedbackForm::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn feedback(&self) -> &FeedbackForm {
        &self.feedback
    }

    /// Apply one command and write what it displays.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, AppError> {
        match command {
            Command::Set(field, value) => {
                self.calculator.set_field(field, &value)?;
                self.show(out)?;
            }
            Command::Match(enabled) => {
                self.calculator.set_match_fees(enabled);
                self.show(out)?;
            }
            Command::Clear => {
                self.calculator.clear();
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Feedback(cmd) => self.execute_feedback(cmd, out)?,
            Command::Help => render::help(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn execute_feedback<W: Write>(
        &mut self,
        cmd: FeedbackCommand,
        out: &mut W,
    ) -> Result<(), AppError> {
        match cmd {
            FeedbackCommand::Open => self.feedback.open(),
            FeedbackCommand::Close => self.feedback.close(),
            FeedbackCommand::Toggle(index) => self.feedback.toggle_option(index)?,
            FeedbackCommand::Text(text) => self.feedback.set_text(&text)?,
            FeedbackCommand::Submit => {
                let submission = self.feedback.submit()?;
                return render::submission(&submission, &self.config, out);
            }
            FeedbackCommand::Show => {}
        }
        render::feedback(&self.feedback, &self.config, out)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        render::calculator(&self.calculator.snapshot(), &self.config, out)
    }

    /// Read commands from an interactive session until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), AppError> {
        let prompt = self.config.prompts(false);
        self.run_lines(input, out, prompt)
    }

    /// Run the commands in a script file.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<(), AppError> {
        info!(path = %path.display(), "Running script");
        let file = File::open(path)?;
        let prompt = self.config.prompts(true);
        self.run_lines(BufReader::new(file), out, prompt)
    }

    fn run_lines<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        prompt: bool,
    ) -> Result<(), AppError> {
        let mut line = String::new();
        loop {
            if prompt {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let result = match trimmed.parse::<Command>() {
                Ok(command) => self.execute(command, out),
                Err(e) => Err(e),
            };
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_recoverable() => {
                    debug!(line = %trimmed, error = %e, "Command failed");
                    render::error(&e, &self.config, out)?;
                }
                Err(e) => return Err(e),
            }
        }
        out.flush()?;
        Ok(())
    }
}
