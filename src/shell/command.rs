//! Parsing of shell command lines.

use std::str::FromStr;

use crate::domain::TradeField;
use crate::error::AppError;
use crate::feedback::FEEDBACK_OPTIONS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `set <field> [value]`; a missing value empties the field.
    Set(TradeField, String),
    Match(bool),
    Clear,
    Show,
    Feedback(FeedbackCommand),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackCommand {
    Open,
    Close,
    /// 0-based index into FEEDBACK_OPTIONS.
    Toggle(usize),
    Text(String),
    Submit,
    Show,
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

fn parse_switch(arg: &str) -> Result<bool, AppError> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(AppError::InvalidArgument(
            "match".to_string(),
            format!("expected on or off, got {:?}", other),
        )),
    }
}

impl FromStr for FeedbackCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sub, rest) = split_word(s);
        match sub {
            "open" => Ok(FeedbackCommand::Open),
            "close" | "cancel" => Ok(FeedbackCommand::Close),
            "submit" => Ok(FeedbackCommand::Submit),
            "show" | "" => Ok(FeedbackCommand::Show),
            "text" => Ok(FeedbackCommand::Text(rest.to_string())),
            "toggle" => {
                let number = rest.parse::<usize>().map_err(|_| {
                    AppError::InvalidArgument(
                        "feedback toggle".to_string(),
                        format!("expected an option number, got {:?}", rest),
                    )
                })?;
                if number == 0 || number > FEEDBACK_OPTIONS.len() {
                    return Err(AppError::UnknownFeedbackOption(number));
                }
                Ok(FeedbackCommand::Toggle(number - 1))
            }
            other => Err(AppError::UnknownCommand(format!("feedback {}", other))),
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, rest) = split_word(s);
        match head.to_ascii_lowercase().as_str() {
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(AppError::InvalidArgument(
                        "set".to_string(),
                        "expected a field name".to_string(),
                    ));
                }
                Ok(Command::Set(field.parse()?, value.to_string()))
            }
            "match" => Ok(Command::Match(parse_switch(rest)?)),
            "clear" => Ok(Command::Clear),
            "show" => Ok(Command::Show),
            "feedback" => Ok(Command::Feedback(rest.parse()?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(AppError::UnknownCommand(head.to_string())),
        }
    }
}
