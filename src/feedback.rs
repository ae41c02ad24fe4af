//! Floating feedback form: a fixed checklist plus free text.
//!
//! Submitting only logs the response; there is no transport.

use serde::Serialize;
use tracing::info;

use crate::error::AppError;

pub const FEEDBACK_OPTIONS: [&str; 5] = [
    "I can't find something.",
    "I can't figure out how to do something.",
    "Recommend a new feature.",
    "I love it!",
    "Something else.",
];

/// What a submit hands back: the checked options, in the order they were
/// checked, and the free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub selected: Vec<&'static str>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    open: bool,
    selected: Vec<&'static str>,
    text: String,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without submitting. Checked options and text are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Check or uncheck the option at `index` (0-based into FEEDBACK_OPTIONS).
    pub fn toggle_option(&mut self, index: usize) -> Result<(), AppError> {
        self.ensure_open()?;
        let option = *FEEDBACK_OPTIONS
            .get(index)
            .ok_or(AppError::UnknownFeedbackOption(index))?;
        if let Some(pos) = self.selected.iter().position(|o| *o == option) {
            self.selected.remove(pos);
        } else {
            self.selected.push(option);
        }
        Ok(())
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        self.ensure_open()?;
        self.text = text.to_string();
        Ok(())
    }

    /// Log the response, reset the form and close it.
    pub fn submit(&mut self) -> Result<FeedbackSubmission, AppError> {
        self.ensure_open()?;
        let submission = FeedbackSubmission {
            selected: std::mem::take(&mut self.selected),
            text: std::mem::take(&mut self.text),
        };
        self.open = false;
        info!(
            selected = ?submission.selected,
            text = %submission.text,
            "Feedback submitted"
        );
        Ok(submission)
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.open {
            Ok(())
        } else {
            Err(AppError::FeedbackClosed)
        }
    }
}
