//! Text and JSON rendering of shell output.

use serde::Serialize;
use serde_json::json;
use std::io::Write;

use crate::calculator::CalculatorSnapshot;
use crate::config::{Config, OutputFormat};
use crate::domain::Decimal;
use crate::error::AppError;
use crate::feedback::{FeedbackForm, FeedbackSubmission, FEEDBACK_OPTIONS};
use crate::format::format_decimal;

const HELP: &str = "\
Commands:
  set <field> [value]   edit a field (purchase-price, purchase-amount, buy-fee,
                        sale-price, sell-fee); no value empties it
  match on|off          estimate the selling fee from the buying fee percentage
  clear                 reset every field
  show                  print the calculator
  feedback open|close|toggle <n>|text <message>|submit|show
  help                  print this help
  quit                  leave";

#[derive(Serialize)]
struct FeedbackView<'a> {
    open: bool,
    options: &'a [&'static str],
    selected: &'a [&'static str],
    text: &'a str,
}

fn value_or(placeholder: &str, value: Option<String>) -> String {
    value.unwrap_or_else(|| placeholder.to_string())
}

fn in_or(placeholder: &str, display: &str) -> String {
    if display.is_empty() {
        placeholder.to_string()
    } else {
        display.to_string()
    }
}

fn percent(value: Decimal) -> String {
    format!("{}%", format_decimal(value))
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn calculator<W: Write>(
    snapshot: &CalculatorSnapshot,
    config: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    if config.output == OutputFormat::Json {
        return write_json(out, snapshot);
    }

    let p = config.placeholder.as_str();
    let input = &snapshot.input;
    let metrics = &snapshot.metrics;

    writeln!(out, "Buying")?;
    writeln!(out, "  price per coin   : {}", in_or(p, &input.purchase_price))?;
    writeln!(out, "  coins bought     : {}", in_or(p, &input.purchase_amount))?;
    writeln!(out, "  purchase fee     : {}", in_or(p, &input.buy_fee))?;
    writeln!(
        out,
        "  fee share        : {}",
        value_or(p, metrics.buy_fee_percentage.map(percent))
    )?;
    writeln!(
        out,
        "  coins after fees : {}",
        value_or(p, metrics.effective_amount.map(format_decimal))
    )?;

    writeln!(out, "Selling")?;
    writeln!(out, "  price per coin   : {}", in_or(p, &input.sale_price))?;
    writeln!(
        out,
        "  price change     : {}",
        value_or(p, metrics.price_increase_percentage.map(percent))
    )?;
    let marker = if snapshot.match_fees { " [estimated]" } else { "" };
    writeln!(out, "  selling fee      : {}{}", in_or(p, &input.sell_fee), marker)?;
    writeln!(
        out,
        "  fee share        : {}",
        value_or(p, metrics.sell_fee_percentage.map(percent))
    )?;

    match metrics.profit {
        Some(summary) => writeln!(
            out,
            "Profit: ${} ({})",
            format_decimal(summary.profit),
            percent(summary.profit_percentage)
        )?,
        None => writeln!(out, "Profit: {}", p)?,
    }
    Ok(())
}

pub fn feedback<W: Write>(
    form: &FeedbackForm,
    config: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    if config.output == OutputFormat::Json {
        let view = FeedbackView {
            open: form.is_open(),
            options: &FEEDBACK_OPTIONS,
            selected: form.selected(),
            text: form.text(),
        };
        return write_json(out, &view);
    }

    if !form.is_open() {
        writeln!(out, "Feedback: closed (feedback open to share your thoughts)")?;
        return Ok(());
    }
    writeln!(out, "Give Feedback")?;
    writeln!(out, "We'd love to hear from you. How are you feeling about our app?")?;
    for (i, option) in FEEDBACK_OPTIONS.iter().enumerate() {
        let mark = if form.selected().contains(option) { "x" } else { " " };
        writeln!(out, "  [{}] {}. {}", mark, i + 1, option)?;
    }
    writeln!(out, "Anything else you'd like to share? {}", form.text())?;
    Ok(())
}

pub fn submission<W: Write>(
    submission: &FeedbackSubmission,
    config: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    if config.output == OutputFormat::Json {
        return write_json(out, &json!({ "submitted": submission }));
    }
    writeln!(
        out,
        "Thanks for the feedback ({} option(s) checked).",
        submission.selected.len()
    )?;
    Ok(())
}

pub fn error<W: Write>(err: &AppError, config: &Config, out: &mut W) -> Result<(), AppError> {
    if config.output == OutputFormat::Json {
        return write_json(out, &json!({ "error": err.to_string() }));
    }
    writeln!(out, "error: {}", err)?;
    Ok(())
}

pub fn help<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{}", HELP)?;
    Ok(())
}
