pub mod calculator;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod format;
pub mod shell;

pub use calculator::{Calculator, CalculatorSnapshot};
pub use config::Config;
pub use domain::{Decimal, DerivedMetrics, ProfitSummary, TradeField, TradeInput, TradeValues};
pub use engine::{recompute_all, FeeEstimationPolicy, FeeMode};
pub use error::AppError;
pub use feedback::{FeedbackForm, FeedbackSubmission};
pub use shell::Shell;
