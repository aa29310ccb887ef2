//! Rendering evaluation outcomes for the `eval` subcommand.

use serde::Serialize;

use crate::calculator::{CalcResult, ERROR_SENTINEL};

/// Output format for evaluation results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The display text only, as the calculator would show it.
    #[default]
    Pretty,
    /// One JSON object per expression.
    Json,
}

/// A serializable evaluation outcome.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvalReport {
    /// The evaluated expression.
    pub expression: String,
    /// Formatted result, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Error description, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvalReport {
    pub fn from_calc_result(result: &CalcResult) -> Self {
        match result {
            CalcResult::Success {
                expression,
                display_result,
                ..
            } => Self {
                expression: expression.clone(),
                result: Some(display_result.clone()),
                error: None,
            },
            CalcResult::Error { expression, error } => Self {
                expression: expression.clone(),
                result: None,
                error: Some(error.to_string()),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Text the calculator display would show for this outcome.
    pub fn display_text(&self) -> &str {
        self.result.as_deref().unwrap_or(ERROR_SENTINEL)
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Pretty => self.display_text().to_string(),
            OutputFormat::Json => serde_json::to_string(self)?,
        })
    }
}
