pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Routes command results to human-readable text or machine-readable JSON,
/// selected once at startup by the global `--json` flag.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            mode: if json { OutputMode::Json } else { OutputMode::Text },
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Emits one result: the text line in text mode, the serialized value in
    /// JSON mode. Commands with richer text output print it themselves and
    /// only call this in JSON mode.
    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::line(text_line),
            OutputMode::Json => json::pretty(json_value),
        }
    }
}
