//! Output rendering for the three output modes.

use nestkv_executor::{Error, Output};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Redis-style human output: `OK`, `"value"`, `(nil)`, `(integer) n`.
    Human,
    /// The serde JSON framing of the `Output` enum.
    Json,
    /// Bare values, empty for unit results. Script-friendly.
    Raw,
}

/// Render a successful output. An empty string means "print nothing".
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            serde_json::to_string(output).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
        }
        OutputMode::Human => match output {
            Output::Unit => "OK".to_string(),
            Output::Maybe(Some(value)) => format!("\"{}\"", value),
            Output::Maybe(None) => "(nil)".to_string(),
            Output::Count(n) => format!("(integer) {}", n),
        },
        OutputMode::Raw => match output {
            Output::Unit => String::new(),
            Output::Maybe(Some(value)) => value.clone(),
            Output::Maybe(None) => String::new(),
            Output::Count(n) => n.to_string(),
        },
    }
}

/// Render an error for stderr.
pub fn format_error(error: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format!(r#"{{"error":"{}"}}"#, error),
        OutputMode::Human | OutputMode::Raw => format!("(error) {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_mode() {
        assert_eq!(format_output(&Output::Unit, OutputMode::Human), "OK");
        assert_eq!(
            format_output(&Output::Maybe(Some("1".into())), OutputMode::Human),
            "\"1\""
        );
        assert_eq!(
            format_output(&Output::Maybe(None), OutputMode::Human),
            "(nil)"
        );
        assert_eq!(
            format_output(&Output::Count(2), OutputMode::Human),
            "(integer) 2"
        );
    }

    #[test]
    fn test_raw_mode_prints_bare_values() {
        assert_eq!(format_output(&Output::Unit, OutputMode::Raw), "");
        assert_eq!(
            format_output(&Output::Maybe(Some("hello world".into())), OutputMode::Raw),
            "hello world"
        );
        assert_eq!(format_output(&Output::Maybe(None), OutputMode::Raw), "");
        assert_eq!(format_output(&Output::Count(0), OutputMode::Raw), "0");
    }

    #[test]
    fn test_json_mode_uses_output_framing() {
        assert_eq!(
            format_output(&Output::Count(3), OutputMode::Json),
            r#"{"result":"count","data":3}"#
        );
    }

    #[test]
    fn test_error_rendering() {
        assert_eq!(
            format_error(&Error::NoActiveTransaction, OutputMode::Human),
            "(error) no active transaction"
        );
        assert_eq!(
            format_error(&Error::NoActiveTransaction, OutputMode::Json),
            r#"{"error":"no active transaction"}"#
        );
    }
}
