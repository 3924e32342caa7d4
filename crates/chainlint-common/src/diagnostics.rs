use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const REPEATED_PROPERTY_CHAIN: u32 = 5801;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const REPEATED_PROPERTY_CHAIN: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::REPEATED_PROPERTY_CHAIN,
        category: DiagnosticCategory::Warning,
        message: "{0} used {1} time(s) in the same scope; define a variable instead",
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn new(
        category: DiagnosticCategory,
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }

    pub fn warning(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self::new(DiagnosticCategory::Warning, file, start, length, message, code)
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_positional_placeholders() {
        assert_eq!(
            format_message("{0} used {1} time(s)", &["foo.bar", "2"]),
            "foo.bar used 2 time(s)"
        );
    }

    #[test]
    fn leaves_unmatched_placeholders_alone() {
        assert_eq!(format_message("{0} and {1}", &["only"]), "only and {1}");
    }

    #[test]
    fn repeated_chain_message_renders_spec_text() {
        let rendered = format_message(
            diagnostic_messages::REPEATED_PROPERTY_CHAIN.message,
            &["foo.bar.baz", "2"],
        );
        assert_eq!(
            rendered,
            "foo.bar.baz used 2 time(s) in the same scope; define a variable instead"
        );
    }

    #[test]
    fn warning_constructor_sets_category_and_span() {
        let diag = Diagnostic::warning("main.js", 10, 7, "msg", 5801);
        assert_eq!(diag.category, DiagnosticCategory::Warning);
        assert_eq!(diag.code, 5801);
        assert_eq!(diag.file, "main.js");
        assert_eq!(diag.start, 10);
        assert_eq!(diag.length, 7);
    }
}
