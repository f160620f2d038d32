use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Config,
    Catalog,
    Encode,
    Emit,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticCode {
    GSG0001ConfigParse,
    GSG0002SchemaMismatch,
    GSG0100MissingTag,
    GSG0101DuplicateTag,
    GSG0110InvalidName,
    GSG0111DuplicateBaseName,
    GSG0200IdentifierCollision,
    GSG0201EncodingCollision,
    GSG0901InternalBug,
}

impl DiagnosticCode {
    pub fn code_str(self) -> &'static str {
        match self {
            DiagnosticCode::GSG0001ConfigParse => "GSG0001",
            DiagnosticCode::GSG0002SchemaMismatch => "GSG0002",
            DiagnosticCode::GSG0100MissingTag => "GSG0100",
            DiagnosticCode::GSG0101DuplicateTag => "GSG0101",
            DiagnosticCode::GSG0110InvalidName => "GSG0110",
            DiagnosticCode::GSG0111DuplicateBaseName => "GSG0111",
            DiagnosticCode::GSG0200IdentifierCollision => "GSG0200",
            DiagnosticCode::GSG0201EncodingCollision => "GSG0201",
            DiagnosticCode::GSG0901InternalBug => "GSG0901",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            DiagnosticCode::GSG0001ConfigParse => "failed to parse generator config",
            DiagnosticCode::GSG0002SchemaMismatch => "config schema_version mismatch",
            DiagnosticCode::GSG0100MissingTag => "type catalog is missing a tag",
            DiagnosticCode::GSG0101DuplicateTag => "type catalog lists a tag twice",
            DiagnosticCode::GSG0110InvalidName => "type name is not a valid identifier",
            DiagnosticCode::GSG0111DuplicateBaseName => "two tags share a base name",
            DiagnosticCode::GSG0200IdentifierCollision => "two signatures map to one identifier",
            DiagnosticCode::GSG0201EncodingCollision => "two signatures map to one encoding",
            DiagnosticCode::GSG0901InternalBug => "internal getsig bug",
        }
    }

    pub fn default_help(self) -> Option<&'static str> {
        match self {
            DiagnosticCode::GSG0100MissingTag | DiagnosticCode::GSG0101DuplicateTag => Some(
                "List each of Int, Long, Double, String and Boolean exactly once under \"types\".",
            ),
            DiagnosticCode::GSG0200IdentifierCollision => Some(
                "A base name is a concatenation prefix of another (or equals \"Empty\"); rename it.",
            ),
            DiagnosticCode::GSG0901InternalBug => {
                Some("This is a bug in getsig. Please report it with the config file.")
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub phase: Phase,
    pub severity: Severity,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, phase: Phase, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            phase,
            severity: Severity::Error,
            message: message.into(),
            help: code.default_help().map(|s| s.to_string()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {:?}: {}: {}",
            self.code.code_str(),
            self.phase,
            self.severity,
            self.code.default_message(),
            self.message
        )?;
        if let Some(help) = &self.help {
            write!(f, "\n  help: {help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_code_and_help() {
        let d = Diagnostic::error(
            DiagnosticCode::GSG0200IdentifierCollision,
            Phase::Encode,
            "getSignatureEmpty2Int",
        );
        let s = d.to_string();
        assert!(s.starts_with("GSG0200 Encode Error:"), "{s}");
        assert!(s.contains("getSignatureEmpty2Int"));
        assert!(s.contains("\n  help: "));
    }

    #[test]
    fn diagnostic_survives_anyhow_downcast() {
        let err: anyhow::Error = Diagnostic::error(
            DiagnosticCode::GSG0100MissingTag,
            Phase::Catalog,
            "Boolean",
        )
        .into();
        let d = err.downcast_ref::<Diagnostic>().expect("diagnostic");
        assert_eq!(d.code, DiagnosticCode::GSG0100MissingTag);
        assert_eq!(d.help.as_deref(), DiagnosticCode::GSG0100MissingTag.default_help());
    }
}
