//! Whole-space uniqueness check run before anything is written.
//!
//! Identifiers are concatenations of base names, so a catalog where one base
//! name is a positional prefix of another (or a base name spelled `Empty`)
//! produces two declarations with one name. The generated code would only
//! fail to compile much later; this turns that into a diagnostic.

use std::collections::HashMap;

use crate::catalog::is_identifier;
use crate::config::GeneratorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Phase};
use crate::encoder::SignatureEncoder;
use crate::enumerate::{Enumeration, SignatureKey};

/// Returns the number of keys checked.
pub fn check_key_space(cfg: &GeneratorConfig) -> Result<usize, Diagnostic> {
    let encoder = SignatureEncoder::new(&cfg.catalog);
    let mut identifiers: HashMap<String, SignatureKey> = HashMap::new();
    let mut encodings: HashMap<String, SignatureKey> = HashMap::new();

    for key in Enumeration::new(&cfg.catalog).keys() {
        let e = encoder.encode(&key);
        if !is_identifier(&e.identifier) {
            return Err(Diagnostic::error(
                DiagnosticCode::GSG0901InternalBug,
                Phase::Encode,
                format!("{:?} is not an identifier", e.identifier),
            ));
        }
        if let Some(prev) = identifiers.get(&e.identifier) {
            return Err(Diagnostic::error(
                DiagnosticCode::GSG0200IdentifierCollision,
                Phase::Encode,
                format!(
                    "{} for both {} and {}",
                    e.identifier,
                    describe(prev),
                    describe(&key)
                ),
            ));
        }
        if let Some(prev) = encodings.get(&e.encoding) {
            return Err(Diagnostic::error(
                DiagnosticCode::GSG0201EncodingCollision,
                Phase::Encode,
                format!(
                    "{:?} for both {} and {}",
                    e.encoding,
                    describe(prev),
                    describe(&key)
                ),
            ));
        }
        identifiers.insert(e.identifier, key.clone());
        encodings.insert(e.encoding, key);
    }

    tracing::debug!(keys = identifiers.len(), "key space is collision free");
    Ok(identifiers.len())
}

fn describe(key: &SignatureKey) -> String {
    let args: Vec<&str> = key.args.iter().map(|t| t.as_str()).collect();
    format!("({}) -> {}", args.join(", "), key.ret.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeCatalog;

    fn with_bases(bases: [&str; 5]) -> GeneratorConfig {
        let mut entries = TypeCatalog::default().entries().to_vec();
        for (e, b) in entries.iter_mut().zip(bases) {
            e.base = b.to_string();
        }
        GeneratorConfig {
            catalog: TypeCatalog::new(entries).expect("valid catalog"),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn default_space_is_unique() {
        assert_eq!(check_key_space(&GeneratorConfig::default()), Ok(3905));
    }

    #[test]
    fn empty_base_name_collides_with_arity_zero() {
        let cfg = with_bases(["Empty", "Long", "Double", "String", "Boolean"]);
        let err = check_key_space(&cfg).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::GSG0200IdentifierCollision);
        assert!(err.message.starts_with("getSignatureEmpty2Empty"), "{}", err.message);
        assert!(err.message.contains("() -> Int"));
        assert!(err.message.contains("(Int) -> Int"));
    }

    #[test]
    fn concatenation_prefix_collides() {
        // "A" + "AB" == "AA" + "B"
        let cfg = with_bases(["A", "AB", "AA", "B", "Boolean"]);
        let err = check_key_space(&cfg).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::GSG0200IdentifierCollision);
    }
}
