//! Generator for the overloaded signature-lookup registry and its test suite.
//!
//! Both artifacts are produced from one [`enumerate::Enumeration`] of the key
//! space and one [`encoder::SignatureEncoder`], so every registry function has
//! exactly one helper stub and one assertion, named identically.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod encoder;
pub mod enumerate;
pub mod fragments;
pub mod output;
pub mod registry_emit;
pub mod test_emit;
pub mod verify;
mod util;

use anyhow::Result;

pub use catalog::{TypeCatalog, TypeEntry, TypeTag};
pub use config::GeneratorConfig;
pub use diagnostics::{Diagnostic, DiagnosticCode};
pub use encoder::{EncodedSignature, SignatureEncoder};
pub use enumerate::{Bucket, Enumeration, SignatureKey};
pub use fragments::Fragments;
pub use registry_emit::{emit_registry, RegistryArtifact};
pub use test_emit::{emit_tests, TestArtifact};
pub use util::sha256_hex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub keys: usize,
    pub registry: RegistryArtifact,
    pub tests: TestArtifact,
}

/// Checks the key space for collisions, then emits both artifacts in memory.
pub fn generate(cfg: &GeneratorConfig) -> Result<GeneratedArtifacts> {
    let keys = verify::check_key_space(cfg)?;
    let registry = emit_registry(cfg);
    let tests = emit_tests(cfg);

    if registry.functions != keys || tests.helpers != keys || tests.assertions != keys {
        return Err(Diagnostic::error(
            DiagnosticCode::GSG0901InternalBug,
            diagnostics::Phase::Emit,
            format!(
                "keys={keys} functions={} helpers={} assertions={}",
                registry.functions, tests.helpers, tests.assertions
            ),
        )
        .into());
    }

    tracing::info!(keys, cases = tests.cases, "generated registry and tests");
    Ok(GeneratedArtifacts {
        keys,
        registry,
        tests,
    })
}
