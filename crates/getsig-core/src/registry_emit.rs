//! Emits the registry object: one overloaded lookup per signature key.

use crate::config::GeneratorConfig;
use crate::encoder::SignatureEncoder;
use crate::enumerate::{Enumeration, SignatureKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryArtifact {
    pub source: String,
    pub functions: usize,
}

pub fn emit_registry(cfg: &GeneratorConfig) -> RegistryArtifact {
    let frags = &cfg.fragments;
    let encoder = SignatureEncoder::new(&cfg.catalog);

    let mut out = frags.file_header(&frags.registry_imports);
    out.push_str(&format!("object {} {{\n\n", frags.registry_object));
    out.push_str(&frags.registry_predefined);
    out.push('\n');

    let mut functions = 0usize;
    for key in Enumeration::new(&cfg.catalog).keys() {
        out.push_str(&registry_line(&encoder, &frags.lookup_fn, &key));
        out.push('\n');
        functions += 1;
    }
    out.push_str("}\n");

    tracing::debug!(functions, bytes = out.len(), "emitted registry");
    RegistryArtifact {
        source: out,
        functions,
    }
}

/// `  def getSignatureIntLong2String(f: (iFun, lFun) => sFun): String = getSignature(List(IntFun, LongFun), StringFun)`
pub fn registry_line(
    encoder: &SignatureEncoder<'_>,
    lookup_fn: &str,
    key: &SignatureKey,
) -> String {
    let cat = encoder.catalog();
    let aliases: Vec<&str> = key.args.iter().map(|t| cat.alias(*t)).collect();
    let fun_types: Vec<&str> = key.args.iter().map(|t| cat.function_type_name(*t)).collect();
    format!(
        "  def {}(f: ({}) => {}): String = {}(List({}), {})",
        encoder.identifier(key),
        aliases.join(", "),
        cat.alias(key.ret),
        lookup_fn,
        fun_types.join(", "),
        cat.function_type_name(key.ret)
    )
}
