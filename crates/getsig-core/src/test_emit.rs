//! Emits the test suite that checks every registry function against its
//! literal encoding.
//!
//! Layout per bucket: the helper stubs of every key, then one test case with
//! one `result &= ...` assertion per key and a closing `assert(result)`.

use crate::catalog::TypeTag;
use crate::config::GeneratorConfig;
use crate::encoder::SignatureEncoder;
use crate::enumerate::{Bucket, Enumeration, SignatureKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestArtifact {
    pub source: String,
    pub helpers: usize,
    pub assertions: usize,
    pub cases: usize,
}

pub fn emit_tests(cfg: &GeneratorConfig) -> TestArtifact {
    let frags = &cfg.fragments;
    let cat = &cfg.catalog;
    let encoder = SignatureEncoder::new(cat);

    let mut out = frags.file_header(&frags.test_imports);
    out.push_str(&frags.test_class_open);
    out.push_str("\n\n");
    for tag in cat.tags() {
        out.push_str(&dummy_provider(cfg, tag));
        out.push('\n');
    }
    out.push('\n');

    let mut helpers = 0usize;
    let mut assertions = 0usize;
    let mut cases = 0usize;
    for bucket in Enumeration::new(cat).buckets() {
        let keys: Vec<SignatureKey> = bucket.keys(cat).collect();
        for key in &keys {
            out.push_str(&helper_stub(&encoder, key));
            out.push('\n');
            helpers += 1;
        }

        out.push_str(&format!("  test(\"{}\") {{\n", case_name(cfg, bucket)));
        out.push_str("    var result = true\n");
        for key in &keys {
            out.push_str(&assertion_line(&encoder, &frags.registry_object, key));
            out.push('\n');
            assertions += 1;
        }
        out.push_str("    assert(result)\n");
        out.push_str("  }\n");
        cases += 1;
    }
    out.push_str("}\n");

    tracing::debug!(helpers, assertions, cases, bytes = out.len(), "emitted tests");
    TestArtifact {
        source: out,
        helpers,
        assertions,
        cases,
    }
}

fn dummy_provider(cfg: &GeneratorConfig, tag: TypeTag) -> String {
    let alias = cfg.catalog.alias(tag);
    format!(
        "  private def {alias}Dummy: {alias} = (cvp: {}) => {}",
        cfg.fragments.value_context,
        cfg.catalog.dummy(tag)
    )
}

/// `getSignature_<return alias>_<arity>`
pub fn case_name(cfg: &GeneratorConfig, bucket: Bucket) -> String {
    format!(
        "{}_{}_{}",
        cfg.fragments.case_prefix,
        cfg.catalog.alias(bucket.ret),
        bucket.arity
    )
}

/// `  def helperIntLong2String(a1: iFun, a2: lFun): sFun = sFunDummy`
pub fn helper_stub(encoder: &SignatureEncoder<'_>, key: &SignatureKey) -> String {
    let cat = encoder.catalog();
    let params: Vec<String> = key
        .args
        .iter()
        .enumerate()
        .map(|(i, t)| format!("a{}: {}", i + 1, cat.alias(*t)))
        .collect();
    let ret = cat.alias(key.ret);
    format!(
        "  def {}({}): {ret} = {ret}Dummy",
        encoder.helper(key),
        params.join(", ")
    )
}

/// `    result &= FunctionSignature.getSignatureIntLong2String(helperIntLong2String) == "Int:Long2String"`
pub fn assertion_line(encoder: &SignatureEncoder<'_>, object: &str, key: &SignatureKey) -> String {
    let e = encoder.encode(key);
    format!(
        "    result &= {object}.{}({}) == \"{}\"",
        e.identifier, e.helper_ref, e.encoding
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeTag::*;

    #[test]
    fn stub_names_parameters_positionally() {
        let cfg = GeneratorConfig::default();
        let enc = SignatureEncoder::new(&cfg.catalog);
        assert_eq!(
            helper_stub(&enc, &SignatureKey::new(vec![Int, Long], String)),
            "  def helperIntLong2String(a1: iFun, a2: lFun): sFun = sFunDummy"
        );
        assert_eq!(
            helper_stub(&enc, &SignatureKey::new(vec![], Boolean)),
            "  def helperEmpty2Boolean(): bFun = bFunDummy"
        );
    }

    #[test]
    fn arity_zero_assertion_wraps_stub_in_lambda() {
        let cfg = GeneratorConfig::default();
        let enc = SignatureEncoder::new(&cfg.catalog);
        assert_eq!(
            assertion_line(&enc, "FunctionSignature", &SignatureKey::new(vec![], Int)),
            "    result &= FunctionSignature.getSignatureEmpty2Int(() => helperEmpty2Int()) == \"e2Int\""
        );
    }

    #[test]
    fn dummy_providers_follow_catalog() {
        let cfg = GeneratorConfig::default();
        let t = emit_tests(&cfg);
        assert!(t
            .source
            .contains("  private def iFunDummy: iFun = (cvp: ColumnValueProvider) => 42\n"));
        assert!(t
            .source
            .contains("  private def sFunDummy: sFun = (cvp: ColumnValueProvider) => \"bingo\"\n"));
        assert_eq!(t.source.matches("private def ").count(), 5);
    }

    #[test]
    fn counts_match_key_space() {
        let t = emit_tests(&GeneratorConfig::default());
        assert_eq!(t.helpers, 3905);
        assert_eq!(t.assertions, 3905);
        assert_eq!(t.cases, 25);
        assert_eq!(t.source.matches("  test(\"").count(), 25);
        assert_eq!(t.source.matches("    assert(result)\n").count(), 25);
    }

    #[test]
    fn case_block_layout() {
        let cfg = GeneratorConfig::default();
        let t = emit_tests(&cfg);
        let block = concat!(
            "  def helperEmpty2Int(): iFun = iFunDummy\n",
            "  test(\"getSignature_iFun_0\") {\n",
            "    var result = true\n",
            "    result &= FunctionSignature.getSignatureEmpty2Int(() => helperEmpty2Int()) == \"e2Int\"\n",
            "    assert(result)\n",
            "  }\n",
        );
        assert!(t.source.contains(block), "first bucket block missing");
        assert_eq!(case_name(&cfg, Bucket { arity: 4, ret: Double }), "getSignature_dFun_4");
    }

    #[test]
    fn renaming_lookup_keeps_case_names() {
        let mut cfg = GeneratorConfig::default();
        cfg.fragments.lookup_fn = "lookupSignature".to_string();
        let t = emit_tests(&cfg);
        assert!(t.source.contains("  test(\"getSignature_iFun_0\") {\n"));
        assert!(!t.source.contains("lookupSignature_"));

        cfg.fragments.case_prefix = "sig".to_string();
        assert_eq!(case_name(&cfg, Bucket { arity: 2, ret: Boolean }), "sig_bFun_2");
    }
}
