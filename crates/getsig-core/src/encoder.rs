//! Canonical naming of signature keys.
//!
//! For `(Int, Double) -> String` with the default catalog:
//! - identifier: `getSignatureIntDouble2String`
//! - helper: `helperIntDouble2String`
//! - encoding: `Int:Double2String`
//!
//! The empty argument list spells `Empty` in identifiers and `e` in encodings.

use serde::Serialize;

use crate::catalog::{TypeCatalog, TypeTag};
use crate::enumerate::SignatureKey;

pub const IDENTIFIER_PREFIX: &str = "getSignature";
pub const HELPER_PREFIX: &str = "helper";
const EMPTY_SUFFIX: &str = "Empty";
const EMPTY_ENCODING: &str = "e";

/// Every projection of one key, computed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedSignature {
    pub identifier: String,
    pub helper: String,
    /// What the assertion passes to the registry function.
    pub helper_ref: String,
    pub encoding: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SignatureEncoder<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> SignatureEncoder<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        SignatureEncoder { catalog }
    }

    pub fn catalog(&self) -> &'a TypeCatalog {
        self.catalog
    }

    pub fn suffix(&self, args: &[TypeTag]) -> String {
        if args.is_empty() {
            return EMPTY_SUFFIX.to_string();
        }
        args.iter().map(|t| self.catalog.base_name(*t)).collect()
    }

    pub fn identifier(&self, key: &SignatureKey) -> String {
        format!(
            "{IDENTIFIER_PREFIX}{}2{}",
            self.suffix(&key.args),
            self.catalog.base_name(key.ret)
        )
    }

    pub fn helper(&self, key: &SignatureKey) -> String {
        format!(
            "{HELPER_PREFIX}{}2{}",
            self.suffix(&key.args),
            self.catalog.base_name(key.ret)
        )
    }

    pub fn helper_ref(&self, key: &SignatureKey) -> String {
        let helper = self.helper(key);
        if key.args.is_empty() {
            format!("() => {helper}()")
        } else {
            helper
        }
    }

    pub fn encoding(&self, key: &SignatureKey) -> String {
        let head = if key.args.is_empty() {
            EMPTY_ENCODING.to_string()
        } else {
            key.args
                .iter()
                .map(|t| self.catalog.base_name(*t))
                .collect::<Vec<_>>()
                .join(":")
        };
        format!("{head}2{}", self.catalog.base_name(key.ret))
    }

    pub fn encode(&self, key: &SignatureKey) -> EncodedSignature {
        EncodedSignature {
            identifier: self.identifier(key),
            helper: self.helper(key),
            helper_ref: self.helper_ref(key),
            encoding: self.encoding(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeEntry;
    use crate::catalog::TypeTag::*;

    fn enc(cat: &TypeCatalog, args: &[TypeTag], ret: TypeTag) -> EncodedSignature {
        SignatureEncoder::new(cat).encode(&SignatureKey::new(args.to_vec(), ret))
    }

    #[test]
    fn arity_zero_uses_empty_and_e() {
        let cat = TypeCatalog::default();
        let e = enc(&cat, &[], Int);
        assert_eq!(e.identifier, "getSignatureEmpty2Int");
        assert_eq!(e.helper, "helperEmpty2Int");
        assert_eq!(e.helper_ref, "() => helperEmpty2Int()");
        assert_eq!(e.encoding, "e2Int");
    }

    #[test]
    fn golden_encodings() {
        let cat = TypeCatalog::default();
        assert_eq!(enc(&cat, &[String], Boolean).encoding, "String2Boolean");
        assert_eq!(enc(&cat, &[Int, Double], String).encoding, "Int:Double2String");
        assert_eq!(
            enc(&cat, &[Boolean, Long, String, Int], Double).encoding,
            "Boolean:Long:String:Int2Double"
        );
    }

    #[test]
    fn identifier_and_helper_share_suffix() {
        let cat = TypeCatalog::default();
        let e = enc(&cat, &[Boolean, Long, String, Int], Double);
        assert_eq!(e.identifier, "getSignatureBooleanLongStringInt2Double");
        assert_eq!(e.helper, "helperBooleanLongStringInt2Double");
        assert_eq!(e.helper_ref, e.helper);
        assert_eq!(
            e.identifier.replacen(IDENTIFIER_PREFIX, HELPER_PREFIX, 1),
            e.helper
        );
    }

    #[test]
    fn single_projections_agree_with_encode() {
        let cat = TypeCatalog::default();
        let s = SignatureEncoder::new(&cat);
        let key = SignatureKey::new(vec![Long, Long], Boolean);
        let e = s.encode(&key);
        assert_eq!(s.identifier(&key), e.identifier);
        assert_eq!(s.helper_ref(&key), e.helper_ref);
        assert_eq!(s.encoding(&key), e.encoding);
    }

    #[test]
    fn encoder_reads_injected_catalog() {
        let mut entries = TypeCatalog::default().entries().to_vec();
        entries[0] = TypeEntry {
            tag: Int,
            base: "I32".to_string(),
            alias: "iFun".to_string(),
            function_type: "IntFun".to_string(),
            dummy: "42".to_string(),
        };
        let cat = TypeCatalog::new(entries).expect("valid");
        let e = enc(&cat, &[Int, Long], Int);
        assert_eq!(e.identifier, "getSignatureI32Long2I32");
        assert_eq!(e.encoding, "I32:Long2I32");
    }
}
