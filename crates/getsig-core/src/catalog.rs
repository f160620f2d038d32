//! The closed set of primitive value kinds and their name projections.
//!
//! A [`TypeCatalog`] fixes both the projections of every [`TypeTag`] and the
//! order in which tags are enumerated. It can only be built when it lists
//! every tag exactly once, so lookups by tag never miss.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticCode, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Int,
    Long,
    Double,
    String,
    Boolean,
}

impl TypeTag {
    pub const ALL: [TypeTag; 5] = [
        TypeTag::Int,
        TypeTag::Long,
        TypeTag::Double,
        TypeTag::String,
        TypeTag::Boolean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Int => "Int",
            TypeTag::Long => "Long",
            TypeTag::Double => "Double",
            TypeTag::String => "String",
            TypeTag::Boolean => "Boolean",
        }
    }

    fn slot(self) -> usize {
        match self {
            TypeTag::Int => 0,
            TypeTag::Long => 1,
            TypeTag::Double => 2,
            TypeTag::String => 3,
            TypeTag::Boolean => 4,
        }
    }
}

/// Name projections of one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub tag: TypeTag,
    /// Used in identifiers and encodings (`Int`).
    pub base: String,
    /// Function alias used for parameter and return types (`iFun`).
    pub alias: String,
    /// Descriptor passed to the lookup primitive (`IntFun`).
    pub function_type: String,
    /// Literal returned by the test dummy provider (`42`).
    pub dummy: String,
}

impl TypeEntry {
    fn new(tag: TypeTag, base: &str, alias: &str, function_type: &str, dummy: &str) -> Self {
        TypeEntry {
            tag,
            base: base.to_string(),
            alias: alias.to_string(),
            function_type: function_type.to_string(),
            dummy: dummy.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    entries: Vec<TypeEntry>,
    slots: [usize; 5],
}

impl TypeCatalog {
    pub fn new(entries: Vec<TypeEntry>) -> Result<Self, Diagnostic> {
        let mut slots: [Option<usize>; 5] = [None; 5];
        for (idx, e) in entries.iter().enumerate() {
            let slot = &mut slots[e.tag.slot()];
            if slot.is_some() {
                return Err(Diagnostic::error(
                    DiagnosticCode::GSG0101DuplicateTag,
                    Phase::Catalog,
                    format!("types[{idx}] repeats tag {}", e.tag.as_str()),
                ));
            }
            *slot = Some(idx);

            for (field, value) in [
                ("base", &e.base),
                ("alias", &e.alias),
                ("function_type", &e.function_type),
            ] {
                if !is_identifier(value) {
                    return Err(Diagnostic::error(
                        DiagnosticCode::GSG0110InvalidName,
                        Phase::Catalog,
                        format!("types[{idx}].{field} = {value:?}"),
                    ));
                }
            }
            if e.dummy.trim().is_empty() {
                return Err(Diagnostic::error(
                    DiagnosticCode::GSG0110InvalidName,
                    Phase::Catalog,
                    format!("types[{idx}].dummy is empty"),
                ));
            }
            if let Some(prev) = entries[..idx].iter().position(|p| p.base == e.base) {
                return Err(Diagnostic::error(
                    DiagnosticCode::GSG0111DuplicateBaseName,
                    Phase::Catalog,
                    format!("types[{prev}] and types[{idx}] both use {:?}", e.base),
                ));
            }
        }

        let mut resolved = [0usize; 5];
        for tag in TypeTag::ALL {
            match slots[tag.slot()] {
                Some(idx) => resolved[tag.slot()] = idx,
                None => {
                    return Err(Diagnostic::error(
                        DiagnosticCode::GSG0100MissingTag,
                        Phase::Catalog,
                        tag.as_str(),
                    ))
                }
            }
        }

        Ok(TypeCatalog {
            entries,
            slots: resolved,
        })
    }

    pub fn entry(&self, tag: TypeTag) -> &TypeEntry {
        &self.entries[self.slots[tag.slot()]]
    }

    pub fn base_name(&self, tag: TypeTag) -> &str {
        &self.entry(tag).base
    }

    pub fn alias(&self, tag: TypeTag) -> &str {
        &self.entry(tag).alias
    }

    pub fn function_type_name(&self, tag: TypeTag) -> &str {
        &self.entry(tag).function_type
    }

    pub fn dummy(&self, tag: TypeTag) -> &str {
        &self.entry(tag).dummy
    }

    /// Tags in enumeration order.
    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + Clone + '_ {
        self.entries.iter().map(|e| e.tag)
    }

    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        let entries = vec![
            TypeEntry::new(TypeTag::Int, "Int", "iFun", "IntFun", "42"),
            TypeEntry::new(TypeTag::Long, "Long", "lFun", "LongFun", "1"),
            TypeEntry::new(TypeTag::Double, "Double", "dFun", "DoubleFun", "3.14"),
            TypeEntry::new(TypeTag::String, "String", "sFun", "StringFun", "\"bingo\""),
            TypeEntry::new(TypeTag::Boolean, "Boolean", "bFun", "BooleanFun", "false"),
        ];
        TypeCatalog {
            entries,
            slots: [0, 1, 2, 3, 4],
        }
    }
}

pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
