use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use getsig_contracts::GETSIG_CONFIG_SCHEMA_VERSION;

use crate::catalog::{TypeCatalog, TypeEntry};
use crate::diagnostics::{Diagnostic, DiagnosticCode, Phase};
use crate::fragments::Fragments;

/// Everything the encoder and both generators read. Built once per run and
/// shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub catalog: TypeCatalog,
    pub fragments: Fragments,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    schema_version: String,
    #[serde(default)]
    types: Option<Vec<TypeEntry>>,
    #[serde(default)]
    fragments: Option<Fragments>,
}

impl GeneratorConfig {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let file: ConfigFile = serde_json::from_slice(bytes).map_err(|err| {
            Diagnostic::error(DiagnosticCode::GSG0001ConfigParse, Phase::Config, err.to_string())
        })?;
        if file.schema_version != GETSIG_CONFIG_SCHEMA_VERSION {
            return Err(Diagnostic::error(
                DiagnosticCode::GSG0002SchemaMismatch,
                Phase::Config,
                format!(
                    "expected {GETSIG_CONFIG_SCHEMA_VERSION} got {:?}",
                    file.schema_version
                ),
            )
            .into());
        }

        let catalog = match file.types {
            Some(types) => TypeCatalog::new(types)?,
            None => TypeCatalog::default(),
        };
        Ok(GeneratorConfig {
            catalog,
            fragments: file.fragments.unwrap_or_default(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config: {}", path.display()))?;
        let cfg = Self::from_json(&bytes)
            .with_context(|| format!("load config: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            types = cfg.catalog.len(),
            "loaded generator config"
        );
        Ok(cfg)
    }
}
