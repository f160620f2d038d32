//! Shared, version-pinned protocol identifiers.
//!
//! These constants are the single source of truth for schema/version strings that
//! appear in machine-readable I/O and in the banner of generated sources.

pub const GETSIG_CONFIG_SCHEMA_VERSION: &str = "getsig.config@0.1.0";
pub const GETSIG_REPORT_SCHEMA_VERSION: &str = "getsig.report@0.1.0";

pub const GENERATED_BANNER: &str = "// This file is generated by getsig - do not modify!!!";

/// Highest arity the dispatch layer supports.
pub const MAX_ARITY: usize = 4;
