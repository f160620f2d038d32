use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256, as recorded in the run report.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .fold(String::with_capacity(64), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}
