use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// Writes `contents` to `path`, or with `check` set only compares them with
/// what is already there.
pub fn write_artifact(path: &Path, contents: &str, check: bool) -> Result<WriteStatus> {
    if check {
        let cur = std::fs::read_to_string(path)
            .with_context(|| format!("read existing output: {}", path.display()))?;
        if cur != contents {
            anyhow::bail!("generated output differs: {}", path.display());
        }
        tracing::debug!(path = %path.display(), "output up to date");
        return Ok(WriteStatus::Unchanged);
    }

    write_atomic(path, contents.as_bytes())?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(WriteStatus::Written)
}

/// The destination only ever holds the old or the complete new contents.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }

    let tmp = temp_path_next_to(path);
    if let Err(err) = write_and_sync(&tmp, contents) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("write temp: {}", tmp.display()));
    }

    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err)
            .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()));
    }
    Ok(())
}

fn write_and_sync(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    f.write_all(contents)?;
    f.sync_all()
}

fn temp_path_next_to(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    path.with_file_name(format!(".{file_name}.tmp.{}", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_check() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out.scala");
        assert_eq!(
            write_artifact(&path, "object X {}\n", false).expect("write"),
            WriteStatus::Written
        );
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "object X {}\n");
        assert_eq!(
            write_artifact(&path, "object X {}\n", true).expect("check"),
            WriteStatus::Unchanged
        );

        let err = write_artifact(&path, "object Y {}\n", true).unwrap_err();
        assert!(err.to_string().contains("generated output differs"));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "object X {}\n");
    }

    #[test]
    fn check_of_missing_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = write_artifact(&dir.path().join("absent.scala"), "", true).unwrap_err();
        assert!(format!("{err:#}").contains("absent.scala"));
    }

    #[test]
    fn overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.scala");
        std::fs::write(&path, "old contents that are longer than the new ones\n").expect("seed");
        write_atomic(&path, b"new\n").expect("write");
        assert_eq!(std::fs::read(&path).expect("read"), b"new\n");

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.scala")]);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory where the output file should go.
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).expect("mkdir");
        assert!(write_atomic(&path, b"x").is_err());
        assert!(path.is_dir());
    }
}
