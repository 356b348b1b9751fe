//! Atomic CSS file writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Writes `content` to `<dir>/<file>`, creating the directory if needed.
/// The content lands in a `.tmp` sibling first and is renamed into place;
/// the output path never holds a partially written file.
pub fn write(dir: &Path, file: &str, content: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let target = dir.join(file);
    let staging = dir.join(format!("{file}.tmp"));
    fs::write(&staging, content)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    fs::rename(&staging, &target)
        .with_context(|| format!("failed to move {} into place", staging.display()))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_a_fresh_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("dist");
        let target = write(&dir, "variables.css", ":root {\n}\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), ":root {\n}\n");
        assert!(!dir.join("variables.css.tmp").exists());
    }

    #[test]
    fn overwrites_an_existing_file() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "variables.css", "old").unwrap();
        let target = write(root.path(), "variables.css", "new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }
}
