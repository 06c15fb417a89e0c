// Key-value persistence: one JSON document per entry

use eyre::{Context, Result};
use fs2::FileExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the file backing a given entry key.
pub fn entry_path(base: &Path, key: &str) -> PathBuf {
    base.join(format!("{key}.json"))
}

/// Read an entry, falling back to `default` when the file does not exist.
///
/// A present but unreadable or unparseable file is an error: silently
/// replacing it with the default would drop data on the next write.
pub fn read_entry<T, F>(base: &Path, key: &str, default: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let path = entry_path(base, key);

    if !path.exists() {
        debug!(key, "entry file missing, using default");
        return Ok(default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read entry file {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("Failed to parse entry file {}", path.display()))?;
    Ok(value)
}

/// Write an entry, replacing whatever was stored under the key.
pub fn write_entry<T: Serialize>(base: &Path, key: &str, value: &T) -> Result<()> {
    let path = entry_path(base, key);

    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("Failed to open entry file {}", path.display()))?;

    // Acquire exclusive lock before writing
    file.lock_exclusive().context("Failed to acquire file lock")?;
    file.set_len(0).context("Failed to truncate entry file")?;

    let mut json = serde_json::to_vec(value).context("Failed to serialize entry")?;
    json.push(b'\n');
    file.write_all(&json)?;
    file.sync_all()?;

    debug!(key, bytes = json.len(), "wrote entry");

    // Lock is automatically released when file is dropped
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_path() {
        let base = Path::new("/tmp/store");
        assert_eq!(entry_path(base, "tasks"), PathBuf::from("/tmp/store/tasks.json"));
    }

    #[test]
    fn test_read_missing_entry_uses_default() {
        let temp = TempDir::new().unwrap();

        let value: Vec<String> = read_entry(temp.path(), "tasks", Vec::new).unwrap();
        assert!(value.is_empty());

        // Reading must not create the file
        assert!(!entry_path(temp.path(), "tasks").exists());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp = TempDir::new().unwrap();

        let value = vec!["Work".to_string(), "Personal".to_string()];
        write_entry(temp.path(), "categories", &value).unwrap();

        let read: Vec<String> = read_entry(temp.path(), "categories", Vec::new).unwrap();
        assert_eq!(read, value);
    }

    #[test]
    fn test_write_replaces_longer_previous_content() {
        let temp = TempDir::new().unwrap();

        let long = vec!["a".repeat(200)];
        write_entry(temp.path(), "entry", &long).unwrap();

        let short = vec!["b".to_string()];
        write_entry(temp.path(), "entry", &short).unwrap();

        // A stale tail from the longer write would break parsing here.
        let read: Vec<String> = read_entry(temp.path(), "entry", Vec::new).unwrap();
        assert_eq!(read, short);
    }

    #[test]
    fn test_corrupt_entry_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(entry_path(temp.path(), "tasks"), "{not json").unwrap();

        let result: Result<Vec<String>> = read_entry(temp.path(), "tasks", Vec::new);
        assert!(result.is_err());
    }
}
