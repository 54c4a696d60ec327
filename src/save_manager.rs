#![allow(dead_code)]

use crate::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME};
use crate::fishing::types::SaveData;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads and writes the catch-history save file.
///
/// The location is injected so tests can point it at a scratch directory;
/// the default lives under the user's home directory. The file is a single
/// flat JSON object with no version field.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager at the default platform location.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;

        let save_dir = home_dir.join(SAVE_DIR_NAME);
        fs::create_dir_all(&save_dir)?;

        Ok(Self {
            save_path: save_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Uses an explicit save file location.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// Writes the snapshot to disk.
    ///
    /// Callers in the frame loop report a failure and carry on; the
    /// in-memory state stays authoritative and the next catch or reset
    /// re-attempts the write naturally.
    pub fn save(&self, data: &SaveData) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)
    }

    /// Loads the snapshot, falling back to the zero state when the file is
    /// missing or does not parse. Neither case surfaces as an error.
    pub fn load_or_default(&self) -> SaveData {
        match fs::read_to_string(&self.save_path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => SaveData::default(),
        }
    }

    /// Checks if a save file exists.
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn sample_data() -> SaveData {
        let mut catch_list = HashMap::new();
        catch_list.insert("Salmon".to_string(), 3);
        catch_list.insert("Old Boot".to_string(), 1);
        SaveData {
            catch_list,
            points: 75,
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = SaveManager::with_path(dir.path().join("save.json"));

        let original = sample_data();
        manager.save(&original).expect("Failed to save");

        assert!(manager.save_exists());
        assert_eq!(manager.load_or_default(), original);
    }

    #[test]
    fn test_load_missing_file_yields_zero_state() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = SaveManager::with_path(dir.path().join("does_not_exist.json"));

        assert!(!manager.save_exists());
        assert_eq!(manager.load_or_default(), SaveData::default());
    }

    #[test]
    fn test_load_malformed_file_yields_zero_state() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("save.json");
        fs::write(&path, "{ not json at all").expect("Failed to write");

        let manager = SaveManager::with_path(path);

        assert_eq!(manager.load_or_default(), SaveData::default());
    }

    #[test]
    fn test_wire_format_field_names() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = SaveManager::with_path(dir.path().join("save.json"));

        manager.save(&sample_data()).expect("Failed to save");
        let text = fs::read_to_string(manager.path()).expect("Failed to read");

        assert!(text.contains("\"CatchList\""));
        assert!(text.contains("\"Points\""));
    }

    #[test]
    fn test_load_tolerates_missing_fields() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("save.json");
        fs::write(&path, "{}").expect("Failed to write");

        let manager = SaveManager::with_path(path);
        let data = manager.load_or_default();

        assert!(data.catch_list.is_empty());
        assert_eq!(data.points, 0);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = SaveManager::with_path(dir.path().join("save.json"));

        manager.save(&sample_data()).expect("Failed to save");
        manager.save(&SaveData::default()).expect("Failed to save");

        assert_eq!(manager.load_or_default(), SaveData::default());
    }
}
