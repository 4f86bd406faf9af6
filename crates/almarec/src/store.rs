//! Directory-backed transport: one `<root>/<resource>/<id>.json` file per record.

use almarecords::transport::{check_id, Transport};
use almarecords::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const FILE_EXT: &str = "json";

/// Stores each resource as `<root>/<resource>/<id>.json`.
pub struct FsTransport {
    root: PathBuf,
}

impl FsTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resource_dir(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }

    /// Path of the file holding `resource/id`, whether or not it exists.
    fn record_path(&self, resource: &str, id: &str) -> PathBuf {
        self.resource_dir(resource).join(format!("{id}.{FILE_EXT}"))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

impl Transport for FsTransport {
    fn fetch(&self, resource: &str, id: &str) -> Result<Option<String>> {
        check_id(id)?;
        let path = self.record_path(resource, id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn store(&self, resource: &str, id: &str, wire: &str) -> Result<()> {
        check_id(id)?;
        let dir = self.resource_dir(resource);
        self.ensure_dir(&dir)?;

        let target = self.record_path(resource, id);
        let tmp = dir.join(format!(".{id}-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, wire)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!("stored {}", target.display());
        Ok(())
    }

    fn list_ids(&self, resource: &str) -> Result<Vec<String>> {
        let dir = self.resource_dir(resource);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(FILE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !stem.starts_with('.') {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn remove(&self, resource: &str, id: &str) -> Result<bool> {
        check_id(id)?;
        let path = self.record_path(resource, id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almarecords::resources::{User, UserNote};
    use almarecords::test_utils::SAMPLE_USER;
    use almarecords::{MergeAction, RecordError, RecordsApi, Resource};
    use tempfile::tempdir;

    #[test]
    fn store_writes_one_file_per_record() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        transport.store("users", "jdoe", r#"{"primary_id":"jdoe"}"#).unwrap();

        let path = dir.path().join("users").join("jdoe.json");
        assert!(path.exists());
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            r#"{"primary_id":"jdoe"}"#
        );
        assert_eq!(
            transport.fetch("users", "jdoe").unwrap().as_deref(),
            Some(r#"{"primary_id":"jdoe"}"#)
        );
    }

    #[test]
    fn fetch_missing_is_none() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        assert_eq!(transport.fetch("users", "nobody").unwrap(), None);
        assert!(transport.list_ids("users").unwrap().is_empty());
    }

    #[test]
    fn store_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        transport.store("users", "a", "{}").unwrap();
        transport.store("users", "a", r#"{"x":1}"#).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path().join("users"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json"]);
    }

    #[test]
    fn list_ids_skips_foreign_files() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        transport.store("users", "b", "{}").unwrap();
        transport.store("users", "a", "{}").unwrap();
        fs::write(dir.path().join("users").join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("users").join(".c-1.tmp"), "x").unwrap();
        assert_eq!(transport.list_ids("users").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn remove_deletes_the_file() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        transport.store("users", "jdoe", "{}").unwrap();
        assert!(transport.remove("users", "jdoe").unwrap());
        assert!(!transport.record_path("users", "jdoe").exists());
        assert!(!transport.remove("users", "jdoe").unwrap());
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        let blocker = dir.path().join("users").join("jdoe.json");
        fs::create_dir_all(&blocker).unwrap();
        fs::write(blocker.join("occupied"), "x").unwrap();

        assert!(transport.store("users", "jdoe", "{}").is_err());
        let names: Vec<_> = fs::read_dir(dir.path().join("users"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["jdoe.json"]);
    }

    #[test]
    fn dot_ids_are_refused() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        assert!(transport.store("users", ".hidden", "{}").is_err());
        assert!(transport.list_ids("users").unwrap().is_empty());
    }

    #[test]
    fn traversal_ids_are_refused() {
        let dir = tempdir().unwrap();
        let transport = FsTransport::new(dir.path());
        assert!(transport.store("users", "../escape", "{}").is_err());
        assert!(!dir.path().join("escape.json").exists());
    }

    #[test]
    fn api_update_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let api = RecordsApi::new(FsTransport::new(dir.path())).with_pretty(true);
        api.transport().store("users", "jdoe", SAMPLE_USER).unwrap();

        let mut incoming = User::empty();
        incoming.set_user_notes(vec![UserNote::new("New feed note")]);
        api.update("jdoe", &incoming, MergeAction::Update).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("users").join("jdoe.json")).unwrap();
        let user = User::from_wire(&on_disk).unwrap();
        let notes: Vec<_> = user.user_notes().iter().map(UserNote::note_text).collect();
        assert_eq!(notes, vec!["Staff note", "New feed note"]);
        assert_eq!(user.last_name(), "Doe");
        assert!(on_disk.contains("x_vendor_extension"));
    }

    #[test]
    fn api_reports_missing_and_corrupt_records() {
        let dir = tempdir().unwrap();
        let api = RecordsApi::new(FsTransport::new(dir.path()));
        let err = api.fetch::<User>("c").unwrap_err();
        assert_eq!(err.to_string(), "Record not found: users/c");

        api.transport().store("users", "bad", "{not json").unwrap();
        assert!(matches!(api.fetch::<User>("bad"), Err(RecordError::Wire(_))));
    }
}
