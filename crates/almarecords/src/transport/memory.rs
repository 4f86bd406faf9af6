use super::{check_id, Transport};
use crate::error::{RecordError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory transport for testing.
///
/// Uses `RefCell` for interior mutability so the [`Transport`] methods can
/// all take `&self`. Single-threaded only.
#[derive(Default)]
pub struct MemTransport {
    records: RefCell<HashMap<(String, String), String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl Transport for MemTransport {
    fn fetch(&self, resource: &str, id: &str) -> Result<Option<String>> {
        check_id(id)?;
        let records = self.records.borrow();
        Ok(records.get(&(resource.to_string(), id.to_string())).cloned())
    }

    fn store(&self, resource: &str, id: &str, wire: &str) -> Result<()> {
        check_id(id)?;
        if *self.simulate_write_error.borrow() {
            return Err(RecordError::Transport("Simulated write error".to_string()));
        }
        self.records
            .borrow_mut()
            .insert((resource.to_string(), id.to_string()), wire.to_string());
        Ok(())
    }

    fn list_ids(&self, resource: &str) -> Result<Vec<String>> {
        let records = self.records.borrow();
        let mut ids: Vec<String> = records
            .keys()
            .filter(|(r, _)| r == resource)
            .map(|(_, id)| id.clone())
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn remove(&self, resource: &str, id: &str) -> Result<bool> {
        check_id(id)?;
        let mut records = self.records.borrow_mut();
        Ok(records
            .remove(&(resource.to_string(), id.to_string()))
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_fetch() {
        let transport = MemTransport::new();
        transport.store("users", "jdoe", r#"{"primary_id":"jdoe"}"#).unwrap();
        assert_eq!(
            transport.fetch("users", "jdoe").unwrap().as_deref(),
            Some(r#"{"primary_id":"jdoe"}"#)
        );
        assert_eq!(transport.fetch("users", "other").unwrap(), None);
        assert_eq!(transport.fetch("notes", "jdoe").unwrap(), None);
    }

    #[test]
    fn list_ids_is_per_resource_and_sorted() {
        let transport = MemTransport::new();
        transport.store("users", "b", "{}").unwrap();
        transport.store("users", "a", "{}").unwrap();
        transport.store("vendors", "c", "{}").unwrap();
        assert_eq!(transport.list_ids("users").unwrap(), vec!["a", "b"]);
        assert_eq!(transport.len(), 3);
    }

    #[test]
    fn simulated_write_error_keeps_previous_value() {
        let transport = MemTransport::new();
        transport.store("users", "jdoe", "{}").unwrap();
        transport.set_simulate_write_error(true);
        assert!(matches!(
            transport.store("users", "jdoe", r#"{"x":1}"#),
            Err(RecordError::Transport(_))
        ));
        assert_eq!(transport.fetch("users", "jdoe").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn remove_reports_presence() {
        let transport = MemTransport::new();
        transport.store("users", "jdoe", "{}").unwrap();
        assert!(transport.remove("users", "jdoe").unwrap());
        assert!(!transport.remove("users", "jdoe").unwrap());
        assert!(transport.is_empty());
    }
}
