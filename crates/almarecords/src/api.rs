//! # API Facade
//!
//! [`RecordsApi`] is the single entry point for reading and writing whole
//! resources through a [`Transport`]. It owns the read-modify-write cycle:
//!
//! 1. **Fetch** the stored wire document and wrap it in its resource type.
//! 2. **Absorb** the incoming partial resource under the requested
//!    [`MergeAction`] (segment merge policy included).
//! 3. **Store** the merged result and hand it back to the caller.
//!
//! The facade never prints and never exits; presentation belongs to the
//! client.
//!
//! ## Generic Over Transport
//!
//! - Production: a client-supplied transport (the CLI uses a directory of JSON files)
//! - Testing: `RecordsApi<MemTransport>`

use crate::error::{RecordError, Result};
use crate::record::Resource;
use crate::segment::MergeAction;
use crate::transport::Transport;
use log::{debug, info};

pub struct RecordsApi<T: Transport> {
    transport: T,
    pretty: bool,
}

impl<T: Transport> RecordsApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            pretty: false,
        }
    }

    /// Store wire documents pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn not_found<R: Resource>(id: &str) -> RecordError {
        RecordError::RecordNotFound {
            resource: R::SCHEMA.name.to_string(),
            id: id.to_string(),
        }
    }

    fn store<R: Resource>(&self, id: &str, resource: &R) -> Result<()> {
        let wire = if self.pretty {
            resource.to_wire_pretty()
        } else {
            resource.to_wire()
        };
        self.transport.store(R::SCHEMA.name, id, &wire)
    }

    pub fn exists<R: Resource>(&self, id: &str) -> Result<bool> {
        Ok(self.transport.fetch(R::SCHEMA.name, id)?.is_some())
    }

    pub fn fetch<R: Resource>(&self, id: &str) -> Result<R> {
        let wire = self
            .transport
            .fetch(R::SCHEMA.name, id)?
            .ok_or_else(|| Self::not_found::<R>(id))?;
        R::from_wire(&wire)
    }

    /// Store a new resource. Segments are taken as supplied, per their origin.
    pub fn create<R: Resource>(&self, id: &str, resource: &R) -> Result<R> {
        self.create_with(id, resource, MergeAction::Create)
    }

    /// Store a new resource under `action`. A synchronization load marks
    /// every segment external; any other action behaves as [`Self::create`].
    pub fn create_with<R: Resource>(
        &self,
        id: &str,
        resource: &R,
        action: MergeAction,
    ) -> Result<R> {
        let action = match action {
            MergeAction::Sync => MergeAction::Sync,
            MergeAction::Create | MergeAction::Update => MergeAction::Create,
        };
        if self.exists::<R>(id)? {
            return Err(RecordError::Transport(format!(
                "{}/{id} already exists",
                R::SCHEMA.name
            )));
        }
        let mut created = R::empty();
        created
            .as_record_mut()
            .absorb(resource.as_record(), action)?;
        self.store(id, &created)?;
        info!("created {}/{id} ({action})", R::SCHEMA.name);
        Ok(created)
    }

    /// Apply `incoming` onto the stored resource and store the result.
    pub fn update<R: Resource>(&self, id: &str, incoming: &R, action: MergeAction) -> Result<R> {
        let mut stored: R = self.fetch(id)?;
        stored
            .as_record_mut()
            .absorb(incoming.as_record(), action)?;
        self.store(id, &stored)?;
        debug!("updated {}/{id} ({action})", R::SCHEMA.name);
        Ok(stored)
    }

    pub fn list_ids<R: Resource>(&self) -> Result<Vec<String>> {
        self.transport.list_ids(R::SCHEMA.name)
    }

    pub fn remove<R: Resource>(&self, id: &str) -> Result<()> {
        if !self.transport.remove(R::SCHEMA.name, id)? {
            return Err(Self::not_found::<R>(id));
        }
        info!("removed {}/{id}", R::SCHEMA.name);
        Ok(())
    }
}
