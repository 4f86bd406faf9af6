//! # Segments
//!
//! A segment is a repeated sub-resource nested in a parent record (contact,
//! identifier, role, block, note, statistic, proxy relation, library,
//! notice). Segments are read as a projection of the parent's repeated field
//! and written through the merge policy in [`merge`], never by plain
//! overwrite.
//!
//! ## Origin
//!
//! Every segment kind except roles carries a `segment_type` attribute:
//!
//! - `Internal`: managed inside the system (staff edits).
//! - `External`: supplied by the synchronization feed (SIS).
//!
//! A segment without the attribute counts as external.
//!
//! ## Reading and Writing
//!
//! [`SegmentCollection`] is a borrowed view over one repeated field:
//!
//! ```ignore
//! let mut notes = record.collection("user_note", SegmentKind::Note);
//! let current: Vec<UserNote> = notes.get();
//! notes.set(vec![new_note]); // merged, not overwritten
//! ```

use crate::document::Document;
use crate::record::Resource;
use log::debug;
use serde_json::Value;

pub mod merge;

pub use merge::{merge_segments, MergeAction, MergeRule, OnEmpty};

/// Wire key of the origin attribute.
pub const ORIGIN_KEY: &str = "segment_type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    Internal,
    #[default]
    External,
}

impl Origin {
    /// Parse a wire value, case-insensitively.
    pub fn parse(wire: &str) -> Option<Self> {
        match wire.trim().to_ascii_lowercase().as_str() {
            "internal" => Some(Origin::Internal),
            "external" => Some(Origin::External),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Origin::Internal => "Internal",
            Origin::External => "External",
        }
    }

    /// Origin of a segment document; absent or unrecognized is external.
    pub fn of(doc: &Document) -> Self {
        doc.lookup(ORIGIN_KEY)
            .and_then(Value::as_str)
            .and_then(Origin::parse)
            .unwrap_or_default()
    }

    /// Write this origin into a segment document.
    pub fn stamp(self, doc: &mut Document) {
        doc.set(ORIGIN_KEY, self.as_wire());
    }
}

/// The kinds of repeated sub-resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Contact,
    Identifier,
    Role,
    Block,
    Note,
    Statistic,
    ProxyForUser,
    Library,
    Notice,
}

impl SegmentKind {
    /// Whether segments of this kind are split by origin when merged.
    pub fn is_origin_partitioned(self) -> bool {
        self != SegmentKind::Role
    }
}

/// A resource that lives inside a parent's repeated field.
pub trait Segment: Resource {
    const KIND: SegmentKind;

    fn origin(&self) -> Origin {
        Origin::of(self.as_record().document())
    }

    fn set_origin(&mut self, origin: Origin) {
        origin.stamp(self.as_record_mut().document_mut());
    }
}

/// Borrowed view over one repeated field of a parent document.
pub struct SegmentCollection<'a> {
    parent: &'a mut Document,
    field: &'a str,
    kind: SegmentKind,
}

impl<'a> SegmentCollection<'a> {
    pub fn new(parent: &'a mut Document, field: &'a str, kind: SegmentKind) -> Self {
        Self {
            parent,
            field,
            kind,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn field(&self) -> &str {
        self.field
    }

    pub fn len(&self) -> usize {
        match self.parent.lookup(self.field) {
            None | Some(Value::Null) => 0,
            Some(Value::Array(items)) => items.len(),
            Some(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Segment documents in wire order.
    pub fn documents(&self) -> Vec<Document> {
        self.parent.sequence(self.field)
    }

    /// Typed segments in wire order.
    pub fn get<T: Resource>(&self) -> Vec<T> {
        self.documents().into_iter().map(T::from_document).collect()
    }

    /// Reconcile `incoming` against the stored segments as an update.
    pub fn set<T: Resource>(&mut self, incoming: Vec<T>) {
        self.set_with(incoming, MergeAction::Update);
    }

    pub fn set_with<T: Resource>(&mut self, incoming: Vec<T>, action: MergeAction) {
        let incoming = incoming.into_iter().map(T::into_document).collect();
        self.merge_documents(incoming, action);
    }

    /// Merge raw segment documents and replace the field with the result.
    pub fn merge_documents(&mut self, incoming: Vec<Document>, action: MergeAction) {
        let existing = self.documents();
        let merged = merge_segments(&existing, incoming, self.kind, action);
        debug!(
            "merged {} ({:?}, {}): {} stored -> {} written",
            self.field,
            self.kind,
            action,
            existing.len(),
            merged.len()
        );
        self.parent.set_sequence(self.field, merged);
    }
}
