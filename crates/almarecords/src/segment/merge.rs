//! # Segment Merge Policy
//!
//! Decides the final contents of a repeated field when an incoming update
//! meets the stored segments. The rule depends on the segment kind and the
//! action being performed.
//!
//! ## Update (PUT)
//!
//! For every origin-partitioned kind (everything except roles):
//!
//! 1. Stored and incoming segments are each split into internal and external.
//! 2. External: the incoming external set replaces the stored one wholesale.
//!    An empty incoming external set deletes every stored external segment.
//! 3. Internal: the incoming internal set replaces the stored one only when
//!    it is non-empty. Internal segments are never deleted by omission.
//! 4. Result: internal segments first, then external ones, each keeping its
//!    relative order.
//!
//! Roles are one undifferentiated collection: a non-empty incoming list
//! replaces the stored roles, an empty one keeps them.
//!
//! ## Create (POST)
//!
//! Nothing is stored yet, so the stored side is treated as empty and the
//! Update rules apply to what was supplied.
//!
//! ## Sync (SIS load)
//!
//! All incoming segments are marked external and replace the stored external
//! set; internal segments are kept. Roles are not part of a synchronization
//! load and are always kept. Libraries and notices are not replaced when the
//! incoming list is empty.
//!
//! The policy is total: it never fails, whatever the two inputs are.

use super::{Origin, SegmentKind};
use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The write being performed against the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeAction {
    Create,
    #[default]
    Update,
    Sync,
}

impl fmt::Display for MergeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergeAction::Create => "create",
            MergeAction::Update => "update",
            MergeAction::Sync => "sync",
        };
        f.write_str(name)
    }
}

impl FromStr for MergeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" | "post" => Ok(MergeAction::Create),
            "update" | "put" => Ok(MergeAction::Update),
            "sync" | "sis" => Ok(MergeAction::Sync),
            other => Err(format!(
                "unknown merge action '{other}': expected create|update|sync"
            )),
        }
    }
}

/// What an empty incoming list means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnEmpty {
    Delete,
    Preserve,
}

/// How one repeated field is reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Split by origin. Internal is preserve-on-empty; external follows
    /// `external_on_empty`. With `force_external`, incoming segments are
    /// re-marked external first.
    ByOrigin {
        force_external: bool,
        external_on_empty: OnEmpty,
    },

    /// One collection, replaced wholesale unless empty and preserving.
    Whole { on_empty: OnEmpty },

    /// Incoming segments are ignored.
    KeepExisting,
}

impl MergeRule {
    pub fn for_kind(kind: SegmentKind, action: MergeAction) -> Self {
        match (kind, action) {
            (SegmentKind::Role, MergeAction::Sync) => MergeRule::KeepExisting,
            (SegmentKind::Role, _) => MergeRule::Whole {
                on_empty: OnEmpty::Preserve,
            },
            (SegmentKind::Library | SegmentKind::Notice, MergeAction::Sync) => MergeRule::ByOrigin {
                force_external: true,
                external_on_empty: OnEmpty::Preserve,
            },
            (_, MergeAction::Sync) => MergeRule::ByOrigin {
                force_external: true,
                external_on_empty: OnEmpty::Delete,
            },
            (_, MergeAction::Create | MergeAction::Update) => MergeRule::ByOrigin {
                force_external: false,
                external_on_empty: OnEmpty::Delete,
            },
        }
    }
}

fn partition(segments: Vec<Document>) -> (Vec<Document>, Vec<Document>) {
    segments
        .into_iter()
        .partition(|doc| Origin::of(doc) == Origin::Internal)
}

/// Compute the final segment list for one repeated field.
pub fn merge_segments(
    existing: &[Document],
    incoming: Vec<Document>,
    kind: SegmentKind,
    action: MergeAction,
) -> Vec<Document> {
    let existing = match action {
        MergeAction::Create => Vec::new(),
        MergeAction::Update | MergeAction::Sync => existing.to_vec(),
    };

    match MergeRule::for_kind(kind, action) {
        MergeRule::KeepExisting => existing,
        MergeRule::Whole { on_empty } => {
            if incoming.is_empty() && on_empty == OnEmpty::Preserve {
                existing
            } else {
                incoming
            }
        }
        MergeRule::ByOrigin {
            force_external,
            external_on_empty,
        } => {
            let mut incoming = incoming;
            if force_external {
                for doc in &mut incoming {
                    Origin::External.stamp(doc);
                }
            }

            let (existing_internal, existing_external) = partition(existing);
            let (incoming_internal, incoming_external) = partition(incoming);

            let internal = if incoming_internal.is_empty() {
                existing_internal
            } else {
                incoming_internal
            };
            let external =
                if incoming_external.is_empty() && external_on_empty == OnEmpty::Preserve {
                    existing_external
                } else {
                    incoming_external
                };

            internal.into_iter().chain(external).collect()
        }
    }
}
