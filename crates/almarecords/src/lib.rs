//! # almarecords
//!
//! Typed record mapping for library-services REST resources: a generic
//! document layer, coded values, a date codec, schema-driven records, and
//! the segment merge policy that decides what survives an update.
//!
//! ## Architecture
//!
//! | Layer | Module | Role |
//! |-------|--------|------|
//! | Document | [`document`] | Path-addressed JSON tree, unknown data preserved |
//! | Values | [`value`], [`date`] | `{value, desc}` codes; `YYYY-MM-DD` dates |
//! | Schema | [`schema`] | Static field tables, runtime [`schema::FieldValue`] |
//! | Record | [`record`] | Typed accessors, generic engine, partial updates |
//! | Segments | [`segment`] | Repeated sub-records and the merge policy |
//! | Resources | [`resources`] | `User` and its segments |
//! | I/O seam | [`transport`], [`api`] | Transport trait; read-modify-write |
//!
//! ## Internal vs External Segments
//!
//! Repeated segments carry an origin. Internal segments were entered by
//! staff; external ones come from a student information system feed. An
//! update replaces the external set wholesale (an empty list deletes it) and
//! only replaces the internal set when new internal segments are supplied.
//! Roles are the exception: an empty role list never deletes roles.
//!
//! ```
//! use almarecords::record::Resource;
//! use almarecords::resources::{User, UserIdentifier};
//!
//! let mut user = User::from_wire(r#"{"user_identifier": [
//!     {"value": "B-1", "segment_type": "Internal"},
//!     {"value": "U-1", "segment_type": "External"}
//! ]}"#).unwrap();
//! user.set_user_identifiers(vec![UserIdentifier::new("UNIV_ID", "U-2")]);
//!
//! let values: Vec<_> = user.user_identifiers().iter().map(|i| i.value()).collect();
//! assert_eq!(values, ["B-1", "U-2"]);
//! ```
//!
//! The library never writes to stdout or stderr; diagnostics go through the
//! `log` facade.

pub mod api;
pub mod config;
pub mod date;
pub mod document;
pub mod error;
pub mod record;
pub mod resources;
pub mod schema;
pub mod segment;
pub mod transport;
pub mod value;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use api::RecordsApi;
pub use config::RecordsConfig;
pub use document::Document;
pub use error::{RecordError, Result};
pub use record::{Record, Resource};
pub use segment::{MergeAction, Origin, Segment, SegmentKind};
pub use transport::{MemTransport, Transport};
pub use value::ValueObject;
