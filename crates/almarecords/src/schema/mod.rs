//! # Field Schemas
//!
//! Every resource declares its wire fields once, in a static [`Schema`] table.
//! The table drives the generic accessor engine on [`Record`](crate::record::Record)
//! (`get_field` / `set_field`) and the partial-update logic in `absorb`, so
//! resource types stay declarative.
//!
//! ## Field Kinds
//!
//! | Kind | Example | Wire shape |
//! |------|---------|------------|
//! | `Text` | `primary_id` | string |
//! | `Int` | `loans` | number |
//! | `Float` | `fees` | number |
//! | `Flag` | `preferred` | bool |
//! | `Coded` | `gender` | `{"value": .., "desc": ..}` |
//! | `Date` | `expiry_date` | `"YYYY-MM-DD"` |
//! | `Nested` | `contact_info` | object |
//! | `Repeated` | `user_identifier` | array of objects |
//!
//! ## Usage
//!
//! ```ignore
//! let spec = USER_SCHEMA.get("gender").unwrap();
//! assert!(matches!(spec.kind, FieldKind::Coded { .. }));
//!
//! let value = user.as_record().get_field("gender")?;
//! user.as_record_mut().set_field("gender", FieldValue::Coded(ValueObject::new("F", "")))?;
//! ```

mod spec;
mod value;

pub use spec::{Access, FieldKind, FieldSpec, Schema};
pub use value::FieldValue;
