//! # Records
//!
//! A [`Record`] owns exactly one [`Document`] plus the [`Schema`] describing
//! it. Resource types (`User`, `UserNote`, ...) are thin wrappers that
//! implement [`Resource`] and expose one typed accessor per schema field.
//!
//! ## Accessors
//!
//! Typed accessors are total over absent data:
//!
//! | Accessor | Missing field |
//! |----------|---------------|
//! | [`Record::string`] | `""` |
//! | [`Record::int`] | `0` |
//! | [`Record::float`] | `0.0` |
//! | [`Record::flag`] | `false` |
//! | [`Record::coded`] | empty [`ValueObject`] |
//! | [`Record::date`] | `Ok(None)` |
//! | [`Record::nested`] | empty resource |
//! | [`Record::segments`] | empty `Vec` |
//!
//! Only [`Record::date`] can fail, and only on a malformed non-empty value.
//!
//! The generic engine ([`Record::get_field`] / [`Record::set_field`]) goes
//! through the schema and fails loudly with
//! [`RecordError::SchemaMismatch`] when asked for a field or kind the schema
//! does not define.
//!
//! ## Partial Updates
//!
//! [`Record::absorb`] applies an incoming partial record onto a stored one:
//! fields present in the incoming document overwrite, repeated fields go
//! through the segment merge policy, nested resources recurse.

use crate::date::{self, DateInput};
use crate::document::Document;
use crate::error::{RecordError, Result};
use crate::schema::{FieldKind, FieldValue, Schema};
use crate::segment::{MergeAction, Segment, SegmentCollection, SegmentKind};
use crate::value::{ValueObject, DEFAULT_DESC_KEY};
use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: &'static Schema,
    doc: Document,
}

impl Record {
    /// An empty record (new resource).
    pub fn new(schema: &'static Schema) -> Self {
        Self::with_document(schema, Document::new())
    }

    /// Wrap a document, e.g. one parsed from a server response.
    pub fn with_document(schema: &'static Schema, doc: Document) -> Self {
        Self { schema, doc }
    }

    pub fn from_wire(schema: &'static Schema, wire: &str) -> Result<Self> {
        Ok(Self::with_document(schema, Document::from_wire(wire)?))
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn to_wire(&self) -> String {
        self.doc.to_wire()
    }

    pub fn to_wire_pretty(&self) -> String {
        self.doc.to_wire_pretty()
    }

    // --- Scalars ---

    pub fn string(&self, field: &str) -> String {
        match self.doc.lookup(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(_) => {
                debug!("{}.{field} is not a scalar, reading as empty", self.schema.name);
                String::new()
            }
        }
    }

    pub fn set_string(&mut self, field: &str, value: impl Into<String>) {
        self.doc.set(field, value.into());
    }

    pub fn int(&self, field: &str) -> i64 {
        match self.doc.lookup(field) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or_default(),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or_default()
            }
            Some(Value::Bool(b)) => i64::from(*b),
            _ => 0,
        }
    }

    pub fn set_int(&mut self, field: &str, value: i64) {
        self.doc.set(field, value);
    }

    pub fn float(&self, field: &str) -> f64 {
        match self.doc.lookup(field) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            Some(Value::Bool(b)) => f64::from(u8::from(*b)),
            _ => 0.0,
        }
    }

    pub fn set_float(&mut self, field: &str, value: f64) {
        self.doc.set(field, value);
    }

    pub fn flag(&self, field: &str) -> bool {
        match self.doc.lookup(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
            }
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        }
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.doc.set(field, value);
    }

    // --- Coded values ---

    fn desc_key(&self, field: &str) -> &'static str {
        match self.schema.get(field).map(|spec| spec.kind) {
            Some(FieldKind::Coded { desc_key }) => desc_key,
            _ => DEFAULT_DESC_KEY,
        }
    }

    pub fn coded(&self, field: &str) -> ValueObject {
        ValueObject::read_with(&self.doc, field, self.desc_key(field))
    }

    /// Write a coded value. An empty description clears the stored one.
    pub fn set_coded(&mut self, field: &str, code: &str, description: &str) {
        let desc_key = self.desc_key(field);
        ValueObject::write_with(&mut self.doc, field, desc_key, code, description);
    }

    // --- Dates ---

    pub fn date(&self, field: &str) -> Result<Option<NaiveDate>> {
        date::decode(&self.string(field))
    }

    pub fn set_date(&mut self, field: &str, value: impl Into<DateInput>) {
        self.doc.set(field, date::encode(value));
    }

    // --- Nested resources ---

    /// The child at `field`, wrapped in its own resource type.
    pub fn nested<T: Resource>(&self, field: &str) -> T {
        T::from_document(self.doc.child(field))
    }

    /// Replace the child at `field` with a copy of `child`'s document.
    pub fn set_nested<T: Resource>(&mut self, field: &str, child: &T) {
        self.doc.set_child(field, child.as_record().document());
    }

    // --- Repeated segments ---

    pub fn collection<'a>(&'a mut self, field: &'a str, kind: SegmentKind) -> SegmentCollection<'a> {
        SegmentCollection::new(&mut self.doc, field, kind)
    }

    pub fn segments<T: Segment>(&self, field: &str) -> Vec<T> {
        self.doc
            .sequence(field)
            .into_iter()
            .map(T::from_document)
            .collect()
    }

    /// Reconcile `incoming` with the stored segments as an update.
    pub fn set_segments<T: Segment>(&mut self, field: &str, incoming: Vec<T>) {
        self.set_segments_with(field, incoming, MergeAction::Update);
    }

    pub fn set_segments_with<T: Segment>(
        &mut self,
        field: &str,
        incoming: Vec<T>,
        action: MergeAction,
    ) {
        self.collection(field, T::KIND).set_with(incoming, action);
    }

    // --- Generic engine ---

    fn mismatch(&self, field: &str, reason: impl Into<String>) -> RecordError {
        RecordError::mismatch(self.schema.name, field, reason)
    }

    /// Read any field the schema defines.
    pub fn get_field(&self, name: &str) -> Result<FieldValue> {
        let spec = self
            .schema
            .get(name)
            .ok_or_else(|| self.mismatch(name, "field is not defined"))?;
        if !spec.is_readable() {
            return Err(self.mismatch(name, "field is write-only"));
        }

        let value = match spec.kind {
            FieldKind::Text => FieldValue::Text(self.string(name)),
            FieldKind::Int => FieldValue::Int(self.int(name)),
            FieldKind::Float => FieldValue::Float(self.float(name)),
            FieldKind::Flag => FieldValue::Flag(self.flag(name)),
            FieldKind::Coded { .. } => FieldValue::Coded(self.coded(name)),
            FieldKind::Date => FieldValue::Date(self.date(name)?),
            FieldKind::Nested(_) => FieldValue::Nested(self.doc.child(name)),
            FieldKind::Repeated(..) => FieldValue::Repeated(self.doc.sequence(name)),
        };
        Ok(value)
    }

    /// Write any field the schema defines. Repeated fields are merged as an update.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let spec = self
            .schema
            .get(name)
            .ok_or_else(|| self.mismatch(name, "field is not defined"))?;
        if !spec.is_writable() {
            return Err(self.mismatch(name, "field is read-only"));
        }
        if !value.fits(&spec.kind) {
            return Err(self.mismatch(
                name,
                format!("expected {}, got {}", spec.kind.label(), value.label()),
            ));
        }

        match (value, spec.kind) {
            (FieldValue::Text(s), _) => self.set_string(name, s),
            (FieldValue::Int(i), _) => self.set_int(name, i),
            (FieldValue::Float(f), _) => self.set_float(name, f),
            (FieldValue::Flag(b), _) => self.set_flag(name, b),
            (FieldValue::Coded(v), _) => self.set_coded(name, &v.code, &v.description),
            (FieldValue::Date(d), _) => self.set_date(name, d),
            (FieldValue::Nested(child), _) => self.doc.set_child(name, &child),
            (FieldValue::Repeated(items), FieldKind::Repeated(kind, _)) => self
                .collection(name, kind)
                .merge_documents(items, MergeAction::Update),
            (FieldValue::Repeated(_), _) => {
                return Err(self.mismatch(name, "expected repeated segments"));
            }
        }
        Ok(())
    }

    // --- Partial updates ---

    /// Apply `incoming` onto this record as one partial update.
    pub fn absorb(&mut self, incoming: &Record, action: MergeAction) -> Result<()> {
        if self.schema.name != incoming.schema.name {
            return Err(self.mismatch(
                "",
                format!("cannot absorb a {} record", incoming.schema.name),
            ));
        }
        absorb_document(&mut self.doc, &incoming.doc, self.schema, action);
        Ok(())
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => map.values().all(is_empty_value),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn absorb_document(
    target: &mut Document,
    incoming: &Document,
    schema: &'static Schema,
    action: MergeAction,
) {
    for (name, value) in incoming.fields() {
        let Some(spec) = schema.get(name) else {
            target.set_field(name, value.clone());
            continue;
        };

        if !spec.is_writable() {
            debug!("{}.{name} is read-only, ignoring incoming value", schema.name);
            continue;
        }
        if spec.keep_on_empty && is_empty_value(value) {
            debug!("{}.{name} is empty in the update, keeping stored value", schema.name);
            continue;
        }

        match spec.kind {
            FieldKind::Repeated(kind, _) => {
                let segments = incoming.sequence(name);
                SegmentCollection::new(target, name, kind).merge_documents(segments, action);
            }
            FieldKind::Nested(child_schema) => {
                let mut child = target.child(name);
                absorb_document(&mut child, &incoming.child(name), child_schema, action);
                target.set_field(name, child.into_value());
            }
            _ => target.set_field(name, value.clone()),
        }
    }
}

/// A typed wrapper over a [`Record`] with a fixed schema.
pub trait Resource: Sized {
    const SCHEMA: &'static Schema;

    fn from_record(record: Record) -> Self;

    fn as_record(&self) -> &Record;

    fn as_record_mut(&mut self) -> &mut Record;

    fn into_record(self) -> Record;

    /// An empty resource.
    fn empty() -> Self {
        Self::from_record(Record::new(Self::SCHEMA))
    }

    fn from_document(doc: Document) -> Self {
        Self::from_record(Record::with_document(Self::SCHEMA, doc))
    }

    fn into_document(self) -> Document {
        self.into_record().into_document()
    }

    fn from_wire(wire: &str) -> Result<Self> {
        Record::from_wire(Self::SCHEMA, wire).map(Self::from_record)
    }

    fn to_wire(&self) -> String {
        self.as_record().to_wire()
    }

    fn to_wire_pretty(&self) -> String {
        self.as_record().to_wire_pretty()
    }
}

/// Implements [`Resource`] (and `Default`) for a newtype over [`Record`].
#[macro_export]
macro_rules! impl_resource {
    ($ty:ident, $schema:expr) => {
        impl $crate::record::Resource for $ty {
            const SCHEMA: &'static $crate::schema::Schema = $schema;

            fn from_record(record: $crate::record::Record) -> Self {
                Self(record)
            }

            fn as_record(&self) -> &$crate::record::Record {
                &self.0
            }

            fn as_record_mut(&mut self) -> &mut $crate::record::Record {
                &mut self.0
            }

            fn into_record(self) -> $crate::record::Record {
                self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <Self as $crate::record::Resource>::empty()
            }
        }
    };
    ($ty:ident, $schema:expr, $kind:expr) => {
        $crate::impl_resource!($ty, $schema);

        impl $crate::segment::Segment for $ty {
            const KIND: $crate::segment::SegmentKind = $kind;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use serde_json::json;

    const TAG: Schema = Schema {
        name: "tag",
        fields: &[FieldSpec::text("label"), FieldSpec::text("segment_type")],
    };

    const HOLDER: Schema = Schema {
        name: "holder",
        fields: &[FieldSpec::repeated("tag", SegmentKind::Note, &TAG)],
    };

    const PERSON: Schema = Schema {
        name: "person",
        fields: &[
            FieldSpec::text("primary_id"),
            FieldSpec::coded("gender"),
            FieldSpec::coded("campus_code").desc_key("label"),
            FieldSpec::int("loans").read_only(),
            FieldSpec::float("fees").read_only(),
            FieldSpec::flag("active"),
            FieldSpec::date("expiry_date"),
            FieldSpec::text("password").write_only().keep_on_empty(),
            FieldSpec::nested("holder", &HOLDER),
            FieldSpec::repeated("tag", SegmentKind::Note, &TAG),
            FieldSpec::repeated("role", SegmentKind::Role, &TAG),
        ],
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(Record);
    impl_resource!(Tag, &TAG, SegmentKind::Note);

    impl Tag {
        fn new(label: &str, origin: &str) -> Self {
            let mut tag = Tag::empty();
            tag.0.set_string("label", label);
            if !origin.is_empty() {
                tag.0.set_string("segment_type", origin);
            }
            tag
        }

        fn label(&self) -> String {
            self.0.string("label")
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Holder(Record);
    impl_resource!(Holder, &HOLDER);

    fn person(value: serde_json::Value) -> Record {
        Record::with_document(&PERSON, Document::from(value))
    }

    fn tag_labels(record: &Record, field: &str) -> Vec<String> {
        record.segments::<Tag>(field).iter().map(Tag::label).collect()
    }

    #[test]
    fn missing_fields_read_as_zero_values() {
        let record = Record::new(&PERSON);
        assert_eq!(record.string("primary_id"), "");
        assert_eq!(record.int("loans"), 0);
        assert_eq!(record.float("fees"), 0.0);
        assert!(!record.flag("active"));
        assert!(record.coded("gender").is_empty());
        assert_eq!(record.date("expiry_date").unwrap(), None);
        assert!(record.segments::<Tag>("tag").is_empty());
        assert!(record.nested::<Holder>("holder").as_record().document().is_empty());
    }

    #[test]
    fn scalars_are_coerced() {
        let record = person(json!({
            "primary_id": 42,
            "loans": "7",
            "fees": "12.50",
            "active": "TRUE"
        }));
        assert_eq!(record.string("primary_id"), "42");
        assert_eq!(record.int("loans"), 7);
        assert_eq!(record.float("fees"), 12.5);
        assert!(record.flag("active"));

        let record = person(json!({"loans": 3.9, "fees": 4, "active": 0}));
        assert_eq!(record.int("loans"), 3);
        assert_eq!(record.float("fees"), 4.0);
        assert!(!record.flag("active"));
    }

    #[test]
    fn coded_uses_schema_description_key() {
        let mut record = Record::new(&PERSON);
        record.set_coded("campus_code", "MAIN", "Main campus");
        assert_eq!(
            record.document().lookup("campus_code"),
            Some(&json!({"value": "MAIN", "label": "Main campus"}))
        );
        assert_eq!(record.coded("campus_code").description, "Main campus");
    }

    #[test]
    fn coded_clearing_description() {
        let mut record = person(json!({"gender": {"value": "F", "desc": "Female"}}));
        record.set_coded("gender", "M", "");
        let gender = record.coded("gender");
        assert_eq!(gender.code, "M");
        assert_eq!(gender.description, "");
    }

    #[test]
    fn dates_round_trip_and_fail_on_garbage() {
        let mut record = Record::new(&PERSON);
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        record.set_date("expiry_date", date);
        assert_eq!(record.string("expiry_date"), "2024-03-15");
        assert_eq!(record.date("expiry_date").unwrap(), Some(date));

        record.set_string("expiry_date", "not-a-date");
        assert!(matches!(
            record.date("expiry_date"),
            Err(RecordError::DateFormat { .. })
        ));
    }

    #[test]
    fn set_nested_copies_the_child() {
        let mut holder = Holder::empty();
        holder.as_record_mut().set_string("note", "first");

        let mut record = Record::new(&PERSON);
        record.set_nested("holder", &holder);
        holder.as_record_mut().set_string("note", "changed later");

        assert_eq!(record.nested::<Holder>("holder").as_record().string("note"), "first");
    }

    #[test]
    fn set_segments_merges_instead_of_overwriting() {
        let mut record = person(json!({
            "tag": [
                {"label": "staff", "segment_type": "Internal"},
                {"label": "feed", "segment_type": "External"}
            ]
        }));
        record.set_segments("tag", vec![Tag::new("new feed", "")]);
        assert_eq!(tag_labels(&record, "tag"), vec!["staff", "new feed"]);

        record.set_segments::<Tag>("tag", vec![]);
        assert_eq!(tag_labels(&record, "tag"), vec!["staff"]);
    }

    #[test]
    fn empty_role_update_keeps_roles() {
        let mut record = person(json!({"role": [{"label": "R1"}, {"label": "R2"}]}));
        record.set_segments_with::<Tag>("role", vec![], MergeAction::Update);
        assert_eq!(tag_labels(&record, "role"), vec!["R1", "R2"]);
    }

    #[test]
    fn segment_origin_accessors() {
        use crate::segment::Origin;
        let mut tag = Tag::new("x", "");
        assert_eq!(tag.origin(), Origin::External);
        tag.set_origin(Origin::Internal);
        assert_eq!(tag.origin(), Origin::Internal);
    }

    #[test]
    fn get_field_dispatches_on_kind() {
        let record = person(json!({
            "primary_id": "jdoe",
            "gender": {"value": "F"},
            "loans": 2,
            "tag": [{"label": "a"}]
        }));
        assert_eq!(record.get_field("primary_id").unwrap(), FieldValue::Text("jdoe".into()));
        assert_eq!(record.get_field("loans").unwrap(), FieldValue::Int(2));
        assert_eq!(
            record.get_field("gender").unwrap().as_coded().map(|v| v.code.clone()),
            Some("F".to_string())
        );
        assert_eq!(record.get_field("tag").unwrap().as_repeated().map(<[_]>::len), Some(1));
    }

    #[test]
    fn get_field_rejects_unknown_and_write_only() {
        let record = Record::new(&PERSON);
        assert!(matches!(
            record.get_field("nickname"),
            Err(RecordError::SchemaMismatch { field, .. }) if field == "nickname"
        ));
        assert!(matches!(
            record.get_field("password"),
            Err(RecordError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn set_field_rejects_wrong_kind_and_read_only() {
        let mut record = Record::new(&PERSON);
        assert!(matches!(
            record.set_field("primary_id", FieldValue::Int(1)),
            Err(RecordError::SchemaMismatch { .. })
        ));
        assert!(matches!(
            record.set_field("loans", FieldValue::Int(1)),
            Err(RecordError::SchemaMismatch { .. })
        ));
        assert!(record.document().is_empty());
    }

    #[test]
    fn set_field_writes_through_typed_accessors() {
        let mut record = Record::new(&PERSON);
        record
            .set_field("gender", FieldValue::Coded(ValueObject::new("M", "Male")))
            .unwrap();
        record
            .set_field("expiry_date", FieldValue::Date(NaiveDate::from_ymd_opt(2030, 1, 1)))
            .unwrap();
        record.set_field("password", FieldValue::Text("s3cret".into())).unwrap();
        assert_eq!(
            record.document().value(),
            &json!({
                "gender": {"value": "M", "desc": "Male"},
                "expiry_date": "2030-01-01",
                "password": "s3cret"
            })
        );
    }

    #[test]
    fn absorb_overwrites_present_fields_only() {
        let mut stored = person(json!({
            "primary_id": "jdoe",
            "gender": {"value": "F"},
            "x_local": "kept"
        }));
        let incoming = person(json!({"gender": {"value": "M"}, "x_new": [1]}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();
        assert_eq!(
            stored.document().value(),
            &json!({
                "primary_id": "jdoe",
                "gender": {"value": "M"},
                "x_local": "kept",
                "x_new": [1]
            })
        );
    }

    #[test]
    fn absorb_skips_read_only_and_empty_keep_fields() {
        let mut stored = person(json!({"loans": 3, "password": "old"}));
        let incoming = person(json!({"loans": 99, "password": ""}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();
        assert_eq!(stored.int("loans"), 3);
        assert_eq!(stored.string("password"), "old");
    }

    #[test]
    fn absorb_merges_present_repeated_fields() {
        let mut stored = person(json!({
            "tag": [
                {"label": "I1", "segment_type": "Internal"},
                {"label": "E1", "segment_type": "External"}
            ],
            "role": [{"label": "R1"}]
        }));
        let incoming = person(json!({"tag": [], "role": []}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();
        assert_eq!(tag_labels(&stored, "tag"), vec!["I1"]);
        assert_eq!(tag_labels(&stored, "role"), vec!["R1"]);
    }

    #[test]
    fn absorb_leaves_absent_repeated_fields_alone() {
        let mut stored = person(json!({"tag": [{"label": "E1"}]}));
        let incoming = person(json!({"primary_id": "jdoe"}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();
        assert_eq!(tag_labels(&stored, "tag"), vec!["E1"]);
    }

    #[test]
    fn absorb_recurses_into_nested_resources() {
        let mut stored = person(json!({
            "holder": {
                "tag": [
                    {"label": "I1", "segment_type": "Internal"},
                    {"label": "E1", "segment_type": "External"}
                ],
                "extra": true
            }
        }));
        let incoming = person(json!({"holder": {"tag": [{"label": "E2"}]}}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();

        let holder: Holder = stored.nested("holder");
        assert_eq!(tag_labels(holder.as_record(), "tag"), vec!["I1", "E2"]);
        assert!(holder.as_record().flag("extra"));
    }

    #[test]
    fn absorb_keeps_dotted_unknown_keys() {
        let mut stored = person(json!({"primary_id": "jdoe"}));
        let incoming = person(json!({"gender": {"value": "F"}, "vendor.ext": {"k": 1}}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();
        assert_eq!(
            stored.document().value(),
            &json!({
                "primary_id": "jdoe",
                "gender": {"value": "F"},
                "vendor.ext": {"k": 1}
            })
        );
    }

    #[test]
    fn absorb_treats_empty_key_as_a_field() {
        let mut stored = person(json!({"primary_id": "jdoe", "role": [{"label": "R1"}]}));
        let incoming = person(json!({"": "x", "gender": {"value": "F"}}));
        stored.absorb(&incoming, MergeAction::Update).unwrap();
        assert_eq!(stored.string("primary_id"), "jdoe");
        assert_eq!(tag_labels(&stored, "role"), vec!["R1"]);
        assert_eq!(stored.document().value()[""], json!("x"));
        assert_eq!(stored.coded("gender").code, "F");
    }

    #[test]
    fn absorb_rejects_other_schema() {
        let mut stored = Record::new(&PERSON);
        let incoming = Record::new(&TAG);
        assert!(matches!(
            stored.absorb(&incoming, MergeAction::Update),
            Err(RecordError::SchemaMismatch { .. })
        ));
    }
}
