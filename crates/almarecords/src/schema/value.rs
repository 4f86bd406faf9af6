//! Runtime field values for the generic accessor engine.

use super::spec::FieldKind;
use crate::document::Document;
use crate::value::ValueObject;
use chrono::NaiveDate;

/// Runtime representation of a field value.
///
/// Used for both getting and setting fields through
/// [`Record::get_field`](crate::record::Record::get_field) and
/// [`Record::set_field`](crate::record::Record::set_field).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
    Coded(ValueObject),
    Date(Option<NaiveDate>),
    Nested(Document),
    Repeated(Vec<Document>),
}

impl FieldValue {
    /// Whether this value can be stored in a field of `kind`.
    pub fn fits(&self, kind: &FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text)
                | (FieldValue::Int(_), FieldKind::Int)
                | (FieldValue::Float(_), FieldKind::Float)
                | (FieldValue::Flag(_), FieldKind::Flag)
                | (FieldValue::Coded(_), FieldKind::Coded { .. })
                | (FieldValue::Date(_), FieldKind::Date)
                | (FieldValue::Nested(_), FieldKind::Nested(_))
                | (FieldValue::Repeated(_), FieldKind::Repeated(..))
        )
    }

    /// Short name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Flag(_) => "flag",
            FieldValue::Coded(_) => "coded value",
            FieldValue::Date(_) => "date",
            FieldValue::Nested(_) => "nested resource",
            FieldValue::Repeated(_) => "repeated segments",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_coded(&self) -> Option<&ValueObject> {
        match self {
            FieldValue::Coded(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Option<NaiveDate>> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_repeated(&self) -> Option<&[Document]> {
        match self {
            FieldValue::Repeated(items) => Some(items),
            _ => None,
        }
    }
}
