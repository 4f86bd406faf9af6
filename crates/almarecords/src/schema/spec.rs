//! Field specifications and schema tables.

use crate::segment::SegmentKind;
use crate::value::DEFAULT_DESC_KEY;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Int,
    Float,
    Flag,

    /// Coded value; `desc_key` names the description companion key.
    Coded { desc_key: &'static str },

    /// Date-only value in wire form.
    Date,

    /// Singular sub-resource, owned by value.
    Nested(&'static Schema),

    /// Repeated sub-resource reconciled through the merge policy.
    Repeated(SegmentKind, &'static Schema),
}

impl FieldKind {
    /// Short name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Flag => "flag",
            FieldKind::Coded { .. } => "coded value",
            FieldKind::Date => "date",
            FieldKind::Nested(_) => "nested resource",
            FieldKind::Repeated(..) => "repeated segments",
        }
    }
}

/// Which directions a field can be accessed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadWrite,

    /// Output parameter computed by the server (e.g. `loans`, `full_name`).
    ReadOnly,

    /// Accepted on write, never returned (e.g. `password`).
    WriteOnly,
}

/// Specification for a single wire field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire key (e.g. "primary_id").
    pub name: &'static str,

    pub kind: FieldKind,

    pub access: Access,

    /// An empty incoming value in a partial update keeps the stored one.
    pub keep_on_empty: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            access: Access::ReadWrite,
            keep_on_empty: false,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn int(name: &'static str) -> Self {
        Self::new(name, FieldKind::Int)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    pub const fn coded(name: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::Coded {
                desc_key: DEFAULT_DESC_KEY,
            },
        )
    }

    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub const fn nested(name: &'static str, schema: &'static Schema) -> Self {
        Self::new(name, FieldKind::Nested(schema))
    }

    pub const fn repeated(name: &'static str, kind: SegmentKind, schema: &'static Schema) -> Self {
        Self::new(name, FieldKind::Repeated(kind, schema))
    }

    /// Override the description key of a coded field. No-op on other kinds.
    pub const fn desc_key(mut self, key: &'static str) -> Self {
        if let FieldKind::Coded { .. } = self.kind {
            self.kind = FieldKind::Coded { desc_key: key };
        }
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.access = Access::ReadOnly;
        self
    }

    pub const fn write_only(mut self) -> Self {
        self.access = Access::WriteOnly;
        self
    }

    pub const fn keep_on_empty(mut self) -> Self {
        self.keep_on_empty = true;
        self
    }

    pub fn is_readable(&self) -> bool {
        self.access != Access::WriteOnly
    }

    pub fn is_writable(&self) -> bool {
        self.access != Access::ReadOnly
    }
}

/// The field table of one resource type.
#[derive(Debug, PartialEq)]
pub struct Schema {
    /// Resource name, used for error messages and transport paths.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field spec by wire name.
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        fields.iter().find(|spec| spec.name == name)
    }

    /// All repeated fields, in table order.
    pub fn repeated_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        fields
            .iter()
            .filter(|spec| matches!(spec.kind, FieldKind::Repeated(..)))
    }
}
