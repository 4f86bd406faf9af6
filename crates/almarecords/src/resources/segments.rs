//! Repeated user segments other than contact information.

use crate::date::DateInput;
use crate::error::Result;
use crate::impl_resource;
use crate::record::{Record, Resource};
use crate::schema::{FieldSpec, Schema};
use crate::segment::SegmentKind;
use crate::value::ValueObject;
use chrono::NaiveDate;

pub const USER_IDENTIFIER_SCHEMA: Schema = Schema {
    name: "user_identifier",
    fields: &[
        FieldSpec::coded("id_type"),
        FieldSpec::text("value"),
        FieldSpec::text("note"),
        FieldSpec::text("status"),
        FieldSpec::text("segment_type"),
    ],
};

pub const USER_ROLE_SCHEMA: Schema = Schema {
    name: "user_role",
    fields: &[
        FieldSpec::coded("status"),
        FieldSpec::coded("scope"),
        FieldSpec::coded("role_type"),
        FieldSpec::date("expiry_date"),
    ],
};

pub const USER_BLOCK_SCHEMA: Schema = Schema {
    name: "user_block",
    fields: &[
        FieldSpec::coded("block_type"),
        FieldSpec::coded("block_description"),
        FieldSpec::text("block_status"),
        FieldSpec::text("block_note"),
        FieldSpec::text("created_by"),
        FieldSpec::text("created_date"),
        FieldSpec::date("expiry_date"),
        FieldSpec::text("segment_type"),
    ],
};

pub const USER_NOTE_SCHEMA: Schema = Schema {
    name: "user_note",
    fields: &[
        FieldSpec::coded("note_type"),
        FieldSpec::text("note_text"),
        FieldSpec::flag("user_viewable"),
        FieldSpec::flag("popup_note"),
        FieldSpec::text("created_by"),
        FieldSpec::text("created_date"),
        FieldSpec::text("segment_type"),
    ],
};

pub const USER_STATISTIC_SCHEMA: Schema = Schema {
    name: "user_statistic",
    fields: &[
        FieldSpec::coded("statistic_category"),
        FieldSpec::coded("category_type"),
        FieldSpec::text("statistic_note"),
        FieldSpec::text("segment_type"),
    ],
};

pub const PROXY_FOR_USER_SCHEMA: Schema = Schema {
    name: "proxy_for_user",
    fields: &[
        FieldSpec::text("primary_id"),
        FieldSpec::text("full_name").read_only(),
        FieldSpec::text("segment_type"),
    ],
};

pub const RS_LIBRARY_SCHEMA: Schema = Schema {
    name: "rs_library",
    fields: &[FieldSpec::coded("code"), FieldSpec::text("segment_type")],
};

pub const LIBRARY_NOTICE_SCHEMA: Schema = Schema {
    name: "library_notice",
    fields: &[
        FieldSpec::coded("code"),
        FieldSpec::flag("value"),
        FieldSpec::text("segment_type"),
    ],
};

/// An additional identifier (barcode, university id, ...). Case sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentifier(Record);
impl_resource!(UserIdentifier, &USER_IDENTIFIER_SCHEMA, SegmentKind::Identifier);

impl UserIdentifier {
    pub fn new(id_type: &str, value: &str) -> Self {
        let mut identifier = Self::empty();
        identifier.set_id_type(id_type, "");
        identifier.set_value(value);
        identifier
    }

    pub fn id_type(&self) -> ValueObject {
        self.0.coded("id_type")
    }

    pub fn set_id_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("id_type", code, desc);
    }

    pub fn value(&self) -> String {
        self.0.string("value")
    }

    pub fn set_value(&mut self, value: &str) {
        self.0.set_string("value", value);
    }

    pub fn note(&self) -> String {
        self.0.string("note")
    }

    pub fn set_note(&mut self, value: &str) {
        self.0.set_string("note", value);
    }

    pub fn status(&self) -> String {
        self.0.string("status")
    }

    pub fn set_status(&mut self, value: &str) {
        self.0.set_string("status", value);
    }
}

/// A role. Roles carry no origin and are merged as one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRole(Record);
impl_resource!(UserRole, &USER_ROLE_SCHEMA, SegmentKind::Role);

impl UserRole {
    pub fn new(role_type: &str, scope: &str) -> Self {
        let mut role = Self::empty();
        role.set_role_type(role_type, "");
        role.set_scope(scope, "");
        role
    }

    pub fn status(&self) -> ValueObject {
        self.0.coded("status")
    }

    pub fn set_status(&mut self, code: &str, desc: &str) {
        self.0.set_coded("status", code, desc);
    }

    pub fn scope(&self) -> ValueObject {
        self.0.coded("scope")
    }

    pub fn set_scope(&mut self, code: &str, desc: &str) {
        self.0.set_coded("scope", code, desc);
    }

    pub fn role_type(&self) -> ValueObject {
        self.0.coded("role_type")
    }

    pub fn set_role_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("role_type", code, desc);
    }

    pub fn expiry_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("expiry_date")
    }

    pub fn set_expiry_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("expiry_date", value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserBlock(Record);
impl_resource!(UserBlock, &USER_BLOCK_SCHEMA, SegmentKind::Block);

impl UserBlock {
    pub fn block_type(&self) -> ValueObject {
        self.0.coded("block_type")
    }

    pub fn set_block_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("block_type", code, desc);
    }

    pub fn block_description(&self) -> ValueObject {
        self.0.coded("block_description")
    }

    pub fn set_block_description(&mut self, code: &str, desc: &str) {
        self.0.set_coded("block_description", code, desc);
    }

    pub fn block_status(&self) -> String {
        self.0.string("block_status")
    }

    pub fn set_block_status(&mut self, value: &str) {
        self.0.set_string("block_status", value);
    }

    pub fn block_note(&self) -> String {
        self.0.string("block_note")
    }

    pub fn set_block_note(&mut self, value: &str) {
        self.0.set_string("block_note", value);
    }

    pub fn created_by(&self) -> String {
        self.0.string("created_by")
    }

    pub fn expiry_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("expiry_date")
    }

    pub fn set_expiry_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("expiry_date", value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserNote(Record);
impl_resource!(UserNote, &USER_NOTE_SCHEMA, SegmentKind::Note);

impl UserNote {
    pub fn new(text: &str) -> Self {
        let mut note = Self::empty();
        note.set_note_text(text);
        note
    }

    pub fn note_type(&self) -> ValueObject {
        self.0.coded("note_type")
    }

    pub fn set_note_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("note_type", code, desc);
    }

    pub fn note_text(&self) -> String {
        self.0.string("note_text")
    }

    pub fn set_note_text(&mut self, value: &str) {
        self.0.set_string("note_text", value);
    }

    pub fn user_viewable(&self) -> bool {
        self.0.flag("user_viewable")
    }

    pub fn set_user_viewable(&mut self, value: bool) {
        self.0.set_flag("user_viewable", value);
    }

    pub fn popup_note(&self) -> bool {
        self.0.flag("popup_note")
    }

    pub fn set_popup_note(&mut self, value: bool) {
        self.0.set_flag("popup_note", value);
    }

    pub fn created_by(&self) -> String {
        self.0.string("created_by")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatistic(Record);
impl_resource!(UserStatistic, &USER_STATISTIC_SCHEMA, SegmentKind::Statistic);

impl UserStatistic {
    pub fn statistic_category(&self) -> ValueObject {
        self.0.coded("statistic_category")
    }

    pub fn set_statistic_category(&mut self, code: &str, desc: &str) {
        self.0.set_coded("statistic_category", code, desc);
    }

    pub fn category_type(&self) -> ValueObject {
        self.0.coded("category_type")
    }

    pub fn set_category_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("category_type", code, desc);
    }

    pub fn statistic_note(&self) -> String {
        self.0.string("statistic_note")
    }

    pub fn set_statistic_note(&mut self, value: &str) {
        self.0.set_string("statistic_note", value);
    }
}

/// A user this user acts as proxy for.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyForUser(Record);
impl_resource!(ProxyForUser, &PROXY_FOR_USER_SCHEMA, SegmentKind::ProxyForUser);

impl ProxyForUser {
    pub fn new(primary_id: &str) -> Self {
        let mut proxy = Self::empty();
        proxy.set_primary_id(primary_id);
        proxy
    }

    pub fn primary_id(&self) -> String {
        self.0.string("primary_id")
    }

    pub fn set_primary_id(&mut self, value: &str) {
        self.0.set_string("primary_id", value);
    }

    pub fn full_name(&self) -> String {
        self.0.string("full_name")
    }
}

/// A related resource sharing library.
#[derive(Debug, Clone, PartialEq)]
pub struct RsLibrary(Record);
impl_resource!(RsLibrary, &RS_LIBRARY_SCHEMA, SegmentKind::Library);

impl RsLibrary {
    pub fn new(code: &str, desc: &str) -> Self {
        let mut library = Self::empty();
        library.set_code(code, desc);
        library
    }

    pub fn code(&self) -> ValueObject {
        self.0.coded("code")
    }

    pub fn set_code(&mut self, code: &str, desc: &str) {
        self.0.set_coded("code", code, desc);
    }
}

/// A library notice opt-in.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryNotice(Record);
impl_resource!(LibraryNotice, &LIBRARY_NOTICE_SCHEMA, SegmentKind::Notice);

impl LibraryNotice {
    pub fn new(code: &str, value: bool) -> Self {
        let mut notice = Self::empty();
        notice.set_code(code, "");
        notice.set_value(value);
        notice
    }

    pub fn code(&self) -> ValueObject {
        self.0.coded("code")
    }

    pub fn set_code(&mut self, code: &str, desc: &str) {
        self.0.set_coded("code", code, desc);
    }

    pub fn value(&self) -> bool {
        self.0.flag("value")
    }

    pub fn set_value(&mut self, value: bool) {
        self.0.set_flag("value", value);
    }
}
