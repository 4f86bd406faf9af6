//! The user resource.

use super::contact::{ContactInfo, CONTACT_INFO_SCHEMA};
use super::segments::*;
use crate::date::DateInput;
use crate::error::Result;
use crate::impl_resource;
use crate::record::Record;
use crate::schema::{FieldSpec, Schema};
use crate::segment::{MergeAction, SegmentKind};
use crate::value::ValueObject;
use chrono::NaiveDate;

pub const USER_SCHEMA: Schema = Schema {
    name: "users",
    fields: &[
        FieldSpec::coded("record_type"),
        FieldSpec::text("primary_id"),
        FieldSpec::text("first_name"),
        FieldSpec::text("middle_name"),
        FieldSpec::text("last_name"),
        FieldSpec::text("full_name").read_only(),
        FieldSpec::text("pin_number").write_only().keep_on_empty(),
        FieldSpec::coded("user_title").keep_on_empty(),
        FieldSpec::coded("job_category").keep_on_empty(),
        FieldSpec::text("job_description"),
        FieldSpec::coded("gender"),
        FieldSpec::coded("user_group").keep_on_empty(),
        FieldSpec::coded("campus_code").keep_on_empty(),
        FieldSpec::text("web_site_url"),
        FieldSpec::coded("cataloger_level"),
        FieldSpec::coded("preferred_language").keep_on_empty(),
        FieldSpec::date("birth_date"),
        FieldSpec::date("expiry_date"),
        FieldSpec::date("purge_date"),
        FieldSpec::coded("account_type"),
        FieldSpec::text("external_id"),
        FieldSpec::text("password").write_only().keep_on_empty(),
        FieldSpec::text("force_password_change").write_only(),
        FieldSpec::coded("status"),
        FieldSpec::int("requests").read_only(),
        FieldSpec::int("loans").read_only(),
        FieldSpec::float("fees").read_only(),
        FieldSpec::nested("contact_info", &CONTACT_INFO_SCHEMA),
        FieldSpec::repeated("user_identifier", SegmentKind::Identifier, &USER_IDENTIFIER_SCHEMA),
        FieldSpec::repeated("user_role", SegmentKind::Role, &USER_ROLE_SCHEMA),
        FieldSpec::repeated("user_block", SegmentKind::Block, &USER_BLOCK_SCHEMA),
        FieldSpec::repeated("user_note", SegmentKind::Note, &USER_NOTE_SCHEMA),
        FieldSpec::repeated("user_statistic", SegmentKind::Statistic, &USER_STATISTIC_SCHEMA),
        FieldSpec::repeated("proxy_for_user", SegmentKind::ProxyForUser, &PROXY_FOR_USER_SCHEMA),
        FieldSpec::repeated("rs_library", SegmentKind::Library, &RS_LIBRARY_SCHEMA),
        FieldSpec::repeated("library_notice", SegmentKind::Notice, &LIBRARY_NOTICE_SCHEMA),
        FieldSpec::text("source_link_id").read_only(),
        FieldSpec::text("source_institution_code").read_only(),
        FieldSpec::text("linking_id").read_only(),
        FieldSpec::text("link"),
    ],
};

/// A patron or staff user record.
///
/// Segment setters reconcile with the stored segments as an update (see
/// [`crate::segment::merge`]); they never blindly overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct User(Record);
impl_resource!(User, &USER_SCHEMA);

impl User {
    /// Apply an incoming partial user onto this one.
    pub fn absorb(&mut self, incoming: &User, action: MergeAction) -> Result<()> {
        self.0.absorb(&incoming.0, action)
    }

    // --- Identity ---

    pub fn record_type(&self) -> ValueObject {
        self.0.coded("record_type")
    }

    pub fn set_record_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("record_type", code, desc);
    }

    /// Case insensitive on the server side.
    pub fn primary_id(&self) -> String {
        self.0.string("primary_id")
    }

    pub fn set_primary_id(&mut self, value: &str) {
        self.0.set_string("primary_id", value);
    }

    pub fn first_name(&self) -> String {
        self.0.string("first_name")
    }

    pub fn set_first_name(&mut self, value: &str) {
        self.0.set_string("first_name", value);
    }

    pub fn middle_name(&self) -> String {
        self.0.string("middle_name")
    }

    pub fn set_middle_name(&mut self, value: &str) {
        self.0.set_string("middle_name", value);
    }

    pub fn last_name(&self) -> String {
        self.0.string("last_name")
    }

    pub fn set_last_name(&mut self, value: &str) {
        self.0.set_string("last_name", value);
    }

    /// Output parameter.
    pub fn full_name(&self) -> String {
        self.0.string("full_name")
    }

    pub fn set_pin_number(&mut self, value: &str) {
        self.0.set_string("pin_number", value);
    }

    pub fn user_title(&self) -> ValueObject {
        self.0.coded("user_title")
    }

    pub fn set_user_title(&mut self, code: &str, desc: &str) {
        self.0.set_coded("user_title", code, desc);
    }

    pub fn job_category(&self) -> ValueObject {
        self.0.coded("job_category")
    }

    pub fn set_job_category(&mut self, code: &str, desc: &str) {
        self.0.set_coded("job_category", code, desc);
    }

    pub fn job_description(&self) -> String {
        self.0.string("job_description")
    }

    pub fn set_job_description(&mut self, value: &str) {
        self.0.set_string("job_description", value);
    }

    pub fn gender(&self) -> ValueObject {
        self.0.coded("gender")
    }

    pub fn set_gender(&mut self, code: &str, desc: &str) {
        self.0.set_coded("gender", code, desc);
    }

    pub fn user_group(&self) -> ValueObject {
        self.0.coded("user_group")
    }

    pub fn set_user_group(&mut self, code: &str, desc: &str) {
        self.0.set_coded("user_group", code, desc);
    }

    pub fn campus_code(&self) -> ValueObject {
        self.0.coded("campus_code")
    }

    pub fn set_campus_code(&mut self, code: &str, desc: &str) {
        self.0.set_coded("campus_code", code, desc);
    }

    pub fn web_site_url(&self) -> String {
        self.0.string("web_site_url")
    }

    pub fn set_web_site_url(&mut self, value: &str) {
        self.0.set_string("web_site_url", value);
    }

    pub fn cataloger_level(&self) -> ValueObject {
        self.0.coded("cataloger_level")
    }

    pub fn set_cataloger_level(&mut self, code: &str, desc: &str) {
        self.0.set_coded("cataloger_level", code, desc);
    }

    pub fn preferred_language(&self) -> ValueObject {
        self.0.coded("preferred_language")
    }

    pub fn set_preferred_language(&mut self, code: &str, desc: &str) {
        self.0.set_coded("preferred_language", code, desc);
    }

    // --- Dates ---

    pub fn birth_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("birth_date")
    }

    pub fn set_birth_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("birth_date", value);
    }

    pub fn expiry_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("expiry_date")
    }

    pub fn set_expiry_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("expiry_date", value);
    }

    pub fn purge_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("purge_date")
    }

    pub fn set_purge_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("purge_date", value);
    }

    // --- Account ---

    pub fn account_type(&self) -> ValueObject {
        self.0.coded("account_type")
    }

    pub fn set_account_type(&mut self, code: &str, desc: &str) {
        self.0.set_coded("account_type", code, desc);
    }

    pub fn external_id(&self) -> String {
        self.0.string("external_id")
    }

    pub fn set_external_id(&mut self, value: &str) {
        self.0.set_string("external_id", value);
    }

    /// Internal users only. Left empty in an update, the stored password is kept.
    pub fn set_password(&mut self, value: &str) {
        self.0.set_string("password", value);
    }

    pub fn set_force_password_change(&mut self, value: bool) {
        let wire = if value { "TRUE" } else { "FALSE" };
        self.0.set_string("force_password_change", wire);
    }

    pub fn status(&self) -> ValueObject {
        self.0.coded("status")
    }

    pub fn set_status(&mut self, code: &str, desc: &str) {
        self.0.set_coded("status", code, desc);
    }

    pub fn requests(&self) -> i64 {
        self.0.int("requests")
    }

    pub fn loans(&self) -> i64 {
        self.0.int("loans")
    }

    /// Active fines/fees balance.
    pub fn fees(&self) -> f64 {
        self.0.float("fees")
    }

    // --- Contact info ---

    pub fn contact_info(&self) -> ContactInfo {
        self.0.nested("contact_info")
    }

    /// Replaces the stored contact container with a copy of `contact_info`.
    pub fn set_contact_info(&mut self, contact_info: &ContactInfo) {
        self.0.set_nested("contact_info", contact_info);
    }

    // --- Segments ---

    pub fn user_identifiers(&self) -> Vec<UserIdentifier> {
        self.0.segments("user_identifier")
    }

    pub fn set_user_identifiers(&mut self, identifiers: Vec<UserIdentifier>) {
        self.0.set_segments("user_identifier", identifiers);
    }

    pub fn user_roles(&self) -> Vec<UserRole> {
        self.0.segments("user_role")
    }

    /// An empty list keeps the stored roles; unlike every other segment.
    pub fn set_user_roles(&mut self, roles: Vec<UserRole>) {
        self.0.set_segments("user_role", roles);
    }

    pub fn user_blocks(&self) -> Vec<UserBlock> {
        self.0.segments("user_block")
    }

    pub fn set_user_blocks(&mut self, blocks: Vec<UserBlock>) {
        self.0.set_segments("user_block", blocks);
    }

    pub fn user_notes(&self) -> Vec<UserNote> {
        self.0.segments("user_note")
    }

    pub fn set_user_notes(&mut self, notes: Vec<UserNote>) {
        self.0.set_segments("user_note", notes);
    }

    pub fn user_statistics(&self) -> Vec<UserStatistic> {
        self.0.segments("user_statistic")
    }

    pub fn set_user_statistics(&mut self, statistics: Vec<UserStatistic>) {
        self.0.set_segments("user_statistic", statistics);
    }

    pub fn proxy_for_users(&self) -> Vec<ProxyForUser> {
        self.0.segments("proxy_for_user")
    }

    pub fn set_proxy_for_users(&mut self, proxies: Vec<ProxyForUser>) {
        self.0.set_segments("proxy_for_user", proxies);
    }

    pub fn rs_libraries(&self) -> Vec<RsLibrary> {
        self.0.segments("rs_library")
    }

    pub fn set_rs_libraries(&mut self, libraries: Vec<RsLibrary>) {
        self.0.set_segments("rs_library", libraries);
    }

    pub fn library_notices(&self) -> Vec<LibraryNotice> {
        self.0.segments("library_notice")
    }

    pub fn set_library_notices(&mut self, notices: Vec<LibraryNotice>) {
        self.0.set_segments("library_notice", notices);
    }

    // --- Linked accounts ---

    pub fn source_link_id(&self) -> String {
        self.0.string("source_link_id")
    }

    pub fn source_institution_code(&self) -> String {
        self.0.string("source_institution_code")
    }

    pub fn linking_id(&self) -> String {
        self.0.string("linking_id")
    }

    pub fn link(&self) -> String {
        self.0.string("link")
    }

    pub fn set_link(&mut self, value: &str) {
        self.0.set_string("link", value);
    }
}
