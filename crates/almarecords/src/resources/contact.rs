//! Contact information: a singular container holding three repeated groups
//! of contact segments (addresses, emails, phones).

use crate::impl_resource;
use crate::record::{Record, Resource};
use crate::schema::{FieldSpec, Schema};
use crate::segment::SegmentKind;
use chrono::NaiveDate;

use crate::date::DateInput;
use crate::error::Result;
use crate::value::ValueObject;

pub const ADDRESS_SCHEMA: Schema = Schema {
    name: "address",
    fields: &[
        FieldSpec::text("line1"),
        FieldSpec::text("line2"),
        FieldSpec::text("line3"),
        FieldSpec::text("line4"),
        FieldSpec::text("line5"),
        FieldSpec::text("city"),
        FieldSpec::text("state_province"),
        FieldSpec::text("postal_code"),
        FieldSpec::coded("country"),
        FieldSpec::text("address_note"),
        FieldSpec::date("start_date"),
        FieldSpec::date("end_date"),
        FieldSpec::flag("preferred"),
        FieldSpec::text("segment_type"),
    ],
};

pub const EMAIL_SCHEMA: Schema = Schema {
    name: "email",
    fields: &[
        FieldSpec::text("email_address"),
        FieldSpec::text("description"),
        FieldSpec::flag("preferred"),
        FieldSpec::text("segment_type"),
    ],
};

pub const PHONE_SCHEMA: Schema = Schema {
    name: "phone",
    fields: &[
        FieldSpec::text("phone_number"),
        FieldSpec::flag("preferred"),
        FieldSpec::flag("preferred_sms"),
        FieldSpec::text("segment_type"),
    ],
};

pub const CONTACT_INFO_SCHEMA: Schema = Schema {
    name: "contact_info",
    fields: &[
        FieldSpec::repeated("address", SegmentKind::Contact, &ADDRESS_SCHEMA),
        FieldSpec::repeated("email", SegmentKind::Contact, &EMAIL_SCHEMA),
        FieldSpec::repeated("phone", SegmentKind::Contact, &PHONE_SCHEMA),
    ],
};

/// The user's contact information container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo(Record);
impl_resource!(ContactInfo, &CONTACT_INFO_SCHEMA);

impl ContactInfo {
    pub fn addresses(&self) -> Vec<Address> {
        self.0.segments("address")
    }

    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.0.set_segments("address", addresses);
    }

    pub fn emails(&self) -> Vec<Email> {
        self.0.segments("email")
    }

    pub fn set_emails(&mut self, emails: Vec<Email>) {
        self.0.set_segments("email", emails);
    }

    pub fn phones(&self) -> Vec<Phone> {
        self.0.segments("phone")
    }

    pub fn set_phones(&mut self, phones: Vec<Phone>) {
        self.0.set_segments("phone", phones);
    }

    /// The preferred email address, if any is marked preferred.
    pub fn preferred_email(&self) -> Option<String> {
        self.emails()
            .into_iter()
            .find(Email::preferred)
            .map(|email| email.email_address())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address(Record);
impl_resource!(Address, &ADDRESS_SCHEMA, SegmentKind::Contact);

impl Address {
    /// Address line `n` (1 through 5).
    pub fn line(&self, n: u8) -> String {
        self.0.string(&format!("line{n}"))
    }

    pub fn set_line(&mut self, n: u8, value: &str) {
        self.0.set_string(&format!("line{n}"), value);
    }

    pub fn city(&self) -> String {
        self.0.string("city")
    }

    pub fn set_city(&mut self, value: &str) {
        self.0.set_string("city", value);
    }

    pub fn state_province(&self) -> String {
        self.0.string("state_province")
    }

    pub fn set_state_province(&mut self, value: &str) {
        self.0.set_string("state_province", value);
    }

    pub fn postal_code(&self) -> String {
        self.0.string("postal_code")
    }

    pub fn set_postal_code(&mut self, value: &str) {
        self.0.set_string("postal_code", value);
    }

    pub fn country(&self) -> ValueObject {
        self.0.coded("country")
    }

    pub fn set_country(&mut self, code: &str, desc: &str) {
        self.0.set_coded("country", code, desc);
    }

    pub fn start_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("start_date")
    }

    pub fn set_start_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("start_date", value);
    }

    pub fn end_date(&self) -> Result<Option<NaiveDate>> {
        self.0.date("end_date")
    }

    pub fn set_end_date(&mut self, value: impl Into<DateInput>) {
        self.0.set_date("end_date", value);
    }

    pub fn preferred(&self) -> bool {
        self.0.flag("preferred")
    }

    pub fn set_preferred(&mut self, value: bool) {
        self.0.set_flag("preferred", value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Email(Record);
impl_resource!(Email, &EMAIL_SCHEMA, SegmentKind::Contact);

impl Email {
    pub fn new(address: &str) -> Self {
        let mut email = Self::empty();
        email.set_email_address(address);
        email
    }

    pub fn email_address(&self) -> String {
        self.0.string("email_address")
    }

    pub fn set_email_address(&mut self, value: &str) {
        self.0.set_string("email_address", value);
    }

    pub fn description(&self) -> String {
        self.0.string("description")
    }

    pub fn set_description(&mut self, value: &str) {
        self.0.set_string("description", value);
    }

    pub fn preferred(&self) -> bool {
        self.0.flag("preferred")
    }

    pub fn set_preferred(&mut self, value: bool) {
        self.0.set_flag("preferred", value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phone(Record);
impl_resource!(Phone, &PHONE_SCHEMA, SegmentKind::Contact);

impl Phone {
    pub fn new(number: &str) -> Self {
        let mut phone = Self::empty();
        phone.set_phone_number(number);
        phone
    }

    pub fn phone_number(&self) -> String {
        self.0.string("phone_number")
    }

    pub fn set_phone_number(&mut self, value: &str) {
        self.0.set_string("phone_number", value);
    }

    pub fn preferred(&self) -> bool {
        self.0.flag("preferred")
    }

    pub fn set_preferred(&mut self, value: bool) {
        self.0.set_flag("preferred", value);
    }

    pub fn preferred_sms(&self) -> bool {
        self.0.flag("preferred_sms")
    }

    pub fn set_preferred_sms(&mut self, value: bool) {
        self.0.set_flag("preferred_sms", value);
    }
}
