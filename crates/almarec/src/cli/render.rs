//! Plain-text rendering of users and field values.

use almarecords::date::WIRE_FORMAT;
use almarecords::resources::contact::CONTACT_INFO_SCHEMA;
use almarecords::resources::{User, USER_SCHEMA};
use almarecords::schema::{FieldKind, FieldValue, Schema};
use almarecords::{Origin, Resource};
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt::Write;

const DISPLAY_DATE: &str = "%d %b %Y";

fn display_date(parsed: almarecords::Result<Option<NaiveDate>>, raw: &str) -> String {
    match parsed {
        Ok(Some(date)) => date.format(DISPLAY_DATE).to_string(),
        Ok(None) => "-".to_string(),
        Err(_) => format!("{raw} (invalid)"),
    }
}

fn display_name(user: &User) -> String {
    let full = user.full_name();
    if !full.is_empty() {
        return full;
    }
    [user.first_name(), user.last_name()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per non-empty repeated field: `name  count` or, for
/// origin-partitioned kinds, `name  N internal, M external`.
fn segment_lines(user: &User, prefix: &str, schema: &Schema, out: &mut String) {
    let doc = user.as_record().document();
    for spec in schema.repeated_fields() {
        let FieldKind::Repeated(kind, _) = spec.kind else {
            continue;
        };
        let path = format!("{prefix}{}", spec.name);
        let segments = doc.sequence(&path);
        if segments.is_empty() {
            continue;
        }
        let counts = if kind.is_origin_partitioned() {
            let internal = segments
                .iter()
                .filter(|segment| Origin::of(segment) == Origin::Internal)
                .count();
            format!("{internal} internal, {} external", segments.len() - internal)
        } else {
            segments.len().to_string()
        };
        let _ = writeln!(out, "    {path:<24} {counts}");
    }
}

pub fn user_summary(user: &User) -> String {
    let mut out = String::new();
    let record = user.as_record();

    let _ = writeln!(out, "{}  {}", user.primary_id(), display_name(user));
    let _ = writeln!(out, "  group:    {}", user.user_group());
    let _ = writeln!(out, "  status:   {}", user.status());
    let _ = writeln!(
        out,
        "  expires:  {}",
        display_date(user.expiry_date(), &record.string("expiry_date"))
    );
    let _ = writeln!(
        out,
        "  loans: {}  requests: {}  fees: {:.2}",
        user.loans(),
        user.requests(),
        user.fees()
    );
    if let Some(email) = user.contact_info().preferred_email() {
        let _ = writeln!(out, "  email:    {email}");
    }

    let mut segments = String::new();
    segment_lines(user, "", &USER_SCHEMA, &mut segments);
    segment_lines(user, "contact_info.", &CONTACT_INFO_SCHEMA, &mut segments);
    if !segments.is_empty() {
        out.push_str("  segments:\n");
        out.push_str(&segments);
    }
    out
}

pub fn field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Flag(b) => b.to_string(),
        FieldValue::Coded(v) => v.to_string(),
        FieldValue::Date(Some(date)) => date.format(WIRE_FORMAT).to_string(),
        FieldValue::Date(None) => String::new(),
        FieldValue::Nested(doc) => doc.to_wire_pretty(),
        FieldValue::Repeated(docs) => {
            let items = docs.iter().map(|doc| doc.value().clone()).collect();
            format!("{:#}", Value::Array(items))
        }
    }
}
