//! Fixtures shared by unit tests and downstream crates (`test_utils` feature).

use crate::record::Resource;
use crate::resources::User;

/// A stored user with internal and external segments of several kinds.
pub const SAMPLE_USER: &str = r#"{
  "primary_id": "jdoe",
  "first_name": "Jane",
  "last_name": "Doe",
  "full_name": "Jane Doe",
  "user_group": {"value": "UNDERGRAD", "desc": "Undergraduate"},
  "status": {"value": "ACTIVE", "desc": "Active"},
  "expiry_date": "2027-05-31Z",
  "loans": 4,
  "fees": 12.5,
  "x_vendor_extension": {"keep": true},
  "contact_info": {
    "email": [
      {"email_address": "jdoe@staff.example.edu", "segment_type": "Internal"},
      {"email_address": "jdoe@example.edu", "preferred": true, "segment_type": "External"}
    ]
  },
  "user_identifier": [
    {"id_type": {"value": "BARCODE"}, "value": "B-1", "segment_type": "Internal"},
    {"id_type": {"value": "UNIV_ID"}, "value": "U-1", "segment_type": "External"}
  ],
  "user_role": [
    {"role_type": {"value": "200"}, "scope": {"value": "MAIN"}},
    {"role_type": {"value": "21"}, "scope": {"value": "MAIN"}}
  ],
  "user_note": [
    {"note_text": "Staff note", "segment_type": "Internal"},
    {"note_text": "Feed note", "segment_type": "External"}
  ]
}"#;

pub fn sample_user() -> User {
    match User::from_wire(SAMPLE_USER) {
        Ok(user) => user,
        Err(e) => panic!("SAMPLE_USER fixture is not valid JSON: {e}"),
    }
}
