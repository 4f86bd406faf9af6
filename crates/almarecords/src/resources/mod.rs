//! # Resources
//!
//! Declarative resource types. Each is a newtype over [`crate::record::Record`]
//! with a `pub const` [`crate::schema::Schema`] and one typed accessor pair
//! per field; everything else comes from [`crate::record::Resource`] and,
//! for repeated segments, [`crate::segment::Segment`].
//!
//! | Type | Wire field | Segment kind |
//! |------|------------|--------------|
//! | [`User`] | (top level) | |
//! | [`ContactInfo`] | `contact_info` | |
//! | [`Address`], [`Email`], [`Phone`] | `contact_info.address` / `.email` / `.phone` | Contact |
//! | [`UserIdentifier`] | `user_identifier` | Identifier |
//! | [`UserRole`] | `user_role` | Role |
//! | [`UserBlock`] | `user_block` | Block |
//! | [`UserNote`] | `user_note` | Note |
//! | [`UserStatistic`] | `user_statistic` | Statistic |
//! | [`ProxyForUser`] | `proxy_for_user` | ProxyForUser |
//! | [`RsLibrary`] | `rs_library` | Library |
//! | [`LibraryNotice`] | `library_notice` | Notice |

pub mod contact;
pub mod segments;
pub mod user;

pub use contact::{Address, ContactInfo, Email, Phone};
pub use segments::{
    LibraryNotice, ProxyForUser, RsLibrary, UserBlock, UserIdentifier, UserNote, UserRole,
    UserStatistic,
};
pub use user::{User, USER_SCHEMA};
