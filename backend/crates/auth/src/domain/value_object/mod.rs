//! Value Object Module

pub mod email;
pub mod person_name;
pub mod user_password;

pub use email::Email;
pub use person_name::{NamePart, PersonName};
pub use user_password::{RawPassword, UserPassword};
