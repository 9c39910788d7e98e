//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod attendance_status;

pub use attendance_status::*;
