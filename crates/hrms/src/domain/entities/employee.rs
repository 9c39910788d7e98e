//! Employee - Directory record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned opaque identifier
    pub id: Uuid,
    /// External business identifier, unique across the directory
    pub employee_id: String,
    pub full_name: String,
    /// Unique across the directory
    pub email: String,
    pub department: String,
}

/// Employee input that has passed structural validation.
///
/// Only obtainable through [`EmployeeDraft::validate`](crate::domain::EmployeeDraft::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub(crate) employee_id: String,
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) department: String,
}

impl NewEmployee {
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Attach the identifier assigned by the store
    pub fn into_employee(self, id: Uuid) -> Employee {
        Employee {
            id,
            employee_id: self.employee_id,
            full_name: self.full_name,
            email: self.email,
            department: self.department,
        }
    }
}
