//! Employee DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hrms::{Employee, EmployeeDraft};

/// Create Employee request
///
/// Missing and `null` fields become empty strings and are reported by validation.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    #[schema(example = "E1")]
    pub employee_id: Option<String>,
    #[serde(default)]
    #[schema(example = "Ana Silva")]
    pub full_name: Option<String>,
    #[serde(default)]
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "Engineering")]
    pub department: Option<String>,
}

impl From<CreateEmployeeRequest> for EmployeeDraft {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            employee_id: req.employee_id.unwrap_or_default(),
            full_name: req.full_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            department: req.department.unwrap_or_default(),
        }
    }
}

/// Employee response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    /// Store-generated identifier
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            email: employee.email,
            department: employee.department,
        }
    }
}
