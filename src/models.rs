//! Entity and projection types for the employee/role/department schema.
//!
//! Stored entities mirror table rows. The `*Detail` types are the joined
//! read projections shown by the view actions; the `*Brief` types are the
//! (id, label) projections used to populate selection prompts.

use crate::core::{EmsError, Result};
use crate::prompt::Choice;
use crate::results_grid::Tabular;

/// A stored `employee` row.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<i64>,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields for a new employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

/// Fields for a new role.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

/// Fields for a new department.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    pub name: String,
}

/// A partial update of an employee row.
///
/// Only fields that are `Some` are written. `manager_id` is doubly optional:
/// `Some(None)` clears the manager, `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub role_id: Option<i64>,
    pub manager_id: Option<Option<i64>>,
}

impl EmployeeUpdate {
    pub fn role(role_id: i64) -> Self {
        EmployeeUpdate {
            role_id: Some(role_id),
            ..Default::default()
        }
    }

    pub fn manager(manager_id: Option<i64>) -> Self {
        EmployeeUpdate {
            manager_id: Some(manager_id),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role_id.is_none() && self.manager_id.is_none()
    }
}

/// Employee joined with role, department and manager.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub id: i64,
    pub employee_name: String,
    pub title: Option<String>,
    pub salary: Option<f64>,
    pub department: Option<String>,
    pub manager_name: Option<String>,
}

/// Role joined with its department.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDetail {
    pub title: String,
    pub salary: f64,
    pub department: Option<String>,
}

/// Department as shown by "View All Departments".
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeBrief {
    pub id: i64,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleBrief {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentBrief {
    pub id: i64,
    pub name: String,
}

const NULL: &str = "NULL";

fn or_null(value: Option<String>) -> String {
    value.unwrap_or_else(|| NULL.to_string())
}

impl Tabular for EmployeeDetail {
    fn headers() -> Vec<&'static str> {
        vec!["id", "employee_name", "title", "salary", "department", "manager_name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_name.clone(),
            or_null(self.title.clone()),
            or_null(self.salary.map(|s| s.to_string())),
            or_null(self.department.clone()),
            or_null(self.manager_name.clone()),
        ]
    }
}

impl Tabular for RoleDetail {
    fn headers() -> Vec<&'static str> {
        vec!["title", "salary", "department"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.salary.to_string(),
            or_null(self.department.clone()),
        ]
    }
}

impl Tabular for DepartmentName {
    fn headers() -> Vec<&'static str> {
        vec!["name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Label shown for the "no manager" choice.
pub const NO_MANAGER_LABEL: &str = "N/A";

/// Employee choices labelled by full name.
pub fn employee_choices(employees: Vec<EmployeeBrief>) -> Vec<Choice<EmployeeBrief>> {
    employees
        .into_iter()
        .map(|e| Choice::new(e.employee_name.clone(), e))
        .collect()
}

/// Manager candidates: every employee except `exclude`, followed by "N/A".
pub fn manager_choices(
    employees: Vec<EmployeeBrief>,
    exclude: Option<i64>,
) -> Vec<Choice<Option<i64>>> {
    let mut choices: Vec<Choice<Option<i64>>> = employees
        .into_iter()
        .filter(|e| Some(e.id) != exclude)
        .map(|e| Choice::new(e.employee_name, Some(e.id)))
        .collect();
    choices.push(Choice::new(NO_MANAGER_LABEL, None));
    choices
}

pub fn role_choices(roles: Vec<RoleBrief>) -> Vec<Choice<i64>> {
    roles.into_iter().map(|r| Choice::new(r.title, r.id)).collect()
}

pub fn department_choices(departments: Vec<DepartmentBrief>) -> Vec<Choice<i64>> {
    departments
        .into_iter()
        .map(|d| Choice::new(d.name, d.id))
        .collect()
}

/// Parses a salary answer. Accepts finite numbers strictly greater than zero.
pub fn parse_salary(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(salary) if salary.is_finite() && salary > 0.0 => Ok(salary),
        _ => Err(EmsError::Validation(
            "Salary must be a valid positive number.".to_string(),
        )),
    }
}
