//! Command Module
//!
//! Write operations: single-row inserts for the three tables and the
//! partial update of an employee. Each returns the number of rows affected.

use crate::core::db::Database;
use crate::core::{EmsError, Result};
use crate::models::{EmployeeUpdate, NewDepartment, NewEmployee, NewRole};
use rusqlite::{params, params_from_iter, types::Value};
use tracing::info;

impl Database {
    /// Inserts one employee.
    ///
    /// # Errors
    ///
    /// `EmsError::Constraint` when `role_id` or `manager_id` do not
    /// reference existing rows, `EmsError::Query` for anything else.
    pub fn insert_employee(&self, employee: &NewEmployee) -> Result<usize> {
        let affected = self
            .connection()
            .execute(
                "INSERT INTO employee (first_name, last_name, role_id, manager_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    employee.first_name,
                    employee.last_name,
                    employee.role_id,
                    employee.manager_id
                ],
            )
            .map_err(|e| EmsError::from_write("Failed to insert employee", e))?;
        info!(
            id = self.connection().last_insert_rowid(),
            affected, "inserted employee"
        );
        Ok(affected)
    }

    /// Inserts one role. Fails with `EmsError::Constraint` when the
    /// department does not exist.
    pub fn insert_role(&self, role: &NewRole) -> Result<usize> {
        let affected = self
            .connection()
            .execute(
                "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)",
                params![role.title, role.salary, role.department_id],
            )
            .map_err(|e| EmsError::from_write("Failed to insert role", e))?;
        info!(
            id = self.connection().last_insert_rowid(),
            affected, "inserted role"
        );
        Ok(affected)
    }

    pub fn insert_department(&self, department: &NewDepartment) -> Result<usize> {
        let affected = self
            .connection()
            .execute(
                "INSERT INTO department (name) VALUES (?1)",
                params![department.name],
            )
            .map_err(|e| EmsError::from_write("Failed to insert department", e))?;
        info!(
            id = self.connection().last_insert_rowid(),
            affected, "inserted department"
        );
        Ok(affected)
    }

    /// Applies `update` to employee `id`, touching only the supplied columns.
    ///
    /// Returns 0 when no employee has that id.
    ///
    /// # Errors
    ///
    /// `EmsError::Validation` for an empty update, `EmsError::Constraint`
    /// when the new role or manager does not exist.
    pub fn update_employee(&self, update: &EmployeeUpdate, id: i64) -> Result<usize> {
        if update.is_empty() {
            return Err(EmsError::Validation("Nothing to update.".to_string()));
        }

        let mut assignments = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        if let Some(role_id) = update.role_id {
            values.push(Value::Integer(role_id));
            assignments.push(format!("role_id = ?{}", values.len()));
        }
        if let Some(manager_id) = update.manager_id {
            values.push(manager_id.map_or(Value::Null, Value::Integer));
            assignments.push(format!("manager_id = ?{}", values.len()));
        }
        values.push(Value::Integer(id));
        let sql = format!(
            "UPDATE employee SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );

        let affected = self
            .connection()
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(|e| EmsError::from_write("Failed to update employee", e))?;
        info!(id, affected, ?update, "updated employee");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    fn with_role() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        db.insert_department(&NewDepartment {
            name: "Engineering".to_string(),
        })
        .unwrap();
        db.insert_role(&NewRole {
            title: "Engineer".to_string(),
            salary: 80000.0,
            department_id: 1,
        })
        .unwrap();
        (db, 1)
    }

    fn new_employee(first: &str, last: &str, role_id: i64, manager_id: Option<i64>) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            role_id,
            manager_id,
        }
    }

    #[test]
    fn test_insert_employee_returns_affected_rows() {
        let (db, role_id) = with_role();
        let affected = db
            .insert_employee(&new_employee("Ada", "Lovelace", role_id, None))
            .unwrap();
        assert_eq!(affected, 1);

        let employees = db.list_employees_brief().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].employee_name, "Ada Lovelace");
    }

    #[test]
    fn test_insert_employee_with_missing_role_is_constraint_error() {
        let (db, _) = with_role();
        match db.insert_employee(&new_employee("Ada", "Lovelace", 42, None)) {
            Err(EmsError::Constraint(msg)) => assert!(msg.contains("Failed to insert employee")),
            other => panic!("Expected Constraint error, got {:?}", other),
        }
        assert!(db.list_employees_brief().unwrap().is_empty());
    }

    #[test]
    fn test_insert_employee_with_missing_manager_is_constraint_error() {
        let (db, role_id) = with_role();
        let result = db.insert_employee(&new_employee("Ada", "Lovelace", role_id, Some(7)));
        assert!(matches!(result, Err(EmsError::Constraint(_))));
    }

    #[test]
    fn test_insert_role_with_missing_department_is_constraint_error() {
        let (db, _) = with_role();
        let result = db.insert_role(&NewRole {
            title: "Ghost".to_string(),
            salary: 1.0,
            department_id: 99,
        });
        assert!(matches!(result, Err(EmsError::Constraint(_))));
    }

    #[test]
    fn test_update_role_leaves_other_columns() {
        let (db, role_id) = with_role();
        db.insert_role(&NewRole {
            title: "Lead".to_string(),
            salary: 120000.0,
            department_id: 1,
        })
        .unwrap();
        db.insert_employee(&new_employee("Ada", "Lovelace", role_id, None))
            .unwrap();
        db.insert_employee(&new_employee("Grace", "Hopper", role_id, Some(1)))
            .unwrap();

        let affected = db.update_employee(&EmployeeUpdate::role(2), 2).unwrap();
        assert_eq!(affected, 1);

        assert_eq!(
            db.find_employee(2).unwrap().unwrap(),
            Employee {
                id: 2,
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                role_id: Some(2),
                manager_id: Some(1),
            }
        );
        assert_eq!(db.find_employee(1).unwrap().unwrap().role_id, Some(role_id));
    }

    #[test]
    fn test_update_manager_set_and_clear() {
        let (db, role_id) = with_role();
        db.insert_employee(&new_employee("Ada", "Lovelace", role_id, None))
            .unwrap();
        db.insert_employee(&new_employee("Grace", "Hopper", role_id, None))
            .unwrap();

        db.update_employee(&EmployeeUpdate::manager(Some(1)), 2).unwrap();
        let grace = db.find_employee(2).unwrap().unwrap();
        assert_eq!(grace.manager_id, Some(1));
        assert_eq!(grace.role_id, Some(role_id));

        db.update_employee(&EmployeeUpdate::manager(None), 2).unwrap();
        assert_eq!(db.find_employee(2).unwrap().unwrap().manager_id, None);
    }

    #[test]
    fn test_update_unknown_employee_affects_nothing() {
        let (db, role_id) = with_role();
        assert_eq!(db.update_employee(&EmployeeUpdate::role(role_id), 404).unwrap(), 0);
    }

    #[test]
    fn test_update_with_both_fields() {
        let (db, role_id) = with_role();
        db.insert_employee(&new_employee("Ada", "Lovelace", role_id, None))
            .unwrap();
        db.insert_employee(&new_employee("Grace", "Hopper", role_id, None))
            .unwrap();

        let update = EmployeeUpdate {
            role_id: Some(role_id),
            manager_id: Some(Some(1)),
        };
        assert_eq!(db.update_employee(&update, 2).unwrap(), 1);
        assert_eq!(db.find_employee(2).unwrap().unwrap().manager_id, Some(1));
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let (db, _) = with_role();
        let result = db.update_employee(&EmployeeUpdate::default(), 1);
        assert!(matches!(result, Err(EmsError::Validation(_))));
    }

    #[test]
    fn test_update_to_missing_manager_is_constraint_error() {
        let (db, role_id) = with_role();
        db.insert_employee(&new_employee("Ada", "Lovelace", role_id, None))
            .unwrap();
        let result = db.update_employee(&EmployeeUpdate::manager(Some(50)), 1);
        assert!(matches!(result, Err(EmsError::Constraint(_))));
    }
}
