//! Query Module
//!
//! Read operations: the joined "detailed" views shown by the view actions,
//! the (id, label) "brief" views that feed selection prompts, and a lookup
//! of a single stored employee.

use crate::core::db::Database;
use crate::core::{EmsError, Result};
use crate::models::{
    DepartmentBrief, DepartmentName, Employee, EmployeeBrief, EmployeeDetail, RoleBrief,
    RoleDetail,
};
use rusqlite::{OptionalExtension, Row};

const EMPLOYEES_DETAILED_SQL: &str = "
    SELECT
        e.id,
        e.first_name || ' ' || e.last_name AS employee_name,
        r.title,
        r.salary,
        d.name AS department,
        m.first_name || ' ' || m.last_name AS manager_name
    FROM employee AS e
    LEFT JOIN role AS r ON e.role_id = r.id
    LEFT JOIN department AS d ON r.department_id = d.id
    LEFT JOIN employee AS m ON e.manager_id = m.id
    ORDER BY e.id";

const ROLES_DETAILED_SQL: &str = "
    SELECT
        r.title,
        r.salary,
        d.name AS department
    FROM role AS r
    LEFT JOIN department AS d ON r.department_id = d.id
    ORDER BY r.id";

const DEPARTMENTS_SQL: &str = "SELECT name FROM department ORDER BY id";

const EMPLOYEES_BRIEF_SQL: &str =
    "SELECT id, first_name || ' ' || last_name AS employee_name FROM employee ORDER BY id";

const ROLES_BRIEF_SQL: &str = "SELECT id, title FROM role ORDER BY id";

const DEPARTMENTS_BRIEF_SQL: &str = "SELECT id, name FROM department ORDER BY id";

const FIND_EMPLOYEE_SQL: &str =
    "SELECT id, first_name, last_name, role_id, manager_id FROM employee WHERE id = ?1";

impl Database {
    /// Runs `sql` and maps every row with `map`.
    fn select<T, F>(&self, context: &str, sql: &str, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self
            .connection()
            .prepare(sql)
            .map_err(|e| EmsError::from_read(context, e))?;
        let rows = stmt
            .query_map([], map)
            .map_err(|e| EmsError::from_read(context, e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| EmsError::from_read(context, e))?;
        Ok(rows)
    }

    /// Every employee with resolved title, salary, department and manager.
    ///
    /// Missing role, department or manager produce `None` columns; no
    /// employee is ever dropped from the result.
    pub fn list_employees_detailed(&self) -> Result<Vec<EmployeeDetail>> {
        self.select(
            "Failed to list employees",
            EMPLOYEES_DETAILED_SQL,
            |row| {
                Ok(EmployeeDetail {
                    id: row.get(0)?,
                    employee_name: row.get(1)?,
                    title: row.get(2)?,
                    salary: row.get(3)?,
                    department: row.get(4)?,
                    manager_name: row.get(5)?,
                })
            },
        )
    }

    /// Every role with its department name.
    pub fn list_roles_detailed(&self) -> Result<Vec<RoleDetail>> {
        self.select("Failed to list roles", ROLES_DETAILED_SQL, |row| {
            Ok(RoleDetail {
                title: row.get(0)?,
                salary: row.get(1)?,
                department: row.get(2)?,
            })
        })
    }

    pub fn list_departments(&self) -> Result<Vec<DepartmentName>> {
        self.select("Failed to list departments", DEPARTMENTS_SQL, |row| {
            Ok(DepartmentName { name: row.get(0)? })
        })
    }

    pub fn list_employees_brief(&self) -> Result<Vec<EmployeeBrief>> {
        self.select("Failed to list employees", EMPLOYEES_BRIEF_SQL, |row| {
            Ok(EmployeeBrief {
                id: row.get(0)?,
                employee_name: row.get(1)?,
            })
        })
    }

    pub fn list_roles_brief(&self) -> Result<Vec<RoleBrief>> {
        self.select("Failed to list roles", ROLES_BRIEF_SQL, |row| {
            Ok(RoleBrief {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })
    }

    pub fn list_departments_brief(&self) -> Result<Vec<DepartmentBrief>> {
        self.select(
            "Failed to list departments",
            DEPARTMENTS_BRIEF_SQL,
            |row| {
                Ok(DepartmentBrief {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
    }

    /// Looks up the stored row for employee `id`.
    pub fn find_employee(&self, id: i64) -> Result<Option<Employee>> {
        self.connection()
            .query_row(FIND_EMPLOYEE_SQL, [id], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    role_id: row.get(3)?,
                    manager_id: row.get(4)?,
                })
            })
            .optional()
            .map_err(|e| EmsError::from_read("Failed to find employee", e))
    }
}
