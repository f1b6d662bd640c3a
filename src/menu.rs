//! Main menu entries, in display order.

use crate::prompt::{Choice, ChoiceSource};

/// An action offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewAllEmployees,
    ViewAllRoles,
    ViewAllDepartments,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    AddRole,
    AddDepartment,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::ViewAllEmployees,
        MenuAction::ViewAllRoles,
        MenuAction::ViewAllDepartments,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::UpdateEmployeeManager,
        MenuAction::AddRole,
        MenuAction::AddDepartment,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewAllEmployees => "View All Employees",
            MenuAction::ViewAllRoles => "View All Roles",
            MenuAction::ViewAllDepartments => "View All Departments",
            MenuAction::AddEmployee => "Add an Employee",
            MenuAction::UpdateEmployeeRole => "Update an Employee's Role",
            MenuAction::UpdateEmployeeManager => "Update an Employee's Manager",
            MenuAction::AddRole => "Add a Role",
            MenuAction::AddDepartment => "Add a Department",
            MenuAction::Exit => "Exit",
        }
    }

    /// The menu as a static choice list.
    pub fn choices() -> ChoiceSource<'static, MenuAction> {
        ChoiceSource::Static(
            MenuAction::ALL
                .iter()
                .map(|action| Choice::new(action.label(), *action))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<String> = MenuAction::choices()
            .resolve()
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "View All Employees",
                "View All Roles",
                "View All Departments",
                "Add an Employee",
                "Update an Employee's Role",
                "Update an Employee's Manager",
                "Add a Role",
                "Add a Department",
                "Exit",
            ]
        );
    }

    #[test]
    fn test_exit_is_last() {
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Exit));
    }
}
