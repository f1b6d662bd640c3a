//! Interaction loop: shows the main menu, runs the chosen action and comes
//! back to the menu until the user exits or input ends.

use crate::core::{Database, EmsError, Result};
use crate::menu::MenuAction;
use crate::models::{
    department_choices, employee_choices, manager_choices, parse_salary, role_choices,
    EmployeeBrief, EmployeeUpdate, NewDepartment, NewEmployee, NewRole,
};
use crate::prompt::{ChoiceSource, Prompter};
use crate::results_grid::{ResultsGrid, Tabular};
use crossterm::style::{StyledContent, Stylize};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the EMPLOYEE MANAGER!";
pub const FAREWELL: &str = "Goodbye!";
pub const MENU_PROMPT: &str = "MAIN MENU: What would you like to do?";

/// What the loop does after an action.
enum Flow {
    Continue,
    Exit,
}

/// The interactive session: owns the database and the prompter.
pub struct App<R, W> {
    db: Database,
    prompter: Prompter<R, W>,
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates a session with plain, uncoloured output.
    pub fn new(db: Database, prompter: Prompter<R, W>) -> Self {
        App {
            db,
            prompter,
            color: false,
        }
    }

    /// Enables ANSI styling of status lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_parts(self) -> (Database, Prompter<R, W>) {
        (self.db, self.prompter)
    }

    /// Runs the menu loop until "Exit" is chosen or input ends.
    ///
    /// Failures inside an action are printed and the menu is shown again.
    /// Only terminal I/O errors end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        self.prompter.say(paint(self.color, WELCOME, |t| t.bold()))?;

        loop {
            let action = match self.prompter.select(MENU_PROMPT, &MenuAction::choices()) {
                Ok(action) => action,
                Err(EmsError::InputClosed) => return self.farewell(),
                Err(e) => return Err(e),
            };

            debug!(?action, "dispatching menu action");
            match self.dispatch(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(EmsError::InputClosed) => return self.farewell(),
                Err(e @ EmsError::Io(_)) => return Err(e),
                Err(e) => {
                    warn!(?action, error = %e, "menu action failed");
                    self.prompter
                        .say(paint(self.color, format!("Error: {}", e), |t| t.red()))?;
                }
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        match action {
            MenuAction::ViewAllEmployees => {
                let rows = self.db.list_employees_detailed()?;
                self.show_table(&rows)?;
            }
            MenuAction::ViewAllRoles => {
                let rows = self.db.list_roles_detailed()?;
                self.show_table(&rows)?;
            }
            MenuAction::ViewAllDepartments => {
                let rows = self.db.list_departments()?;
                self.show_table(&rows)?;
            }
            MenuAction::AddEmployee => self.add_employee()?,
            MenuAction::UpdateEmployeeRole => self.update_employee_role()?,
            MenuAction::UpdateEmployeeManager => self.update_employee_manager()?,
            MenuAction::AddRole => self.add_role()?,
            MenuAction::AddDepartment => self.add_department()?,
            MenuAction::Exit => {
                self.farewell()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn farewell(&mut self) -> Result<()> {
        info!("session ended");
        self.prompter.say(paint(self.color, FAREWELL, |t| t.bold()))
    }

    fn show_table<T: Tabular>(&mut self, rows: &[T]) -> Result<()> {
        let grid = ResultsGrid::from_rows(rows);
        self.prompter.say(grid.render().trim_end())?;
        self.prompter.say(format!("({} rows)\n", grid.row_count()))
    }

    fn add_employee(&mut self) -> Result<()> {
        let first_name = self.prompter.input("What is the employee's first name?")?;
        let last_name = self.prompter.input("What is the employee's last name?")?;

        let db = &self.db;
        let roles = ChoiceSource::deferred(|| Ok(role_choices(db.list_roles_brief()?)));
        let role_id = self.prompter.select("What is the employee's role?", &roles)?;

        let managers =
            ChoiceSource::deferred(|| Ok(manager_choices(db.list_employees_brief()?, None)));
        let manager_id = self
            .prompter
            .select("Who is the employee's manager?", &managers)?;

        let employee = NewEmployee {
            first_name,
            last_name,
            role_id,
            manager_id,
        };
        let affected = self.db.insert_employee(&employee)?;
        report(
            &mut self.prompter,
            self.color,
            affected,
            format!(
                "Added {} {} to the database.",
                employee.first_name, employee.last_name
            ),
            "Failed to add employee.",
        )
    }

    fn add_role(&mut self) -> Result<()> {
        let title = self.prompter.input("What is the title of the role?")?;
        let salary = parse_salary(&self.prompter.input("What is the salary of the role?")?)?;

        let db = &self.db;
        let departments =
            ChoiceSource::deferred(|| Ok(department_choices(db.list_departments_brief()?)));
        let department_id = self
            .prompter
            .select("Which department does the role belong to?", &departments)?;

        let role = NewRole {
            title,
            salary,
            department_id,
        };
        let affected = self.db.insert_role(&role)?;
        report(
            &mut self.prompter,
            self.color,
            affected,
            format!("Added role {} to the database.", role.title),
            "Failed to add role.",
        )
    }

    fn add_department(&mut self) -> Result<()> {
        let name = self.prompter.input("What is the name of the department?")?;
        let department = NewDepartment { name };
        let affected = self.db.insert_department(&department)?;
        report(
            &mut self.prompter,
            self.color,
            affected,
            format!("Added department {} to the database.", department.name),
            "Failed to add department.",
        )
    }

    fn update_employee_role(&mut self) -> Result<()> {
        let db = &self.db;
        let employees = ChoiceSource::deferred(|| Ok(employee_choices(db.list_employees_brief()?)));
        let employee = self
            .prompter
            .select("Which employee's role do you want to update?", &employees)?;

        let roles = ChoiceSource::deferred(|| Ok(role_choices(db.list_roles_brief()?)));
        let role_id = self
            .prompter
            .select("Which role do you want to assign to the selected employee?", &roles)?;

        let affected = self
            .db
            .update_employee(&EmployeeUpdate::role(role_id), employee.id)?;
        let name = self.stored_name(&employee)?;
        report(
            &mut self.prompter,
            self.color,
            affected,
            format!("Updated {}'s role.", name),
            "No employee was updated.",
        )
    }

    fn update_employee_manager(&mut self) -> Result<()> {
        let db = &self.db;
        let employees = ChoiceSource::deferred(|| Ok(employee_choices(db.list_employees_brief()?)));
        let employee = self
            .prompter
            .select("Which employee's manager do you want to update?", &employees)?;

        let managers = ChoiceSource::deferred(|| {
            Ok(manager_choices(db.list_employees_brief()?, Some(employee.id)))
        });
        let manager_id = self
            .prompter
            .select("Who is the employee's new manager?", &managers)?;

        let affected = self
            .db
            .update_employee(&EmployeeUpdate::manager(manager_id), employee.id)?;
        let name = self.stored_name(&employee)?;
        report(
            &mut self.prompter,
            self.color,
            affected,
            format!("Updated {}'s manager.", name),
            "No employee was updated.",
        )
    }

    /// Name of the employee as stored after a write, falling back to the
    /// label it was chosen by if the row is gone.
    fn stored_name(&self, employee: &EmployeeBrief) -> Result<String> {
        Ok(self
            .db
            .find_employee(employee.id)?
            .map(|stored| stored.full_name())
            .unwrap_or_else(|| employee.employee_name.clone()))
    }
}

/// Applies `style` to `text` only when colour output is enabled.
fn paint<F>(color: bool, text: impl Into<String>, style: F) -> String
where
    F: FnOnce(String) -> StyledContent<String>,
{
    let text = text.into();
    if color {
        style(text).to_string()
    } else {
        text
    }
}

/// Prints the outcome of a write. Takes the prompter alone so callers can
/// still hold choice providers that borrow the database.
fn report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    color: bool,
    affected: usize,
    success: String,
    failure: &str,
) -> Result<()> {
    if affected >= 1 {
        prompter.say(paint(color, success, |t| t.green()))
    } else {
        prompter.say(paint(color, failure, |t| t.yellow()))
    }
}
