#[cfg(test)]
mod results_grid_tests {
    use employee_manager::models::{DepartmentName, EmployeeDetail, RoleDetail};
    use employee_manager::results_grid::ResultsGrid;

    #[test]
    fn test_employee_grid_rendering() {
        let rows = vec![
            EmployeeDetail {
                id: 1,
                employee_name: "Ada Lovelace".to_string(),
                title: Some("Engineer".to_string()),
                salary: Some(80000.0),
                department: Some("Engineering".to_string()),
                manager_name: None,
            },
            EmployeeDetail {
                id: 2,
                employee_name: "Grace Hopper".to_string(),
                title: None,
                salary: None,
                department: None,
                manager_name: Some("Ada Lovelace".to_string()),
            },
        ];

        let rendered = ResultsGrid::from_rows(&rows).render();
        let expected = "\
id | employee_name | title    | salary | department  | manager_name
-- | ------------- | -------- | ------ | ----------- | ------------
1  | Ada Lovelace  | Engineer | 80000  | Engineering | NULL
2  | Grace Hopper  | NULL     | NULL   | NULL        | Ada Lovelace
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_role_grid_rendering() {
        let rows = vec![RoleDetail {
            title: "Account Executive".to_string(),
            salary: 65000.5,
            department: Some("Sales".to_string()),
        }];

        let grid = ResultsGrid::from_rows(&rows);
        assert_eq!(grid.row_count(), 1);
        insta::assert_snapshot!(grid.render(), @r###"
        title             | salary  | department
        ----------------- | ------- | ----------
        Account Executive | 65000.5 | Sales
        "###);
    }

    #[test]
    fn test_department_grid_without_rows() {
        let grid = ResultsGrid::from_rows::<DepartmentName>(&[]);
        assert_eq!(grid.render(), "name\n----\n");
    }
}
