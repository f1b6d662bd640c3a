//! Results Grid Module
//!
//! Renders query results as an aligned plain-text table for the view
//! actions. Rows are typed; anything implementing [`Tabular`] can be turned
//! into a grid.

/// A row type that knows its column headers and how to format its cells.
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

/// Represents a single cell in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: String,
}

/// Represents a row of cells in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Represents the entire grid structure.
#[derive(Debug, Clone, Default)]
pub struct ResultsGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultsGrid {
    /// Creates a new, empty ResultsGrid.
    pub fn new() -> Self {
        ResultsGrid::default()
    }

    /// Builds a grid from typed rows.
    pub fn from_rows<T: Tabular>(rows: &[T]) -> Self {
        let mut grid = ResultsGrid::new();
        grid.set_headers(T::headers().into_iter().map(String::from).collect());
        for row in rows {
            grid.add_row(row.cells());
        }
        grid
    }

    /// Sets the headers for the grid.
    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = headers;
    }

    /// Adds a row to the grid. Each row is represented as a vector of strings.
    pub fn add_row(&mut self, row: Vec<String>) {
        let cells = row.into_iter().map(|content| Cell { content }).collect();
        self.rows.push(Row { cells });
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of each column: the widest of its header and cells.
    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(|r| r.cells.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        (0..columns)
            .map(|i| {
                let header = self.headers.get(i).map_or(0, |h| h.chars().count());
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| c.content.chars().count())
                    .fold(header, usize::max)
            })
            .collect()
    }

    /// Renders the grid with a header row, a dashed separator and one line
    /// per row, columns padded to a common width.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        if !self.headers.is_empty() {
            output.push_str(&render_line(
                self.headers.iter().map(String::as_str),
                &widths,
            ));
            let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&render_line(dashes.iter().map(String::as_str), &widths));
        }
        for row in &self.rows {
            output.push_str(&render_line(
                row.cells.iter().map(|c| c.content.as_str()),
                &widths,
            ));
        }
        output
    }
}

fn render_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = values
        .zip(widths)
        .map(|(value, width)| {
            let fill = width.saturating_sub(value.chars().count());
            format!("{}{}", value, " ".repeat(fill))
        })
        .collect();
    let mut line = padded.join(" | ").trim_end().to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        id: i64,
        name: &'static str,
    }

    impl Tabular for Person {
        fn headers() -> Vec<&'static str> {
            vec!["ID", "Name"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.to_string()]
        }
    }

    #[test]
    fn test_render_empty_grid() {
        let grid = ResultsGrid::new();
        assert_eq!(grid.render(), "");
    }

    #[test]
    fn test_render_with_headers_and_rows() {
        let mut grid = ResultsGrid::new();
        grid.set_headers(vec!["ID".to_string(), "Name".to_string()]);
        grid.add_row(vec!["1".to_string(), "Alice".to_string()]);
        grid.add_row(vec!["2".to_string(), "Bob".to_string()]);
        let rendered = grid.render();
        assert!(rendered.contains("ID | Name"));
        assert!(rendered.contains("1  | Alice"));
        assert!(rendered.contains("2  | Bob"));
    }

    #[test]
    fn test_render_headers_only_when_no_rows() {
        let grid = ResultsGrid::from_rows::<Person>(&[]);
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.render(), "ID | Name\n-- | ----\n");
    }

    #[test]
    fn test_render_typed_rows_snapshot() {
        let grid = ResultsGrid::from_rows(&[
            Person { id: 1, name: "Ada Lovelace" },
            Person { id: 12, name: "Alan Turing" },
        ]);
        insta::assert_snapshot!(grid.render(), @r###"
        ID | Name
        -- | ------------
        1  | Ada Lovelace
        12 | Alan Turing
        "###);
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let mut grid = ResultsGrid::new();
        grid.set_headers(vec!["name".to_string(), "x".to_string()]);
        grid.add_row(vec!["Zoë".to_string(), "1".to_string()]);
        let rendered = grid.render();
        assert!(rendered.contains("Zoë  | 1"));
    }
}
