/// Plain-text table for terminal reports
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    max_width: Option<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            max_width: None,
        }
    }

    /// Cap every column at `width` characters; longer cells are cut with `…`
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self.col_widths = self.col_widths.iter().map(|w| (*w).min(width.max(1))).collect();
        self
    }

    /// Add a row; cells beyond the header count are dropped
    pub fn add_row(&mut self, row: Vec<String>) {
        let row: Vec<String> = row
            .into_iter()
            .take(self.headers.len())
            .map(|cell| self.clip(cell))
            .collect();

        for (i, col) in row.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(col.chars().count());
        }

        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn clip(&self, cell: String) -> String {
        match self.max_width {
            Some(width) if cell.chars().count() > width => {
                let mut clipped: String = cell.chars().take(width - 1).collect();
                clipped.push('…');
                clipped
            }
            _ => cell,
        }
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .col_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let cell = if self.max_width.is_some() { self.clip(cell.to_string()) } else { cell.to_string() };
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(&["Scenario", "HTTP", "Result"]);
        table.add_row(vec!["success".into(), "200".into(), "PASS".into()]);
        table.add_row(vec!["invalid PIN".into(), "200".into(), "FAIL".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Scenario    | HTTP | Result");
        assert_eq!(lines[1], "------------+------+-------");
        assert_eq!(lines[3], "invalid PIN | 200  | FAIL");
    }

    #[test]
    fn test_long_cells_are_clipped() {
        let mut table = Table::new(&["Detail"]).with_max_width(8);
        table.add_row(vec!["Débit de 156 FCFA".into()]);
        let rendered = table.render();
        assert!(rendered.lines().any(|l| l == "Débit d…"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["x".into()]);
        assert_eq!(table.render().lines().last(), Some("x |"));
    }
}
