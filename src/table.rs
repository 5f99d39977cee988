use pad::PadStr;

/// Aligned console table. Column widths are computed from the widest cell,
/// measured with [`console::measure_text_width`] so styled cells line up.
pub struct Table {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(titles: Vec<&'static str>) -> Table {
        Table {
            titles: titles.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add(&mut self, row: Vec<String>) {
        assert_eq!(row.len(), self.titles.len(), "unexpected row len");
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn show(self) {
        for line in self.render() {
            println!("{line}");
        }
    }

    fn render(self) -> Vec<String> {
        let mut widths: Vec<usize> = self
            .titles
            .iter()
            .map(|t| console::measure_text_width(t))
            .collect();
        for row in self.rows.iter() {
            for (coli, cell) in row.iter().enumerate() {
                let size = console::measure_text_width(cell);
                if size > widths[coli] {
                    widths[coli] = size;
                }
            }
        }

        let mut split = String::from("+");
        for width in widths.iter() {
            split.extend(std::iter::repeat('-').take(width + 2));
            split.push('+');
        }

        let fmt_row = |cells: Vec<String>| -> String {
            let mut line = String::from("|");
            for (coli, cell) in cells.into_iter().enumerate() {
                let text = cell.pad_to_width_with_alignment(widths[coli], pad::Alignment::Left);
                line.push_str(&format!(" {text} |"));
            }
            line
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(split.clone());
        lines.push(fmt_row(self.titles));
        lines.push(split.clone());
        for row in self.rows {
            lines.push(fmt_row(row));
        }
        lines.push(split);

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let mut table = Table::new(vec!["Name", "Role"]);
        table.add(vec!["admin".to_string(), "Administrator".to_string()]);
        table.add(vec!["student1".to_string(), "Student".to_string()]);

        let lines = table.render();
        assert_eq!(
            lines,
            vec![
                "+----------+---------------+",
                "| Name     | Role          |",
                "+----------+---------------+",
                "| admin    | Administrator |",
                "| student1 | Student       |",
                "+----------+---------------+",
            ]
        );
    }
}
