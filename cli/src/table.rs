// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error, fmt, io};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::util::OutputFormat;

pub struct Table<'a, T, P, C: Column<T, P>> {
    columns: &'a [C],
    data: &'a [T],
    prior: &'a P,
    style: TableStyle,
}

impl<'a, T, P, C: Column<T, P>> Table<'a, T, P, C> {
    pub fn new(columns: &'a [C], data: &'a [T], prior: &'a P) -> Self {
        Self {
            columns,
            data,
            prior,
            style: TableStyle::Basic,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.style = match format {
            OutputFormat::Table => TableStyle::Basic,
            OutputFormat::Json => TableStyle::Json,
        };
        self
    }

    pub fn write_to(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        match self.style {
            TableStyle::Basic => self.write_basic(w),
            TableStyle::Json => self.write_json(w),
        }
    }

    fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| col.format(self.prior, row))
                    .collect()
            })
            .collect()
    }

    fn write_basic(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let table = self.cells();
        let widths = get_column_max_width(&table, self.columns.len());

        for (cells, row) in table.into_iter().zip(self.data) {
            let last = cells.len().saturating_sub(1);
            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let direction = col.padding_direction();
                // The last column does not need padding if it's left-aligned
                let width = match (j == last, direction) {
                    (true, PaddingDirection::Left) => 0,
                    _ => widths[j],
                };
                let cell = pad(&cell, width, direction);
                match col.get_color(self.prior, row) {
                    Some(color) => write!(w, "{}", cell.color(color))?,
                    None => write!(w, "{cell}")?,
                }

                if j < last {
                    write!(w, " ")?;
                }
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn write_json(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = self
            .cells()
            .into_iter()
            .map(|cells| {
                self.columns
                    .iter()
                    .zip(cells)
                    .map(|(col, cell)| (col.name().to_string(), cell.into_owned().into()))
                    .collect()
            })
            .collect();
        serde_json::to_writer_pretty(&mut *w, &rows)?;
        writeln!(w)?;
        Ok(())
    }
}

impl<T, P, C: Column<T, P>> fmt::Display for Table<'_, T, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

pub trait Column<T, P> {
    /// Key of the column in JSON output.
    fn name(&self) -> &'static str;

    fn format<'a>(&self, prior: &P, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _prior: &P, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    Basic,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn get_column_max_width(table: &[Vec<Cow<'_, str>>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        count: usize,
    }

    enum RowColumn {
        Name,
        Count,
    }

    impl Column<Row, ()> for RowColumn {
        fn name(&self) -> &'static str {
            match self {
                RowColumn::Name => "name",
                RowColumn::Count => "count",
            }
        }

        fn format<'a>(&self, _: &(), data: &'a Row) -> Cow<'a, str> {
            match self {
                RowColumn::Name => data.name.into(),
                RowColumn::Count => data.count.to_string().into(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                RowColumn::Count => PaddingDirection::Right,
                RowColumn::Name => PaddingDirection::Left,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "hero",
                count: 3,
            },
            Row {
                name: "a",
                count: 12,
            },
        ]
    }

    #[test]
    fn test_basic_pads_columns() {
        let data = rows();
        let columns = [RowColumn::Count, RowColumn::Name];
        let out = Table::new(&columns, &data, &()).to_string();
        assert_eq!(out, " 3 hero\n12 a\n");
    }

    #[test]
    fn test_json_uses_column_names() {
        let data = rows();
        let columns = [RowColumn::Name, RowColumn::Count];
        let out = Table::new(&columns, &data, &())
            .with_output_format(OutputFormat::Json)
            .to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "hero");
        assert_eq!(value[1]["count"], "12");
    }

    #[test]
    fn test_empty_table() {
        let data: Vec<Row> = Vec::new();
        let columns = [RowColumn::Name];
        assert_eq!(Table::new(&columns, &data, &()).to_string(), "");
        let json = Table::new(&columns, &data, &())
            .with_output_format(OutputFormat::Json)
            .to_string();
        assert_eq!(json.trim(), "[]");
    }
}
