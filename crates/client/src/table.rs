//! Row rendering for the terminal.

use std::io::Write;

use anyhow::Result;
use dex_content::ExplorerConfig;
use dex_core::{Field, Record};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::ClientConfig;

const LINK_HEADER: &str = "Link";
const ELLIPSIS: char = '…';

/// JSON shape of one row: the record's fields plus its external link.
#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    record: &'a Record,
    link: String,
}

/// Text table writer.
pub struct Table<'a> {
    explorer: &'a ExplorerConfig,
    client: &'a ClientConfig,
}

impl<'a> Table<'a> {
    pub fn new(explorer: &'a ExplorerConfig, client: &'a ClientConfig) -> Self {
        Self { explorer, client }
    }

    /// Columns present in any row, in display order.
    fn columns(rows: &[Record]) -> Vec<Field> {
        Field::iter()
            .filter(|&field| rows.iter().any(|row| row.contains(field)))
            .collect()
    }

    /// Write an aligned table followed by a row count.
    pub fn write(&self, rows: &[Record], out: &mut impl Write) -> Result<()> {
        let columns = Self::columns(rows);

        let mut header: Vec<String> = columns.iter().map(ToString::to_string).collect();
        if self.client.show_links {
            header.push(LINK_HEADER.to_string());
        }

        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<String> = columns
                    .iter()
                    .map(|&field| self.clip(row.get(field)))
                    .collect();
                if self.client.show_links {
                    cells.push(self.explorer.link(row.number()));
                }
                cells
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(out, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        write_line(out, &rule, &widths)?;
        for cells in &body {
            write_line(out, cells, &widths)?;
        }
        writeln!(out, "{} rows", rows.len())?;
        Ok(())
    }

    /// Write rows as a pretty JSON array.
    pub fn write_json(&self, rows: &[Record], out: &mut impl Write) -> Result<()> {
        let json: Vec<JsonRow<'_>> = rows
            .iter()
            .map(|record| JsonRow {
                record,
                link: self.explorer.link(record.number()),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write one record as `field: value` lines.
    pub fn write_record(&self, record: &Record, out: &mut impl Write) -> Result<()> {
        let width = record
            .fields()
            .map(|(field, _)| field.as_ref().len())
            .max()
            .unwrap_or(0)
            .max(LINK_HEADER.len());

        for (field, value) in record.fields() {
            writeln!(out, "{:<width$}  {}", field.as_ref(), value)?;
        }
        writeln!(out, "{:<width$}  {}", LINK_HEADER, self.explorer.link(record.number()))?;
        Ok(())
    }

    fn clip(&self, text: &str) -> String {
        let max = self.client.max_cell_width;
        if text.chars().count() <= max {
            return text.to_string();
        }
        let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
        clipped.push(ELLIPSIS);
        clipped
    }
}

fn write_line(out: &mut impl Write, cells: &[String], widths: &[usize]) -> Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::BaseStats;

    fn rows() -> Vec<Record> {
        vec![
            Record::new("1", "Bulbasaur")
                .with_stats(BaseStats::new(45, 49, 49, 65, 65, 45))
                .with_types("Grass", "Poison"),
            Record::new("150.25", "Mewtwo/Pikachu").with(Field::Speed, "101"),
        ]
    }

    fn render(client: &ClientConfig, rows: &[Record]) -> String {
        let explorer = ExplorerConfig::default();
        let mut out = Vec::new();
        Table::new(&explorer, client).write(rows, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn columns_follow_field_order_and_presence() {
        let text = render(&ClientConfig::default(), &rows());
        let header = text.lines().next().unwrap();

        assert!(header.starts_with("Number  Name"));
        assert!(header.find("Speed").unwrap() < header.find("Type 1").unwrap());
        assert!(!header.contains("Legendary"));
        assert!(header.ends_with("Link"));
        assert!(text.contains("https://www.fusiondex.org/#/150.25"));
        assert!(text.ends_with("2 rows\n"));
    }

    #[test]
    fn long_cells_are_clipped() {
        let client = ClientConfig {
            max_cell_width: 6,
            show_links: false,
        };
        let text = render(&client, &rows());
        assert!(text.contains("Mewtw…"));
        assert!(!text.contains("Link"));
    }

    #[test]
    fn json_rows_carry_fields_and_link() {
        let explorer = ExplorerConfig::default();
        let client = ClientConfig::default();
        let mut out = Vec::new();
        Table::new(&explorer, &client)
            .write_json(&rows()[1..], &mut out)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["Number"], "150.25");
        assert_eq!(value[0]["Speed"], "101");
        assert_eq!(value[0]["link"], "https://www.fusiondex.org/#/150.25");
    }

    #[test]
    fn single_record_lists_every_field() {
        let explorer = ExplorerConfig::default();
        let client = ClientConfig::default();
        let mut out = Vec::new();
        Table::new(&explorer, &client)
            .write_record(&rows()[0], &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let special = text
            .lines()
            .find(|line| line.starts_with("Special Attack"))
            .unwrap();
        assert!(special.ends_with(" 65"));
        assert!(text.lines().last().unwrap().starts_with("Link"));
    }
}
