//! Creature catalog loader.
//!
//! Reads the comma-delimited catalog into a [`RecordStore`].

use std::path::Path;

use dex_core::{Field, Record, RecordStore};

use crate::loaders::{LoadResult, read_file};

/// Loader for the creature catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog file and index it by record number.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, a row is malformed (see
    /// [`CatalogLoader::parse`]), or two rows share a number.
    pub fn load(path: &Path) -> LoadResult<RecordStore> {
        let content = read_file(path)?;
        let records = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog {}: {}", path.display(), e))?;
        let store = RecordStore::new(records)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))?;

        tracing::info!(path = %path.display(), records = store.len(), "Loaded catalog");
        Ok(store)
    }

    /// Parse catalog text.
    ///
    /// Format:
    /// ```text
    /// Number,Name,HP,Attack,Defense,Special Attack,Special Defense,Speed,Type 1,Type 2,...
    /// 1,Bulbasaur,45,49,49,65,65,45,GRASS,POISON,...
    /// ```
    ///
    /// - The first non-blank line is the header; names map to [`Field`]
    ///   case-insensitively and unknown columns are skipped.
    /// - Cells are split on `,` without quoting and trimmed.
    /// - Every row must have as many cells as the header.
    pub fn parse(content: &str) -> LoadResult<Vec<Record>> {
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| anyhow::anyhow!("Catalog has no header row"))?;

        let columns: Vec<Option<Field>> = header
            .split(',')
            .map(|name| match name.trim().parse::<Field>() {
                Ok(field) => Some(field),
                Err(_) => {
                    tracing::debug!(column = name.trim(), "Skipping unknown catalog column");
                    None
                }
            })
            .collect();

        if !columns.contains(&Some(Field::Number)) {
            anyhow::bail!("Catalog header has no {} column", Field::Number);
        }

        let mut records = Vec::new();
        for (index, line) in lines {
            let line_number = index + 1;
            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() != columns.len() {
                anyhow::bail!(
                    "Line {}: expected {} cells, found {}",
                    line_number,
                    columns.len(),
                    cells.len()
                );
            }

            let mut record = Record::default();
            for (column, cell) in columns.iter().zip(cells) {
                if let Some(field) = column {
                    record.insert(*field, cell.trim());
                }
            }

            // The catalog is authoritative; inconsistent totals are reported, not rewritten.
            if record.contains(Field::Bst) && !record.totals_consistent() {
                tracing::warn!(
                    line = line_number,
                    number = record.number(),
                    "Stored totals disagree with base stats"
                );
            }

            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Number,Name,HP,Attack,Defense,Special Attack,Special Defense,Speed,\
                          Type 1,Type 2,First Stage,Final Stage,Legendary,BST,\
                          Head Stat Total,Body Stat Total,Stat Balance,Notes";

    #[test]
    fn parses_rows_and_skips_unknown_columns() {
        let content = format!(
            "{HEADER}\n\
             1,Bulbasaur,45,49,49,65,65,45,GRASS,POISON,True,False,False,318,143,175,0.98,starter\n\
             \n\
             4,Charmander,39,52,43,60,50,65,FIRE,,True,False,False,309,160,149,1.07,starter\r\n"
        );
        let records = CatalogLoader::parse(&content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "Bulbasaur");
        assert_eq!(records[0].get(Field::SpecialAttack), "65");
        assert_eq!(records[1].type2(), "");
        assert_eq!(records[1].get(Field::BodyStatTotal), "149");
        assert!(records[1].flag(Field::FirstStage));
        assert_eq!(records[1].get(Field::StatBalance), "1.07");
        assert_eq!(records[1].fields().count(), 17);
    }

    #[test]
    fn short_rows_name_their_line() {
        let content = format!("{HEADER}\n1,Bulbasaur,45\n");
        let err = CatalogLoader::parse(&content).unwrap_err();
        assert!(err.to_string().starts_with("Line 2:"), "{err}");
    }

    #[test]
    fn header_must_name_the_key_column() {
        let err = CatalogLoader::parse("Name,HP\nBulbasaur,45\n").unwrap_err();
        assert!(err.to_string().contains("Number"));
        assert!(CatalogLoader::parse("\n\n").is_err());
    }

    #[test]
    fn inconsistent_totals_are_still_loaded() {
        let content = format!(
            "{HEADER}\n1,Bulbasaur,45,49,49,65,65,45,GRASS,POISON,True,False,False,999,143,175,0.98,\n"
        );
        let records = CatalogLoader::parse(&content).unwrap();
        assert_eq!(records[0].get(Field::Bst), "999");
        assert!(!records[0].totals_consistent());
    }

    #[test]
    fn maximal_stats_load_without_overflow() {
        let content = "Number,Name,HP,Attack,Defense,Special Attack,Special Defense,Speed,\
                       BST,Head Stat Total,Body Stat Total\n\
                       1,Big,4294967295,4294967295,1,1,1,1,0,4294967297,4294967297\n\
                       2,Fixed,4294967295,4294967295,1,1,1,1,8589934594,4294967297,4294967297\n";
        let records = CatalogLoader::parse(content).unwrap();
        assert_eq!(records[0].get(Field::Hp), "4294967295");
        assert!(!records[0].totals_consistent());
        assert!(records[1].totals_consistent());
    }
}
