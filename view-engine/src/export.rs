//! FILENAME: view-engine/src/export.rs
//! CSV export of the sector dataset, including the derived Total and
//! Progresso columns. Text cells are double-quoted; an empty dataset is an
//! error the caller surfaces instead of writing an empty file.

use crate::fields;
use crate::sort::record_total;
use crate::summary::record_progress;
use dataset::Record;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export: dataset is empty")]
    EmptyDataset,
}

/// Renders the dataset to CSV with the dashboard's export columns.
pub fn export_csv(records: &[Record]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyDataset);
    }

    let mut out = String::from("Setor,Descrição,Linhas Separadas,Linhas Restantes,Total,Percentual\n");

    for record in records {
        let separated = record.number(fields::SEPARATED_LINES);
        let remaining = record.number(fields::REMAINING_LINES);
        let total = record_total(record);
        let percent = if total > 0.0 {
            format!("{:.1}", record_progress(record))
        } else {
            "0".to_string()
        };

        out.push_str(&format!(
            "{},{},{},{},{},{}%\n",
            quote(record.text(fields::SECTOR)),
            quote(record.text(fields::SECTOR_DESCRIPTION)),
            separated,
            remaining,
            total,
            percent
        ));
    }

    Ok(out)
}

/// Double-quotes a text cell, escaping embedded quotes CSV-style.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

// ============================================================================
// TESTS
// ============================================================================
