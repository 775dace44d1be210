use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::io::Write;
use tracing::*;

use crate::Molecule;

/// Column read when the caller names none.
pub const DEFAULT_NAME_COLUMN: &str = "name";

pub const REPORT_HEADER: [&str; 7] = [
    "name",
    "chain_type",
    "chain_length",
    "locants",
    "formula",
    "description",
    "error",
];

/// Reads hydrocarbon names out of CSV data with a header row.
///
/// Names come from the column titled `column`, or from the first column if
/// there is no such title. Rows with an empty name are skipped.
pub fn read_names(csv_data: &str, column: &str) -> Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let index = headers.iter().position(|h| h.trim() == column).unwrap_or_else(|| {
        warn!("No column named {column:?}, reading names from the first column");
        0
    });

    let mut names = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record: StringRecord = result.with_context(|| format!("Failed to read CSV row {}", row + 1))?;
        let name = record.get(index).unwrap_or("").trim();
        if name.is_empty() {
            warn!("Skipping row {} with an empty name: {:?}", row + 1, record);
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

/// One report row for `name`.
///
/// Names that fail to parse produce a row with only the name and the error.
/// A failure while laying out a parsed molecule is returned as an error.
pub fn report_row(name: &str) -> Result<[String; 7]> {
    let molecule = match Molecule::from_iupac(name) {
        Ok(molecule) => molecule,
        Err(e) => {
            debug!("{name:?} is not a valid hydrocarbon: {e}");
            return Ok([
                name.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                e.to_string(),
            ]);
        }
    };

    let locants = molecule
        .bond_locants()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let formula = molecule
        .formula()
        .with_context(|| format!("Failed to lay out {name:?}"))?;

    Ok([
        name.to_string(),
        molecule.chain_type().to_string(),
        molecule.chain_length().to_string(),
        locants,
        formula,
        molecule.describe(),
        String::new(),
    ])
}

/// Writes a CSV report with one row per name.
pub fn write_report<W: Write>(names: &[String], writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;
    for name in names {
        wtr.write_record(report_row(name)?)?;
    }
    wtr.flush()?;
    info!("Wrote a report of {} names", names.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_names_by_column() {
        let csv_data = "id,name\n1,ethane\n2, but-2-ene \n3,\n";
        let names = read_names(csv_data, DEFAULT_NAME_COLUMN).unwrap();
        assert_eq!(names, vec!["ethane".to_string(), "but-2-ene".to_string()]);
    }

    #[test]
    fn test_read_names_falls_back_to_first_column() {
        let csv_data = "hydrocarbon\npropyne\nmethane\n";
        let names = read_names(csv_data, DEFAULT_NAME_COLUMN).unwrap();
        assert_eq!(names, vec!["propyne".to_string(), "methane".to_string()]);
    }

    #[test]
    fn test_report_row_valid() {
        let row = report_row("hex-1,4-ene").unwrap();
        assert_eq!(row[0], "hex-1,4-ene");
        assert_eq!(row[1], "alkene");
        assert_eq!(row[2], "6");
        assert_eq!(row[3], "1,4");
        assert_eq!(row[4], "C6H10");
        assert!(row[5].starts_with("hex-1,4-ene is an alkene"));
        assert!(row[6].is_empty());
    }

    #[test]
    fn test_report_row_invalid() {
        let row = report_row("pentene").unwrap();
        assert_eq!(row[0], "pentene");
        assert!(row[1..6].iter().all(|cell| cell.is_empty()));
        assert_eq!(row[6], "alkenes with a chain length of 4 or more need a double bond locant");
    }

    #[test]
    fn test_report_row_crowded_carbon_is_an_error() {
        assert!(report_row("prop-1,2-yne").is_err());
    }

    #[test]
    fn test_write_report() {
        let names = vec!["ethane".to_string(), "decane".to_string()];
        let mut out = Vec::new();
        write_report(&names, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,chain_type,chain_length,locants,formula,description,error"));
        assert_eq!(
            lines.next(),
            Some("ethane,alkane,2,,C2H6,ethane is an alkane with a length of 2.,")
        );
        assert_eq!(lines.next(), Some("decane,,,,,,\"chain length of \"\"dec\"\" not recognized\""));
        assert_eq!(lines.next(), None);
    }
}
