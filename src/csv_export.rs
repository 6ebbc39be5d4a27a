use crate::error::Result;
use crate::models::CardRecord;
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Column names of the exported CSV, in order
pub const CSV_HEADER: [&str; 4] = ["Name", "Rarity", "Set and Card Number", "Price"];

/// Writes records to a CSV file, creating or overwriting it.
pub fn write_csv<P: AsRef<Path>>(records: &[CardRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Writing {} records to {}", records.len(), path.display());

    let file = std::fs::File::create(path)?;
    write_records(records, file)
}

/// Writes records as CSV to any writer. The header row is always written,
/// even for an empty record list.
pub fn write_records<W: Write>(records: &[CardRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    debug!("CSV export flushed");
    Ok(())
}

/// Reads records back from a CSV file written by [`write_csv`].
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CardRecord>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(file);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: CardRecord = result?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_to_string(records: &[CardRecord]) -> String {
        let mut buf = Vec::new();
        write_records(records, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_records_header_only_for_empty_input() {
        let output = export_to_string(&[]);
        assert_eq!(output, "Name,Rarity,Set and Card Number,Price\n");
    }

    #[test]
    fn test_write_records_one_row_per_record() {
        let records = vec![
            CardRecord::new("Dark Magician", "Common", "AMDE-EN001", 0.5),
            CardRecord::new("Kuriboh", "Ultra Rare", "AMDE-EN002", 5.0),
        ];

        let output = export_to_string(&records);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Rarity,Set and Card Number,Price");
        assert!(lines[1].starts_with("Dark Magician,Common,AMDE-EN001,"));
        assert!(lines[2].starts_with("Kuriboh,Ultra Rare,AMDE-EN002,"));
    }

    #[test]
    fn test_write_records_quotes_fields_with_commas() {
        let records = vec![CardRecord::new(
            "Magician, Dark",
            "Collector's Rare",
            "AMDE-EN003",
            1.0,
        )];

        let output = export_to_string(&records);
        assert!(output.contains("\"Magician, Dark\""));
    }
}
