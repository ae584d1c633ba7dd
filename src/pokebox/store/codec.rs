//! Reading and writing the delimited collection format.

use crate::error::Result;
use crate::model::{Record, FIELDS, METHOD};
use std::io::{Read, Write};

/// Parses a collection file, using its header row as field names.
///
/// Short rows are padded with blanks for the missing columns. Files written
/// before the `Method` column existed get a blank `Method` on every record.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;
        if row.len() > headers.len() {
            tracing::debug!(
                line = row.position().map(|p| p.line()),
                extra = row.len() - headers.len(),
                "ignoring values beyond the header"
            );
        }

        let mut record = Record::new();
        for (i, field) in headers.iter().enumerate() {
            record.set(field, row.get(i).unwrap_or(""));
        }
        if !record.contains(METHOD) {
            record.set(METHOD, "");
        }
        records.push(record);
    }

    Ok(records)
}

/// Writes the header and every record using the fixed field list.
///
/// Output is CRLF-terminated with minimal quoting. Fields a record lacks are
/// written blank and fields outside the schema are not written.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(FIELDS)?;
    for record in records {
        wtr.write_record(FIELDS.iter().map(|field| record.get(field)))?;
    }
    wtr.flush()?;
    Ok(())
}
