//! CSV export for schedule assignments.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::ScheduleAssignment;

/// Column header; names match the JSON response fields.
const HEADER: &str = "apartment_id,start_hour,end_hour,priority,credits_earned,estimated_cost";

/// Exports assignments to a CSV file at the given path.
///
/// Rows keep the priority order of `assignments`.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(assignments: &[ScheduleAssignment], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(assignments, buf)
}

/// Writes assignments as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(assignments: &[ScheduleAssignment], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for a in assignments {
        wtr.write_record(&[
            a.apartment_id.clone(),
            a.start_hour.to_string(),
            a.end_hour.to_string(),
            a.priority.to_string(),
            format!("{:.2}", a.credits_earned),
            format!("{:.2}", a.estimated_cost),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
