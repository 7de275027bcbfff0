//! CSV row import
//!
//! The command-line analog of the original form's editable tables: resource
//! and milestone rows can be supplied as CSV side files whose headers match
//! the table's column labels. Header matching is case-insensitive; blank
//! cells import as empty (and derive to zero downstream, same as any other
//! unparseable cell).

use std::path::Path;

use csv::StringRecord;

use crate::error::{SowError, SowResult};
use crate::lenient::Cell;
use crate::models::{MilestoneLine, ResourceLine};

/// Read T&M resource rows from a CSV file
///
/// Expected headers: Role, Location, Start Date, End Date, Allocation %,
/// Hrs/Day, Rate/hr ($)
pub fn read_resources_csv(path: &Path) -> SowResult<Vec<ResourceLine>> {
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();

    let role = require_column(path, &headers, "Role")?;
    let location = require_column(path, &headers, "Location")?;
    let start_date = require_column(path, &headers, "Start Date")?;
    let end_date = require_column(path, &headers, "End Date")?;
    let allocation = require_column(path, &headers, "Allocation %")?;
    let hours = require_column(path, &headers, "Hrs/Day")?;
    let rate = require_column(path, &headers, "Rate/hr ($)")?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(ResourceLine {
            role: cell_at(&record, role),
            location: cell_at(&record, location),
            start_date: cell_at(&record, start_date),
            end_date: cell_at(&record, end_date),
            allocation_pct: cell_at(&record, allocation),
            hours_per_day: cell_at(&record, hours),
            rate: cell_at(&record, rate),
        });
    }

    log::debug!("imported {} resource rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read Fixed Fee milestone rows from a CSV file
///
/// Expected headers: Milestone #, Services, Due Date, Allocation %
pub fn read_milestones_csv(path: &Path) -> SowResult<Vec<MilestoneLine>> {
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();

    let milestone_no = require_column(path, &headers, "Milestone #")?;
    let services = require_column(path, &headers, "Services")?;
    let due_date = require_column(path, &headers, "Due Date")?;
    let allocation = require_column(path, &headers, "Allocation %")?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(MilestoneLine {
            milestone_no: cell_at(&record, milestone_no),
            services: cell_at(&record, services),
            due_date: cell_at(&record, due_date),
            allocation: cell_at(&record, allocation),
        });
    }

    log::debug!("imported {} milestone rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn open(path: &Path) -> SowResult<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path)
        .map_err(|e| SowError::Import(format!("Failed to open {}: {}", path.display(), e)))
}

fn require_column(path: &Path, headers: &StringRecord, name: &str) -> SowResult<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            SowError::Import(format!(
                "{} is missing required column '{}'",
                path.display(),
                name
            ))
        })
}

fn cell_at(record: &StringRecord, index: usize) -> Cell {
    Cell::new(record.get(index).unwrap_or("").trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_resources() {
        let file = csv_file(
            "Role,Location,Start Date,End Date,Allocation %,Hrs/Day,Rate/hr ($)\n\
             Engineer,Remote,2024-01-01,2024-01-05,100,8,100\n\
             QA,Onsite,2024-01-01,2024-01-05,50,8,85\n",
        );
        let rows = read_resources_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role.raw(), "Engineer");
        assert_eq!(rows[1].rate.number(), Some(85.0));
    }

    #[test]
    fn test_headers_case_insensitive() {
        let file = csv_file(
            "role,location,start date,end date,allocation %,hrs/day,rate/hr ($)\n\
             Engineer,Remote,2024-01-01,2024-01-05,100,8,100\n",
        );
        assert_eq!(read_resources_csv(file.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let file = csv_file("Role,Location\nEngineer,Remote\n");
        let err = read_resources_csv(file.path()).unwrap_err();
        assert!(matches!(err, SowError::Import(_)));
        assert!(err.to_string().contains("Start Date"));
    }

    #[test]
    fn test_blank_cells_import_as_empty() {
        let file = csv_file(
            "Role,Location,Start Date,End Date,Allocation %,Hrs/Day,Rate/hr ($)\n\
             Engineer,,2024-01-01,2024-01-05,100,8,\n",
        );
        let rows = read_resources_csv(file.path()).unwrap();
        assert!(rows[0].location.is_empty());
        assert_eq!(rows[0].rate.number_or_zero(), 0.0);
    }

    #[test]
    fn test_read_milestones() {
        let file = csv_file(
            "Milestone #,Services,Due Date,Allocation %\n\
             1,Kickoff,2025-01-31,50\n\
             2,Delivery,2025-03-31,50\n",
        );
        let rows = read_milestones_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].milestone_no.raw(), "1");
        assert_eq!(rows[1].allocation.number(), Some(50.0));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_resources_csv(Path::new("/nonexistent/rows.csv")).unwrap_err();
        assert!(matches!(err, SowError::Import(_)));
    }
}
