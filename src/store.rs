//! Line-oriented catalog persistence.
//!
//! One record per offering, appended to a plain text file:
//!
//! ```text
//! Category: Math
//! Course Number: 101
//!   MWF 9:00AM-10:00AM
//!   T 1:00PM-2:00PM
//!
//! ```
//!
//! A `Category:` line names the category for the records that follow, a
//! `Course Number:` line opens a record, each two-space-indented line adds
//! one meeting, and a blank line closes the record. File order becomes
//! catalog insertion order on load. A missing file is an empty catalog,
//! not an error.

use crate::error::{Error, Result};
use crate::models::{Catalog, Offering};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::warn;

const CATEGORY_PREFIX: &str = "Category: ";
const NUMBER_PREFIX: &str = "Course Number: ";

/// Loads the catalog from `path`, preserving file order.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Catalog::new()),
        Err(e) => return Err(e.into()),
    };
    read_catalog(BufReader::new(file))
}

/// Parses catalog records from any line source.
pub fn read_catalog(reader: impl BufRead) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    let mut category: Option<String> = None;
    let mut pending: Option<(String, Offering)> = None;

    for line in reader.lines() {
        let line = line?;

        if line.trim().is_empty() {
            if let Some((category, offering)) = pending.take() {
                catalog.add_offering(category, offering);
            }
            continue;
        }

        if let Some(name) = line.strip_prefix(CATEGORY_PREFIX) {
            commit_unterminated(&mut catalog, &mut pending);
            category = Some(name.to_string());
        } else if let Some(number) = line.strip_prefix(NUMBER_PREFIX) {
            commit_unterminated(&mut catalog, &mut pending);
            let category = category.clone().ok_or_else(|| Error::MalformedRecord {
                line: line.clone(),
            })?;
            pending = Some((category, Offering::new(number)?));
        } else if let Some((_, offering)) = pending.as_mut() {
            let (days, start, end) = parse_meeting_line(&line)?;
            offering.add_meeting(days, start.parse()?, end.parse()?)?;
        } else {
            return Err(Error::MalformedRecord { line });
        }
    }

    commit_unterminated(&mut catalog, &mut pending);
    Ok(catalog)
}

/// Commits a record that was not closed by a blank line.
fn commit_unterminated(catalog: &mut Catalog, pending: &mut Option<(String, Offering)>) {
    if let Some((category, offering)) = pending.take() {
        warn!(number = %offering.number, "catalog record missing terminating blank line");
        catalog.add_offering(category, offering);
    }
}

/// Splits a meeting line into `(days, start-literal, end-literal)`.
fn parse_meeting_line(line: &str) -> Result<(&str, &str, &str)> {
    let malformed = || Error::MalformedRecord {
        line: line.to_string(),
    };
    let (days, times) = line.trim().split_once(' ').ok_or_else(malformed)?;
    let (start, end) = times.trim().split_once('-').ok_or_else(malformed)?;
    Ok((days, start, end))
}

/// Appends one offering record to the store, creating the file on first
/// use.
pub fn append_offering(path: &Path, category: &str, offering: &Offering) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_record(&mut file, category, offering)?;
    Ok(())
}

fn write_record(out: &mut impl Write, category: &str, offering: &Offering) -> io::Result<()> {
    writeln!(out, "{CATEGORY_PREFIX}{category}")?;
    writeln!(out, "{NUMBER_PREFIX}{}", offering.number)?;
    for meeting in &offering.meetings {
        writeln!(out, "  {meeting}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn offering(number: &str, meetings: &[(&str, &str, &str)]) -> Offering {
        let mut o = Offering::new(number).unwrap();
        for (days, start, end) in meetings {
            o.add_meeting(*days, start.parse().unwrap(), end.parse().unwrap())
                .unwrap();
        }
        o
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_offering(
            "Math",
            offering(
                "101",
                &[("MWF", "9:00am", "10:00am"), ("T", "1:00pm", "2:00pm")],
            ),
        );
        catalog.add_offering("Math", offering("102", &[("MWF", "10:00am", "11:00am")]));
        catalog.add_offering("Art", offering("201", &[("TTH", "9:00am", "10:30am")]));
        catalog
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.txt");

        let catalog = sample_catalog();
        for (category, offerings) in catalog.iter() {
            for o in offerings {
                append_offering(&path, category, o).unwrap();
            }
        }

        let reloaded = load_catalog(&path).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("nope.txt")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let text = "Category: Art\n\
                    Course Number: 201\n\
                    \x20\x20TTH 9:00AM-10:30AM\n\
                    \n\
                    Category: Math\n\
                    Course Number: 101\n\
                    \x20\x20MWF 9:00AM-10:00AM\n\
                    \n";
        let catalog = read_catalog(Cursor::new(text)).unwrap();
        let categories: Vec<&str> = catalog.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["Art", "Math"]);
    }

    #[test]
    fn test_consecutive_records_share_category_line() {
        // The category line is sticky: later records may omit it.
        let text = "Category: Math\n\
                    Course Number: 101\n\
                    \x20\x20MWF 9:00AM-10:00AM\n\
                    \n\
                    Course Number: 102\n\
                    \x20\x20MWF 10:00AM-11:00AM\n\
                    \n";
        let catalog = read_catalog(Cursor::new(text)).unwrap();
        assert_eq!(catalog.offerings("Math").len(), 2);
    }

    #[test]
    fn test_unterminated_final_record_still_loads() {
        let text = "Category: Math\n\
                    Course Number: 101\n\
                    \x20\x20MWF 9:00AM-10:00AM\n";
        let catalog = read_catalog(Cursor::new(text)).unwrap();
        assert_eq!(catalog.offerings("Math").len(), 1);
    }

    #[test]
    fn test_meeting_line_before_any_record_is_malformed() {
        let text = "  MWF 9:00AM-10:00AM\n";
        assert!(matches!(
            read_catalog(Cursor::new(text)),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_course_number_before_category_is_malformed() {
        let text = "Course Number: 101\n";
        assert!(matches!(
            read_catalog(Cursor::new(text)),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_meeting_line_without_range_is_malformed() {
        let text = "Category: Math\n\
                    Course Number: 101\n\
                    \x20\x20MWF\n";
        assert!(matches!(
            read_catalog(Cursor::new(text)),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_bad_time_literal_surfaces_parse_error() {
        let text = "Category: Math\n\
                    Course Number: 101\n\
                    \x20\x20MWF 9:00-10:00\n";
        assert!(matches!(
            read_catalog(Cursor::new(text)),
            Err(Error::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_empty_catalog() {
        let catalog = read_catalog(Cursor::new("")).unwrap();
        assert!(catalog.is_empty());
    }
}
