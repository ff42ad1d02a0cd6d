//! Builds the photo grid from a YAML manifest of people and their photos.
//!
//! Rows are age groups: a photo lands in the row of the number of weeks
//! between the person's birth date and the capture date. Columns are people,
//! sorted by name.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ImageUrls;
use crate::error::Error;
use crate::grid::{Cell, Grid, Row, Thumbnail};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Person {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub photos: Vec<PhotoEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PhotoEntry {
    pub id: String,
    pub captured: NaiveDate,
    #[serde(default)]
    pub trashed: bool,
    #[serde(default)]
    pub archived: bool,
}

pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, Error> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&s)?)
}

/// Load a manifest and build its grid.
///
/// # Errors
/// Returns [`Error::EmptyTimeline`] when no photo qualifies for any row.
pub fn load_grid(path: impl AsRef<Path>, urls: &ImageUrls) -> Result<Grid, Error> {
    let manifest = load_manifest(path)?;
    let grid = build_grid(&manifest, urls);
    if grid.rows.is_empty() {
        return Err(Error::EmptyTimeline);
    }
    info!(
        people = grid.headers.len(),
        rows = grid.rows.len(),
        "timeline loaded"
    );
    Ok(grid)
}

/// 1-based week of `date` counted from `birth`. Dates before the birth date
/// give zero or less.
pub fn week_number(birth: NaiveDate, date: NaiveDate) -> i64 {
    (date - birth).num_days().div_euclid(7) + 1
}

/// Human readable age such as `"2 years and 3 weeks"`.
pub fn age_string(birth: NaiveDate, date: NaiveDate) -> String {
    let days = (date - birth).num_days();
    let years = days.div_euclid(365);
    let weeks = (days - years * 365).div_euclid(7) + 1;

    let w_label = if weeks == 1 { "week" } else { "weeks" };
    if years == 0 {
        return format!("{weeks} {w_label}");
    }
    let y_label = if years == 1 { "year" } else { "years" };
    format!("{years} {y_label} and {weeks} {w_label}")
}

struct Group {
    age: String,
    columns: Vec<Vec<Thumbnail>>,
}

pub fn build_grid(manifest: &Manifest, urls: &ImageUrls) -> Grid {
    let mut people: Vec<&Person> = manifest
        .people
        .iter()
        .filter(|p| !p.name.trim().is_empty())
        .collect();
    people.sort_by(|a, b| a.name.cmp(&b.name));

    let mut groups: BTreeMap<i64, Group> = BTreeMap::new();
    for (column, person) in people.iter().enumerate() {
        for photo in &person.photos {
            if photo.trashed || photo.archived {
                continue;
            }
            let week = week_number(person.birth_date, photo.captured);
            if week < 1 {
                debug!(person = %person.name, id = %photo.id, "photo predates birth date; skipped");
                continue;
            }
            let group = groups.entry(week).or_insert_with(|| Group {
                age: age_string(person.birth_date, photo.captured),
                columns: vec![Vec::new(); people.len()],
            });
            group.columns[column].push(Thumbnail::lazy(urls.thumbnail(&photo.id), &person.name));
        }
    }

    Grid {
        headers: people.iter().map(|p| p.name.clone()).collect(),
        rows: groups
            .into_values()
            .map(|group| Row {
                age_label: Some(group.age),
                cells: group
                    .columns
                    .into_iter()
                    .map(|thumbnails| Cell { thumbnails })
                    .collect(),
                collapsed: false,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_numbers_start_at_one() {
        let birth = date(2020, 1, 1);
        assert_eq!(week_number(birth, birth), 1);
        assert_eq!(week_number(birth, date(2020, 1, 7)), 1);
        assert_eq!(week_number(birth, date(2020, 1, 8)), 2);
        assert_eq!(week_number(birth, date(2019, 12, 31)), 0);
    }

    #[test]
    fn age_strings_pluralise() {
        let birth = date(2020, 1, 1);
        assert_eq!(age_string(birth, birth), "1 week");
        assert_eq!(age_string(birth, date(2020, 1, 15)), "3 weeks");
        assert_eq!(age_string(birth, date(2020, 12, 31)), "1 year and 1 week");
        assert_eq!(age_string(birth, date(2022, 1, 20)), "2 years and 3 weeks");
    }

    #[test]
    fn photos_group_by_week_and_person() {
        let yaml = r#"
people:
  - name: Bob
    birth-date: 2021-01-01
    photos:
      - id: b1
        captured: 2021-01-03
      - id: gone
        captured: 2021-01-04
        trashed: true
  - name: Alice
    birth-date: 2021-01-01
    photos:
      - id: a1
        captured: 2021-01-20
      - id: a2
        captured: 2021-01-02
      - id: early
        captured: 2020-12-01
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        let grid = build_grid(&manifest, &ImageUrls::default());

        assert_eq!(grid.headers, vec!["Alice", "Bob"]);
        assert_eq!(grid.rows.len(), 2);

        let first = &grid.rows[0];
        assert_eq!(first.age(), "1 week");
        assert_eq!(first.cells.len(), 2);
        assert_eq!(
            first.cells[0].thumbnails[0].data_src.as_deref(),
            Some("/thumbnail/a2")
        );
        assert_eq!(first.cells[1].thumbnails.len(), 1);
        assert_eq!(first.cells[1].thumbnails[0].alt, "Bob");

        let third_week = &grid.rows[1];
        assert_eq!(third_week.age(), "3 weeks");
        assert!(third_week.cells[1].thumbnails.is_empty());
        assert!(third_week.cells[0].thumbnails[0].lazy);
    }
}
