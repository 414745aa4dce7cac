//! Job catalog reader.
//!
//! CSV catalogs need a `role` and a `skills` column; other columns are
//! ignored. JSON catalogs are an array of `{"role": .., "skills": ..}` objects.

use crate::{IngestError, Result};
use skillmatch_core::{Catalog, JobRole};
use std::io::Read;
use std::path::Path;

pub const ROLE_COLUMN: &str = "role";
pub const SKILLS_COLUMN: &str = "skills";

/// Read a catalog file, choosing the format by extension (`.json`, otherwise CSV).
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let label = path.display().to_string();
    if is_json {
        read_catalog_json(file)
    } else {
        read_catalog_csv(file, &label)
    }
}

/// CSV catalog from any reader. `label` names the source in errors.
pub fn read_catalog_csv<R: Read>(reader: R, label: &str) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in [ROLE_COLUMN, SKILLS_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn {
                path: label.to_string(),
                column,
            });
        }
    }

    let roles = rdr
        .deserialize::<JobRole>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Catalog::new(roles))
}

pub fn read_catalog_json<R: Read>(reader: R) -> Result<Catalog> {
    let roles: Vec<JobRole> = serde_json::from_reader(reader)?;
    Ok(Catalog::new(roles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JOBS_CSV: &str = "\
role,skills
Data Analyst,Python Data Analysis Excel SQL
ML Engineer,Python Machine Learning Deep Learning Statistics
Software Dev,\"Java C++ Python Git\"
";

    #[test]
    fn test_csv_catalog_in_file_order() {
        let catalog = read_catalog_csv(JOBS_CSV.as_bytes(), "jobs.csv").unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.titles().collect::<Vec<_>>(),
            vec!["Data Analyst", "ML Engineer", "Software Dev"]
        );
        assert_eq!(catalog.roles()[2].skills, "Java C++ Python Git");
    }

    #[test]
    fn test_csv_extra_columns_ignored() {
        let csv = "id,role,level,skills\n1,Tester,junior,selenium python\n";
        let catalog = read_catalog_csv(csv.as_bytes(), "jobs.csv").unwrap();
        assert_eq!(catalog.roles()[0], JobRole::new("Tester", "selenium python"));
    }

    #[test]
    fn test_csv_missing_column_is_an_error() {
        let csv = "title,skills\nTester,selenium\n";
        let err = read_catalog_csv(csv.as_bytes(), "jobs.csv").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { column: "role", .. }
        ));
    }

    #[test]
    fn test_csv_header_only_is_empty_catalog() {
        let catalog = read_catalog_csv("role,skills\n".as_bytes(), "jobs.csv").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"[{"role": "Data Analyst", "skills": "python sql"}]"#;
        let catalog = read_catalog_json(json.as_bytes()).unwrap();
        assert_eq!(catalog.roles()[0].title, "Data Analyst");
    }

    #[test]
    fn test_read_catalog_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("jobs.csv");
        std::fs::write(&csv_path, JOBS_CSV).unwrap();
        assert_eq!(read_catalog(&csv_path).unwrap().len(), 3);

        let json_path = dir.path().join("jobs.JSON");
        let mut f = std::fs::File::create(&json_path).unwrap();
        write!(f, r#"[{{"role": "A", "skills": "x"}}]"#).unwrap();
        assert_eq!(read_catalog(&json_path).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalog(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, IngestError::NotFound(_)));
    }
}
