use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord};

/// Column names as they appear in the source table.
const COL_SITE: &str = "Launch Site";
const COL_PAYLOAD: &str = "Payload Mass (kg)";
const COL_CLASS: &str = "class";
const COL_BOOSTER: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least the `Launch Site`, `class`,
///   `Payload Mass (kg)` and `Booster Version Category` columns; any other
///   columns are ignored
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Raw row shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One source row, keyed by the original column names.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRecord {
    fn into_record(self, row_no: usize) -> Result<LaunchRecord> {
        LaunchRecord::new(
            self.launch_site,
            self.payload_mass_kg,
            self.class,
            self.booster_category,
        )
        .with_context(|| format!("Row {row_no}"))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER] {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "KSC LC-39A",
///     "Payload Mass (kg)": 3310.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(row_no, r)| r.into_record(row_no))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
             1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n\
             24,KSC LC-39A,1,5300,F9 FT B1031.1,FT\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].payload_mass_kg, 5300.0);
        assert_eq!(ds.records[1].booster_category, "FT");
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn csv_error_names_the_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,100,v1.0\n",
        );

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing 'class'"), "{err:#}");
    }

    #[test]
    fn csv_rejects_out_of_domain_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             CCAFS LC-40,2,100,v1.0\n",
        );

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("0 or 1"), "{err:#}");
    }

    #[test]
    fn loads_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.json",
            r#"[
                {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 500.0,
                 "class": 1, "Booster Version Category": "v1.1"},
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 9600.0,
                 "class": 1, "Booster Version Category": "B4"}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_extent, Some((500.0, 9600.0)));
        assert_eq!(ds.booster_categories, vec!["B4", "v1.1"]);
    }

    #[test]
    fn rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "launches.txt", "not a table");

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn loads_the_committed_dataset_asset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/launch_records.csv");
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 56);
        assert_eq!(
            ds.sites,
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(
            ds.booster_categories,
            vec!["B4", "B5", "FT", "v1.0", "v1.1"]
        );
        assert_eq!(ds.payload_extent, Some((0.0, 9600.0)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_file(Path::new("no/such/launches.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("opening CSV"));
    }
}
