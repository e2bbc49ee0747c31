// src/load/mod.rs
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use glob::glob;
use serde::Deserialize;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use zip::ZipArchive;

/// One input row exactly as it appears inside the zipped CSVs. Every field
/// is optional: an empty cell deserializes to `None`. Columns the schema
/// does not name (the leftover index column some exports carry) are ignored
/// during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    pub age: Option<String>,
    pub job: Option<String>,
    pub marital: Option<String>,
    pub education: Option<String>,
    pub credit_default: Option<String>,
    pub mortgage: Option<String>,
    pub number_contacts: Option<String>,
    pub contact_duration: Option<String>,
    pub previous_campaign_contacts: Option<String>,
    pub previous_outcome: Option<String>,
    pub campaign_outcome: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
    pub cons_price_idx: Option<String>,
    pub euribor_three_months: Option<String>,
}

/// One campaign contact attempt from the unified table.
///
/// `client_id` is the 1-based position of the row after concatenating all
/// archives in discovery order. It is unique and dense within a run but is
/// not a stable identity across runs.
#[derive(Debug, Clone)]
pub struct Contact {
    pub client_id: u64,
    pub row: RawRow,
}

/// Discover every `*.csv.zip` archive under `input_dir`, decode each inner
/// `.csv` entry, and concatenate all rows into the unified table with dense
/// `client_id`s 1..N. Archive discovery order is lexicographic (glob), row
/// order within each archive is preserved.
#[tracing::instrument(level = "info", skip(input_dir), fields(dir = %input_dir.as_ref().display()))]
pub fn load_input_dir<P: AsRef<Path>>(input_dir: P) -> Result<Vec<Contact>> {
    let pattern = input_dir.as_ref().join("*.csv.zip");
    let archives: Vec<PathBuf> = glob(&pattern.to_string_lossy())
        .context("invalid archive glob pattern")?
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("failed to read {}", input_dir.as_ref().display()))?;

    if archives.is_empty() {
        bail!(
            "no *.csv.zip archives found in {}",
            input_dir.as_ref().display()
        );
    }

    let mut rows: Vec<RawRow> = Vec::new();
    for path in &archives {
        let n = read_archive(path, &mut rows)?;
        debug!(archive = %path.display(), rows = n, "decoded archive");
    }
    if rows.is_empty() {
        bail!("archives in {} contained no rows", input_dir.as_ref().display());
    }
    info!(archives = archives.len(), rows = rows.len(), "loaded input");

    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| Contact {
            client_id: i as u64 + 1,
            row,
        })
        .collect())
}

/// Append every row from `zip_path` to `rows`, returning how many were
/// added. CSV entries are buffered out of the archive first so parsing runs
/// on plain memory and the zip handle is released early.
fn read_archive(zip_path: &Path, rows: &mut Vec<RawRow>) -> Result<usize> {
    let file = File::open(zip_path)
        .with_context(|| format!("failed to open archive {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read archive {}", zip_path.display()))?;

    let mut buffers: Vec<(String, Vec<u8>)> = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("failed to access entry #{} in {}", i, zip_path.display()))?;
        let name = entry.name().to_string();

        if entry.is_file() && name.to_lowercase().ends_with(".csv") {
            let mut buf = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {} from {}", name, zip_path.display()))?;
            buffers.push((name, buf));
        }
    }
    drop(archive);

    let before = rows.len();
    for (name, data) in buffers {
        let mut rdr = ReaderBuilder::new().from_reader(Cursor::new(data));
        for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
            let row = result.with_context(|| {
                format!(
                    "CSV parse error in {} ({}) at record {}",
                    name,
                    zip_path.display(),
                    idx
                )
            })?;
            rows.push(row);
        }
    }
    Ok(rows.len() - before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    use zip::write::FileOptions;
    use zip::CompressionMethod;

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,bankscrub::load=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    const HEADER: &str = "age,job,marital,education,credit_default,mortgage,\
number_contacts,contact_duration,previous_campaign_contacts,previous_outcome,\
campaign_outcome,day,month,cons_price_idx,euribor_three_months";

    fn sample_line(age: u32) -> String {
        format!(
            "{age},admin.,married,university.degree,no,yes,2,120,0,nonexistent,no,5,may,93.994,4.857"
        )
    }

    fn write_zip(dir: &Path, name: &str, csv_text: &str) -> Result<()> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options: FileOptions<'_, ()> =
                FileOptions::default().compression_method(CompressionMethod::Deflated);
            zip.start_file("bank.csv", options)?;
            zip.write_all(csv_text.as_bytes())?;
            zip.finish()?;
        }
        std::fs::write(dir.join(name), &buf)?;
        Ok(())
    }

    fn csv_with_rows(rows: &[String]) -> String {
        let mut text = String::from(HEADER);
        text.push('\n');
        for r in rows {
            text.push_str(r);
            text.push('\n');
        }
        text
    }

    #[test]
    fn concatenates_archives_with_dense_ids() -> Result<()> {
        init_test_logging();
        let dir = TempDir::new()?;

        let first: Vec<String> = (30..33).map(sample_line).collect();
        let second: Vec<String> = (40..45).map(sample_line).collect();
        write_zip(dir.path(), "bank-marketing-0.csv.zip", &csv_with_rows(&first))?;
        write_zip(dir.path(), "bank-marketing-1.csv.zip", &csv_with_rows(&second))?;

        let contacts = load_input_dir(dir.path())?;
        assert_eq!(contacts.len(), 8);

        let ids: Vec<u64> = contacts.iter().map(|c| c.client_id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());

        // lexicographic discovery order: archive 0 before archive 1
        assert_eq!(contacts[0].row.age.as_deref(), Some("30"));
        assert_eq!(contacts[3].row.age.as_deref(), Some("40"));
        Ok(())
    }

    #[test]
    fn empty_directory_is_fatal() -> Result<()> {
        init_test_logging();
        let dir = TempDir::new()?;
        let err = load_input_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no *.csv.zip archives"));
        Ok(())
    }

    #[test]
    fn leftover_index_column_is_discarded() -> Result<()> {
        init_test_logging();
        let dir = TempDir::new()?;

        let text = format!(",{HEADER}\n0,{}\n", sample_line(55));
        write_zip(dir.path(), "indexed.csv.zip", &text)?;

        let contacts = load_input_dir(dir.path())?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].row.age.as_deref(), Some("55"));
        assert_eq!(contacts[0].row.job.as_deref(), Some("admin."));
        Ok(())
    }

    #[test]
    fn empty_cells_load_as_missing() -> Result<()> {
        init_test_logging();
        let dir = TempDir::new()?;

        let row = "31,,single,,unknown,no,1,80,0,nonexistent,no,12,jun,92.893,1.299";
        write_zip(
            dir.path(),
            "sparse.csv.zip",
            &csv_with_rows(&[row.to_string()]),
        )?;

        let contacts = load_input_dir(dir.path())?;
        assert_eq!(contacts[0].row.job, None);
        assert_eq!(contacts[0].row.education, None);
        assert_eq!(contacts[0].row.credit_default.as_deref(), Some("unknown"));
        Ok(())
    }
}
