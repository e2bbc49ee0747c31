// src/write/mod.rs
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::info;

use crate::extract::{CampaignRecord, ClientRecord, EconomicsRecord};

/// Write the three record tables under `out_dir`, creating the directory if
/// needed and overwriting previous outputs. Files are written one after the
/// other; a failure leaves already-written files in place.
pub fn write_outputs(
    out_dir: &Path,
    clients: &[ClientRecord],
    campaigns: &[CampaignRecord],
    economics: &[EconomicsRecord],
) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    write_csv(out_dir, "client.csv", clients)?;
    write_csv(out_dir, "campaign.csv", campaigns)?;
    write_csv(out_dir, "economics.csv", economics)?;
    Ok(())
}

/// Serialize `records` to `<out_dir>/<file_name>` with a header row derived
/// from the record's field names.
fn write_csv<T: Serialize>(out_dir: &Path, file_name: &str, records: &[T]) -> Result<()> {
    let path = out_dir.join(file_name);
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for record in records {
        wtr.serialize(record)
            .with_context(|| format!("failed to write record to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    info!(file = %path.display(), rows = records.len(), "wrote output");
    Ok(())
}
