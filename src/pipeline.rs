// src/pipeline.rs
use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::extract::{extract_campaign, extract_client, extract_economics};
use crate::load::load_input_dir;
use crate::write::write_outputs;

/// Run the full split: load every archive under `input_dir`, derive the
/// client, campaign and economics tables, and write them under `out_dir`.
/// The three extractions are independent projections over the immutable
/// unified table.
#[tracing::instrument(level = "info", skip_all, fields(input = %input_dir.as_ref().display(), output = %out_dir.as_ref().display()))]
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input_dir: P, out_dir: Q) -> Result<()> {
    let contacts = load_input_dir(input_dir.as_ref())?;

    let clients = extract_client(&contacts);
    let campaigns = extract_campaign(&contacts);
    let economics = extract_economics(&contacts);
    info!(rows = contacts.len(), "derived client, campaign and economics tables");

    write_outputs(out_dir.as_ref(), &clients, &campaigns, &economics)
}
