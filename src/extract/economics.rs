use rayon::prelude::*;
use serde::Serialize;

use crate::load::Contact;

/// Macroeconomic slice of the unified table. Values are copied verbatim,
/// only the column names change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicsRecord {
    pub client_id: u64,
    pub consumer_price_index: Option<String>,
    pub three_month_rate: Option<String>,
}

pub fn extract_economics(contacts: &[Contact]) -> Vec<EconomicsRecord> {
    contacts
        .par_iter()
        .map(|c| EconomicsRecord {
            client_id: c.client_id,
            consumer_price_index: c.row.cons_price_idx.clone(),
            three_month_rate: c.row.euribor_three_months.clone(),
        })
        .collect()
}
