use rayon::prelude::*;
use serde::Serialize;

use crate::extract::recode::{clean_education, clean_job, flag};
use crate::load::Contact;

/// Demographic slice of the unified table, one row per contact attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRecord {
    pub client_id: u64,
    pub age: Option<String>,
    pub job: Option<String>,
    pub marital: Option<String>,
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

/// Project the client columns out of the unified table. Row count and order
/// are preserved; all recoding is null-safe.
pub fn extract_client(contacts: &[Contact]) -> Vec<ClientRecord> {
    contacts
        .par_iter()
        .map(|c| ClientRecord {
            client_id: c.client_id,
            age: c.row.age.clone(),
            job: clean_job(c.row.job.as_deref()),
            marital: c.row.marital.clone(),
            education: clean_education(c.row.education.as_deref()),
            credit_default: flag(c.row.credit_default.as_deref(), "yes"),
            mortgage: flag(c.row.mortgage.as_deref(), "yes"),
        })
        .collect()
}
