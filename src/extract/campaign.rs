use rayon::prelude::*;
use serde::Serialize;

use crate::extract::recode::{contact_date, flag};
use crate::load::Contact;

/// Campaign interaction slice of the unified table, one row per contact
/// attempt. `last_contact_date` combines the raw day and month fields with
/// the fixed campaign year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignRecord {
    pub client_id: u64,
    pub number_contacts: Option<String>,
    pub contact_duration: Option<String>,
    pub previous_campaign_contacts: Option<String>,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    pub last_contact_date: Option<String>,
}

pub fn extract_campaign(contacts: &[Contact]) -> Vec<CampaignRecord> {
    contacts
        .par_iter()
        .map(|c| CampaignRecord {
            client_id: c.client_id,
            number_contacts: c.row.number_contacts.clone(),
            contact_duration: c.row.contact_duration.clone(),
            previous_campaign_contacts: c.row.previous_campaign_contacts.clone(),
            previous_outcome: flag(c.row.previous_outcome.as_deref(), "success"),
            campaign_outcome: flag(c.row.campaign_outcome.as_deref(), "yes"),
            last_contact_date: contact_date(c.row.day.as_deref(), c.row.month.as_deref()),
        })
        .collect()
}
