pub mod campaign;
pub mod client;
pub mod economics;
pub mod recode;

pub use campaign::{extract_campaign, CampaignRecord};
pub use client::{extract_client, ClientRecord};
pub use economics::{extract_economics, EconomicsRecord};
