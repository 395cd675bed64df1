use serde::{Deserialize, Serialize};
use thiserror::Error;

const EXPLORE_NEARBY: &str = include_str!("../data/explore.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub img: String,
    pub location: String,
    pub distance: String,
}

#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("invalid listing data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_listings(raw: &str) -> Result<Vec<ListingSummary>, ListingsError> {
    Ok(serde_json::from_str(raw)?)
}

/// Listings for the "Explore nearby" section of the home page.
pub fn explore_nearby() -> Result<Vec<ListingSummary>, ListingsError> {
    parse_listings(EXPLORE_NEARBY)
}
