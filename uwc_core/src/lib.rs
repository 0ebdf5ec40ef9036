//! This crate fetches a household's waste-collection schedule from the West
//! Northamptonshire open-data API, keyed by UPRN, and renders it as an
//! iCalendar feed or a plain-text summary.
//!
//! The schedule is read from <https://api.westnorthants.digital/openapi/v1/unified-waste-collections/{uprn}>.

pub use reqwest;

pub mod calendar;
pub mod collection_client;
pub mod config;
pub mod text;
pub mod waste_type;
