//! URL handling module for Roster-Scout
//!
//! This module provides URL normalization, link resolution, same-origin
//! checks and the per-team admission policy that keeps the crawl frontier
//! bounded.

mod domain;
mod normalize;
mod policy;

// Re-export main functions
pub use domain::{extract_host, same_origin};
pub use normalize::{normalize_url, resolve_link};
pub use policy::{Admission, AdmissionPolicy, AdmissionRule};
