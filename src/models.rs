//! Frontend Models
//!
//! Data structures matching the backend movie records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted movie-log entry, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: u32,
    pub movie_name: String,
    pub watch_date: NaiveDate,
    pub rating: u8,
    #[serde(default)]
    pub review: Option<String>,
}

/// Request body for create and update calls. Never carries an id: a new
/// record has none yet, and an update addresses its record through the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoviePayload {
    pub movie_name: String,
    pub watch_date: NaiveDate,
    pub rating: u8,
    pub review: String,
}
