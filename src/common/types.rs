use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The instant type used throughout the crate. Naive (no offset) because the
/// caller supplies any timezone normalization up front.
pub type Timestamp = NaiveDateTime;

/// A single raw observation: when it was taken, what was observed and the
/// observed scalar. `kind` is an open categorical key (`"TEMP"`, `"SPO2"`, ...),
/// not a fixed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "Date")]
    pub timestamp: Timestamp,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

impl Measurement {
    pub fn new(timestamp: Timestamp, kind: impl Into<String>, value: f64) -> Self {
        Measurement {
            timestamp,
            kind: kind.into(),
            value,
        }
    }
}

/// One output row per non-empty, in-range bucket per kind. `bucket_label` is
/// the right edge of the bucket `(bucket_label - width, bucket_label]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledRecord {
    #[serde(rename = "Date")]
    pub bucket_label: Timestamp,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Value")]
    pub value: f64,
}
