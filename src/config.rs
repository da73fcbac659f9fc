use crate::common::types::Timestamp;
use crate::error::{ResampleError, ResampleResult};
use chrono::Duration;

/// Default bucket width used if not set.
pub const DEFAULT_BUCKET_WIDTH_MS: i64 = 5 * 60 * 1000;

pub fn default_bucket_width() -> Duration {
    Duration::milliseconds(DEFAULT_BUCKET_WIDTH_MS)
}

/// The origin and granularity of one resampling pass. `start` anchors the
/// bucket grid and is the inclusive lower bound on reported bucket labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
    pub start: Timestamp,
    pub width: Duration,
}

impl SamplingConfig {
    pub fn new(start: Timestamp) -> Self {
        Self {
            start,
            width: default_bucket_width(),
        }
    }

    pub fn with_width(mut self, width: Duration) -> Self {
        self.width = width;
        self
    }

    pub fn validate(&self) -> ResampleResult<()> {
        if self.width.num_milliseconds() <= 0 {
            return Err(ResampleError::InvalidInput(
                "the bucket width must be a positive duration".to_string(),
            ));
        }
        Ok(())
    }
}
