//! Downsamples an irregularly timestamped batch of typed scalar measurements
//! into fixed-width, non-overlapping time buckets, keeping the chronologically
//! last value observed in each bucket per measurement kind and dropping
//! buckets that close before the sampling start.
//!
//! The core is [`resample`]: a pure, stateless, batch transformation. Reading
//! delimited input and rendering output live in [`source`] and [`sink`].

pub mod common;
pub mod config;
pub mod error;
pub mod resample;
pub mod sink;
pub mod source;

pub use common::types::{Measurement, ResampledRecord, Timestamp};
pub use config::{default_bucket_width, SamplingConfig, DEFAULT_BUCKET_WIDTH_MS};
pub use error::{ResampleError, ResampleResult};
pub use resample::{resample, resample_with_config};
