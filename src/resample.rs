//! Fixed-width, last-value downsampling.
//!
//! Buckets are right-closed and right-labeled: a measurement at `start + k * width`
//! lands in the bucket ending exactly there, not the following one. The grid is
//! anchored at the sampling start, buckets are computed independently per
//! measurement kind, and buckets whose label falls before the start are dropped.
//! Timestamps are a genuine instant type, so the "must be a datetime" precondition
//! of the textual boundary is enforced statically here; only the width is checked
//! at runtime.

use ahash::AHashMap;
use chrono::Duration;
use tracing::debug;

use crate::common::types::{Measurement, ResampledRecord, Timestamp};
use crate::config::SamplingConfig;
use crate::error::ResampleResult;

struct BucketSlot {
    timestamp: Timestamp,
    value: f64,
}

/// Downsamples `measurements` into buckets of `width` anchored at `start`,
/// keeping the chronologically last value per `(kind, bucket)`.
///
/// Input order is irrelevant except for exact-timestamp ties, where the later
/// input record wins. Output is ordered by kind, then by bucket label.
pub fn resample(
    start: Timestamp,
    width: Duration,
    measurements: &[Measurement],
) -> ResampleResult<Vec<ResampledRecord>> {
    resample_with_config(&SamplingConfig { start, width }, measurements)
}

pub fn resample_with_config(
    config: &SamplingConfig,
    measurements: &[Measurement],
) -> ResampleResult<Vec<ResampledRecord>> {
    config.validate()?;

    let start = config.start;
    let width_ms = config.width.num_milliseconds();

    // kind -> bucket index -> last candidate. Bucket index k labels the
    // interval (start + (k-1)*width, start + k*width].
    let mut groups: AHashMap<&str, AHashMap<i64, BucketSlot>> = AHashMap::new();
    for m in measurements {
        let delta = (m.timestamp - start).num_milliseconds();
        let bucket = (delta + width_ms - 1).div_euclid(width_ms);
        if bucket < 0 {
            // closes before the sampling start
            continue;
        }
        groups
            .entry(m.kind.as_str())
            .or_default()
            .entry(bucket)
            .and_modify(|slot| {
                if m.timestamp >= slot.timestamp {
                    slot.timestamp = m.timestamp;
                    slot.value = m.value;
                }
            })
            .or_insert(BucketSlot {
                timestamp: m.timestamp,
                value: m.value,
            });
    }

    let mut records: Vec<ResampledRecord> = groups
        .into_iter()
        .flat_map(|(kind, buckets)| {
            buckets.into_iter().map(move |(bucket, slot)| ResampledRecord {
                bucket_label: start + Duration::milliseconds(bucket * width_ms),
                kind: kind.to_string(),
                value: slot.value,
            })
        })
        .collect();
    records.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.bucket_label.cmp(&b.bucket_label))
    });

    debug!(
        input = measurements.len(),
        output = records.len(),
        "resampled measurements"
    );
    Ok(records)
}
