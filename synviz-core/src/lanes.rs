//! QTL lane packing
//!
//! Assigns overlapping interval features on one track to vertically
//! stacked lanes with a sweep over breakpoints (every coordinate where a
//! feature starts or ends). A feature's drawn height is the track height
//! divided by the largest number of features simultaneously active over
//! its span, and its vertical offset is the summed heights of the
//! lower-numbered lanes occupied when it starts, so the stack never
//! collides and a feature keeps one height for its whole span.
//!
//! Crowding is counted at breakpoints, not integrated over the continuous
//! interval; two features that overlap without sharing a breakpoint can be
//! counted looser or tighter than a true interval count would give. The
//! renderer is calibrated to this breakpoint-local count, so it is kept
//! as-is.

use crate::types::{GenomicPos, QtlRecord};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneAssignment {
    pub feature_id: String,
    /// Lane index, lowest at the track's origin. Diagnostic; renderers
    /// consume `height` and `offset`.
    pub lane: usize,
    /// Drawn height in pixels.
    pub height: f64,
    /// Vertical offset from the track's origin in pixels.
    pub offset: f64,
}

/// Pack `features` into lanes on a track of `track_height` pixels.
///
/// Output order matches input order. Ties at a shared start breakpoint are
/// broken by input order, so packing the same list twice yields identical
/// assignments.
pub fn pack_lanes(features: &[QtlRecord], track_height: f64) -> Vec<LaneAssignment> {
    if features.is_empty() {
        return Vec::new();
    }

    let mut breakpoints: BTreeSet<GenomicPos> = BTreeSet::new();
    for feature in features {
        breakpoints.insert(feature.start);
        breakpoints.insert(feature.end);
    }

    // Occupied lane slots, holding the index of the occupying feature.
    let mut lanes: Vec<Option<usize>> = Vec::new();
    let mut lane_of: Vec<Option<usize>> = vec![None; features.len()];
    let mut min_fraction: Vec<f64> = vec![1.0; features.len()];
    // Per feature, the occupants of lower-numbered lanes at its start.
    let mut below_at_start: Vec<Vec<usize>> = vec![Vec::new(); features.len()];

    for &bp in &breakpoints {
        // Free features that have ended, keeping a zero-length feature
        // alive at the one breakpoint where it both starts and ends.
        for slot in lanes.iter_mut() {
            if let Some(idx) = *slot {
                let f = &features[idx];
                if f.end < bp || (f.end == bp && f.start < f.end) {
                    *slot = None;
                }
            }
        }

        // Assign starters to the lowest free lane, in input order.
        for (idx, feature) in features.iter().enumerate() {
            if feature.start != bp {
                continue;
            }
            let lane = match lanes.iter().position(|slot| slot.is_none()) {
                Some(free) => {
                    lanes[free] = Some(idx);
                    free
                }
                None => {
                    lanes.push(Some(idx));
                    lanes.len() - 1
                }
            };
            lane_of[idx] = Some(lane);
            below_at_start[idx] = lanes[..lane].iter().flatten().copied().collect();
        }

        let active = lanes.iter().flatten().count();
        if active > 0 {
            let fraction = 1.0 / active as f64;
            for &idx in lanes.iter().flatten() {
                min_fraction[idx] = min_fraction[idx].min(fraction);
            }
        }

        // Drop trailing free lanes so transient peaks do not inflate the
        // lane count for later breakpoints.
        while matches!(lanes.last(), Some(None)) {
            lanes.pop();
        }
    }

    let assignments = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            let offset: f64 = below_at_start[idx]
                .iter()
                .map(|&below| track_height * min_fraction[below])
                .sum();
            LaneAssignment {
                feature_id: feature.id.clone(),
                lane: lane_of[idx].expect("every feature passes its own start breakpoint"),
                height: track_height * min_fraction[idx],
                offset,
            }
        })
        .collect();

    log::debug!("packed {} features for one track", features.len());
    assignments
}
