//! Circular genome map
//!
//! Lays a whole genome out as arcs around a circle. A fixed angular gap is
//! inserted between every pair of adjacent chromosomes and once more
//! between the last and the first, so `n` chromosomes consume `n` gaps and
//! the remaining angle is shared proportionally by length. Angle zero sits
//! at the top of the circle, not at the 3-o'clock position.

use crate::genome::Genome;
use crate::types::GenomicPos;
use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

/// Angular gap between adjacent chromosome arcs, about two degrees.
pub const CHR_SPACING_RAD: f64 = 0.035;

/// Rotates the zero-point from 3 o'clock to 12 o'clock.
const TOP_OFFSET_RAD: f64 = 1.5 * PI;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromosomeArc {
    pub name: String,
    pub length: GenomicPos,
    /// Start angle, reduced into `[0, 2pi)`.
    pub radian_start: f64,
    /// Angular extent of the arc; never wraps.
    pub radian_span: f64,
}

impl ChromosomeArc {
    pub fn radian_end(&self) -> f64 {
        wrap(self.radian_start + self.radian_span)
    }
}

/// Immutable whole-genome bp -> radian layout. The `rotation` parameter
/// exists so a secondary map can start its zero-point exactly where one
/// chromosome's arc begins on a primary map (chord expansion); pass the
/// primary map's `radian_start_of_index` for that chromosome, negated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircularGenomeMap {
    arcs: Vec<ChromosomeArc>,
    index: HashMap<String, usize>,
    rads_per_bp: f64,
    rotation: f64,
}

fn wrap(theta: f64) -> f64 {
    theta.rem_euclid(TAU)
}

impl CircularGenomeMap {
    pub fn build(genome: &Genome, rotation_radians: f64) -> Self {
        let n = genome.chromosome_count();
        if n == 0 {
            return Self {
                arcs: Vec::new(),
                index: HashMap::new(),
                rads_per_bp: 0.0,
                rotation: rotation_radians,
            };
        }

        let rads_per_bp = (TAU - CHR_SPACING_RAD * n as f64) / genome.total_length as f64;

        let mut arcs = Vec::with_capacity(n);
        let mut index = HashMap::with_capacity(n);
        for (i, chr) in genome.chromosomes.iter().enumerate() {
            let start = CHR_SPACING_RAD * i as f64
                + rotation_radians
                + chr.offset as f64 * rads_per_bp
                + TOP_OFFSET_RAD;
            index.insert(chr.name.clone(), i);
            arcs.push(ChromosomeArc {
                name: chr.name.clone(),
                length: chr.length,
                radian_start: wrap(start),
                radian_span: chr.length as f64 * rads_per_bp,
            });
        }

        Self {
            arcs,
            index,
            rads_per_bp,
            rotation: rotation_radians,
        }
    }

    /// Angle of a base-pair coordinate on the named chromosome.
    pub fn radians_of(&self, chr: &str, bp: GenomicPos) -> Option<f64> {
        self.arc(chr)
            .map(|arc| wrap(arc.radian_start + bp as f64 * self.rads_per_bp))
    }

    /// Cartesian position of a base-pair coordinate at the given radius,
    /// relative to the circle's center.
    pub fn to_cartesian(&self, chr: &str, bp: GenomicPos, radius: f64) -> Option<(f64, f64)> {
        self.radians_of(chr, bp)
            .map(|theta| (theta.cos() * radius, theta.sin() * radius))
    }

    /// `(start, end)` angles of the named chromosome's arc, each reduced
    /// into `[0, 2pi)`; end < start means the arc crosses the zero angle.
    pub fn radians_of_chr(&self, chr: &str) -> Option<(f64, f64)> {
        self.arc(chr).map(|arc| (arc.radian_start, arc.radian_end()))
    }

    pub fn radian_start_of_index(&self, index: usize) -> Option<f64> {
        self.arcs.get(index).map(|arc| arc.radian_start)
    }

    pub fn arc(&self, chr: &str) -> Option<&ChromosomeArc> {
        self.index.get(chr).map(|&i| &self.arcs[i])
    }

    pub fn arcs(&self) -> &[ChromosomeArc] {
        &self.arcs
    }

    pub fn rads_per_bp(&self) -> f64 {
        self.rads_per_bp
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}
