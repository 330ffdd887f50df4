//! Linear genome map
//!
//! Lays a whole genome out as consecutive chromosome segments along a
//! horizontal pixel axis, with a fixed pixel gap between chromosomes. The
//! drawable width is the available width minus `(n - 1)` gaps, and every
//! chromosome gets a share proportional to its length.

use crate::genome::Genome;
use crate::scale::LinearScale;
use crate::types::GenomicPos;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromosomeSegment {
    pub name: String,
    pub length: GenomicPos,
    pub pixel_start: f64,
    pub pixel_end: f64,
    /// `[0, length]` bp onto `[pixel_start, pixel_end]`.
    pub scale: LinearScale,
}

/// Immutable whole-genome bp -> pixel layout. Rebuilt, never patched, when
/// the genome selection or the available width changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGenomeMap {
    segments: Vec<ChromosomeSegment>,
    index: HashMap<String, usize>,
    px_per_bp: f64,
    available_width: f64,
    spacing: f64,
}

impl LinearGenomeMap {
    pub fn build(genome: &Genome, available_width: f64, spacing: f64) -> Self {
        let n = genome.chromosome_count();
        if n == 0 {
            return Self {
                segments: Vec::new(),
                index: HashMap::new(),
                px_per_bp: 0.0,
                available_width,
                spacing,
            };
        }

        let drawable = available_width - spacing * (n as f64 - 1.0);
        let px_per_bp = drawable / genome.total_length as f64;

        let mut segments = Vec::with_capacity(n);
        let mut index = HashMap::with_capacity(n);
        for (i, chr) in genome.chromosomes.iter().enumerate() {
            let pixel_start = spacing * i as f64 + chr.offset as f64 * px_per_bp;
            let pixel_end = pixel_start + chr.length as f64 * px_per_bp;
            index.insert(chr.name.clone(), i);
            segments.push(ChromosomeSegment {
                name: chr.name.clone(),
                length: chr.length,
                pixel_start,
                pixel_end,
                scale: LinearScale::new((0.0, chr.length as f64), (pixel_start, pixel_end)),
            });
        }

        log::debug!(
            "built linear map: {} chromosomes over {:.1}px at {:.6}px/bp",
            n,
            available_width,
            px_per_bp
        );

        Self {
            segments,
            index,
            px_per_bp,
            available_width,
            spacing,
        }
    }

    /// Pixel position of a base-pair coordinate on the named chromosome.
    pub fn position_of(&self, chr: &str, bp: GenomicPos) -> Option<f64> {
        self.segment(chr).map(|seg| seg.scale.apply(bp as f64))
    }

    /// Pixel width of a base-pair interval on the named chromosome.
    pub fn width_of(&self, chr: &str, start_bp: GenomicPos, end_bp: GenomicPos) -> Option<f64> {
        self.segment(chr)
            .map(|seg| (seg.scale.apply(end_bp as f64) - seg.scale.apply(start_bp as f64)).abs())
    }

    /// Pixel start of the chromosome at the given draw index.
    pub fn chr_pixel_start(&self, index: usize) -> Option<f64> {
        self.segments.get(index).map(|seg| seg.pixel_start)
    }

    pub fn chr_pixel_width(&self, chr: &str) -> Option<f64> {
        self.segment(chr).map(|seg| seg.pixel_end - seg.pixel_start)
    }

    pub fn segment(&self, chr: &str) -> Option<&ChromosomeSegment> {
        self.index.get(chr).map(|&i| &self.segments[i])
    }

    pub fn segments(&self) -> &[ChromosomeSegment] {
        &self.segments
    }

    /// The per-chromosome scale, used as the reference scale for block and
    /// viewport derivations when a chromosome fills the whole track.
    pub fn scale_of(&self, chr: &str) -> Option<&LinearScale> {
        self.segment(chr).map(|seg| &seg.scale)
    }

    pub fn px_per_bp(&self) -> f64 {
        self.px_per_bp
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
