//! Synteny blocks
//!
//! A block ties an interval on the reference genome to its orthologous
//! interval on the comparison genome. The comparison interval is kept in
//! two forms: the *true* pair (biological orientation, start < end) and
//! the *matching* pair (display orientation, swapped when the region is
//! mirrored between the species, so left-to-right drawing stays aligned
//! with the reference).

use crate::scale::LinearScale;
use crate::types::{BlockRecord, Gene, GenomicPos, QtlRecord};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Which comparison coordinate pair a derived scale runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Biological ordering, `start < end`.
    True,
    /// Display-aligned ordering; reversed relative to `True` when the
    /// block is mirrored between the species.
    Matching,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DerivedScales {
    true_scale: LinearScale,
    match_scale: LinearScale,
    ref_pixel_start: f64,
    ref_pixel_end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntenyBlock {
    pub id: String,
    pub ref_chr: String,
    pub ref_start: GenomicPos,
    pub ref_end: GenomicPos,
    pub comp_chr: String,
    true_start: GenomicPos,
    true_end: GenomicPos,
    orientation_matches: bool,
    #[serde(skip)]
    scaled: Option<DerivedScales>,
}

impl SyntenyBlock {
    /// The comparison coordinates are normalized so the true pair always
    /// satisfies `start < end`; `orientation_matches` is fixed here and
    /// never recomputed.
    pub fn new(
        id: String,
        ref_chr: String,
        ref_start: GenomicPos,
        ref_end: GenomicPos,
        comp_chr: String,
        comp_start: GenomicPos,
        comp_end: GenomicPos,
        orientation_matches: bool,
    ) -> Self {
        let (true_start, true_end) = if comp_start <= comp_end {
            (comp_start, comp_end)
        } else {
            (comp_end, comp_start)
        };
        Self {
            id,
            ref_chr,
            ref_start,
            ref_end,
            comp_chr,
            true_start,
            true_end,
            orientation_matches,
            scaled: None,
        }
    }

    pub fn from_record(record: &BlockRecord) -> Result<Self> {
        if record.ref_start >= record.ref_end {
            bail!(
                "block {}: invalid reference interval {}..{}",
                record.id,
                record.ref_start,
                record.ref_end
            );
        }
        if record.comp_start == record.comp_end {
            bail!("block {}: empty comparison interval", record.id);
        }
        Ok(Self::new(
            record.id.clone(),
            record.ref_chr.clone(),
            record.ref_start,
            record.ref_end,
            record.comp_chr.clone(),
            record.comp_start,
            record.comp_end,
            record.orientation_matches,
        ))
    }

    pub fn orientation_matches(&self) -> bool {
        self.orientation_matches
    }

    pub fn true_coords(&self) -> (GenomicPos, GenomicPos) {
        (self.true_start, self.true_end)
    }

    pub fn match_coords(&self) -> (GenomicPos, GenomicPos) {
        if self.orientation_matches {
            (self.true_start, self.true_end)
        } else {
            (self.true_end, self.true_start)
        }
    }

    pub fn coords(&self, orientation: Orientation) -> (GenomicPos, GenomicPos) {
        match orientation {
            Orientation::True => self.true_coords(),
            Orientation::Matching => self.match_coords(),
        }
    }

    /// Derive the comparison scale for this block from an explicit
    /// reference scale value. Pure: reads nothing but the arguments, so
    /// callers re-derive on every reference-scale change instead of the
    /// block reaching into shared mutable state.
    pub fn derive_comparison_scale(
        &self,
        ref_scale: &LinearScale,
        orientation: Orientation,
    ) -> LinearScale {
        let (c0, c1) = self.coords(orientation);
        LinearScale::new(
            (c0 as f64, c1 as f64),
            (
                ref_scale.apply(self.ref_start as f64),
                ref_scale.apply(self.ref_end as f64),
            ),
        )
    }

    /// Recompute and cache both derived scales against the given reference
    /// scale. Call again whenever the reference scale changes.
    pub fn set_reference_scale(&mut self, ref_scale: &LinearScale) {
        self.scaled = Some(DerivedScales {
            true_scale: self.derive_comparison_scale(ref_scale, Orientation::True),
            match_scale: self.derive_comparison_scale(ref_scale, Orientation::Matching),
            ref_pixel_start: ref_scale.apply(self.ref_start as f64),
            ref_pixel_end: ref_scale.apply(self.ref_end as f64),
        });
    }

    fn scaled(&self) -> &DerivedScales {
        self.scaled
            .as_ref()
            .unwrap_or_else(|| panic!("synteny block {} used before set_reference_scale", self.id))
    }

    pub fn comp_true_scale(&self) -> &LinearScale {
        &self.scaled().true_scale
    }

    pub fn comp_match_scale(&self) -> &LinearScale {
        &self.scaled().match_scale
    }

    pub fn comp_scale(&self, orientation: Orientation) -> &LinearScale {
        match orientation {
            Orientation::True => self.comp_true_scale(),
            Orientation::Matching => self.comp_match_scale(),
        }
    }

    /// Width of the block on the reference track, in pixels.
    pub fn pixel_width(&self) -> f64 {
        let s = self.scaled();
        (s.ref_pixel_end - s.ref_pixel_start).abs()
    }

    /// Whether a comparison-genome gene lies entirely within this block's
    /// true comparison interval. A gene spanning a block boundary belongs
    /// to no block; it is excluded, not clipped.
    pub fn contains_gene(&self, gene: &Gene) -> bool {
        gene.chr == self.comp_chr && gene.start >= self.true_start && gene.end <= self.true_end
    }

    /// Whether a reference-genome interval feature touches this block's
    /// reference interval; partial overlap counts.
    pub fn overlaps_feature(&self, feature: &QtlRecord) -> bool {
        feature.chr == self.ref_chr
            && feature.start <= self.ref_end
            && feature.end >= self.ref_start
    }
}
