//! Browser interval
//!
//! The active reference viewport on one chromosome, plus the comparison
//! viewport derived from it. The comparison bounds are found by locating
//! the synteny blocks that bound the viewport edges: an edge inside a
//! block is mapped through that block's comparison scale; an edge in a gap
//! between blocks snaps to the nearest boundary block's comparison
//! coordinate with no interpolation across the gap.

use crate::block::{Orientation, SyntenyBlock};
use crate::scale::LinearScale;
use crate::types::GenomicPos;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("no synteny blocks loaded for comparison bound derivation")]
    NoMatchingBlock,
}

pub type ViewportResult<T> = Result<T, ViewportError>;

/// The current viewport. Created once per chromosome selection at the
/// full-chromosome extent, then mutated in place by every pan, zoom, or
/// jump; the block set and reference scale are passed into each move so
/// the derivation never reads stale shared state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserInterval {
    pub chr: String,
    pub chr_length: GenomicPos,
    pub ref_start: GenomicPos,
    pub ref_end: GenomicPos,
    pub width: GenomicPos,
    pub comp_start: GenomicPos,
    pub comp_end: GenomicPos,
    pub comp_start_chr: String,
    pub comp_end_chr: String,
    orientation: Orientation,
}

impl BrowserInterval {
    pub fn new(
        chr: String,
        chr_length: GenomicPos,
        blocks: &[SyntenyBlock],
        scale: &LinearScale,
        orientation: Orientation,
    ) -> ViewportResult<Self> {
        let mut interval = Self {
            chr,
            chr_length,
            ref_start: 0,
            ref_end: 0,
            width: 0,
            comp_start: 0,
            comp_end: 0,
            comp_start_chr: String::new(),
            comp_end_chr: String::new(),
            orientation,
        };
        interval.move_to(0.0, chr_length as f64, scale, blocks)?;
        Ok(interval)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Move the reference viewport and re-derive the comparison viewport.
    ///
    /// The reference bounds are rounded and clamped to the chromosome
    /// before anything else, and stay updated even when the comparison
    /// derivation fails for lack of blocks.
    pub fn move_to(
        &mut self,
        start: f64,
        end: f64,
        scale: &LinearScale,
        blocks: &[SyntenyBlock],
    ) -> ViewportResult<()> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let start = start.round().clamp(0.0, self.chr_length as f64) as GenomicPos;
        let end = end.round().clamp(0.0, self.chr_length as f64) as GenomicPos;
        self.ref_start = start;
        self.ref_end = end;
        self.width = end - start;

        if blocks.is_empty() {
            return Err(ViewportError::NoMatchingBlock);
        }

        let (comp_start, comp_start_chr) = self.derive_start_bound(start, scale, blocks);
        let (comp_end, comp_end_chr) = self.derive_end_bound(end, scale, blocks);
        self.comp_start = comp_start;
        self.comp_start_chr = comp_start_chr;
        self.comp_end = comp_end;
        self.comp_end_chr = comp_end_chr;
        Ok(())
    }

    /// Scale the viewport width by `factor` around its midpoint. Clamped
    /// to the chromosome; never collapses below 1 bp.
    pub fn zoom(
        &mut self,
        factor: f64,
        scale: &LinearScale,
        blocks: &[SyntenyBlock],
    ) -> ViewportResult<()> {
        assert!(factor > 0.0, "zoom factor must be positive");
        let mid = (self.ref_start + self.ref_end) as f64 / 2.0;
        let half = (self.width as f64 * factor / 2.0).max(0.5);
        let mut start = mid - half;
        let mut end = mid + half;
        if start < 0.0 {
            end -= start;
            start = 0.0;
        }
        let max = self.chr_length as f64;
        if end > max {
            start -= end - max;
            end = max;
        }
        self.move_to(start.max(0.0), end, scale, blocks)
    }

    /// Shift the viewport by a signed base-pair delta, keeping its width.
    pub fn pan(
        &mut self,
        delta_bp: f64,
        scale: &LinearScale,
        blocks: &[SyntenyBlock],
    ) -> ViewportResult<()> {
        let width = self.width as f64;
        let max_start = (self.chr_length as f64 - width).max(0.0);
        let start = (self.ref_start as f64 + delta_bp).clamp(0.0, max_start);
        self.move_to(start, start + width, scale, blocks)
    }

    /// Comparison bound for the viewport's left edge: the block containing
    /// the edge wins; otherwise the rightmost block ending before it;
    /// otherwise the first block on the chromosome.
    fn derive_start_bound(
        &self,
        start: GenomicPos,
        scale: &LinearScale,
        blocks: &[SyntenyBlock],
    ) -> (GenomicPos, String) {
        if let Some(block) = blocks
            .iter()
            .find(|b| b.ref_start <= start && start <= b.ref_end)
        {
            return (
                self.invert_through(block, start, scale),
                block.comp_chr.clone(),
            );
        }
        let boundary = blocks
            .iter()
            .filter(|b| b.ref_end < start)
            .max_by_key(|b| b.ref_end);
        match boundary {
            Some(block) => (block.coords(self.orientation).0, block.comp_chr.clone()),
            None => {
                let first = blocks.iter().min_by_key(|b| b.ref_start).expect("non-empty");
                log::debug!(
                    "viewport start {} precedes all blocks; snapping to block {}",
                    start,
                    first.id
                );
                (first.coords(self.orientation).0, first.comp_chr.clone())
            }
        }
    }

    /// Comparison bound for the viewport's right edge, symmetric to
    /// [`Self::derive_start_bound`].
    fn derive_end_bound(
        &self,
        end: GenomicPos,
        scale: &LinearScale,
        blocks: &[SyntenyBlock],
    ) -> (GenomicPos, String) {
        if let Some(block) = blocks
            .iter()
            .find(|b| b.ref_start <= end && end <= b.ref_end)
        {
            return (
                self.invert_through(block, end, scale),
                block.comp_chr.clone(),
            );
        }
        let boundary = blocks
            .iter()
            .filter(|b| b.ref_start > end)
            .min_by_key(|b| b.ref_start);
        match boundary {
            Some(block) => (block.coords(self.orientation).1, block.comp_chr.clone()),
            None => {
                let last = blocks.iter().max_by_key(|b| b.ref_end).expect("non-empty");
                log::debug!(
                    "viewport end {} follows all blocks; snapping to block {}",
                    end,
                    last.id
                );
                (last.coords(self.orientation).1, last.comp_chr.clone())
            }
        }
    }

    /// Reference bp -> reference pixel -> comparison bp, through one
    /// block's comparison scale.
    fn invert_through(
        &self,
        block: &SyntenyBlock,
        bp: GenomicPos,
        scale: &LinearScale,
    ) -> GenomicPos {
        let comp_scale = block.derive_comparison_scale(scale, self.orientation);
        let px = scale.apply(bp as f64);
        comp_scale.invert(px).round().max(0.0) as GenomicPos
    }
}
