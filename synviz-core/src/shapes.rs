//! Drawing primitives
//!
//! Plain-data shapes handed to the rendering layer: a ribbon connecting a
//! block's reference and comparison spans across two linear tracks, and a
//! chord connecting them across a circle. No drawing happens here.

use crate::block::{Orientation, SyntenyBlock};
use crate::circular::CircularGenomeMap;
use crate::linear::LinearGenomeMap;
use serde::Serialize;

/// Quad between two horizontal tracks. `comp_x0` pairs with `ref_x0`;
/// for a mirrored block in `Matching` orientation, `comp_x0 > comp_x1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RibbonQuad {
    pub ref_x0: f64,
    pub ref_x1: f64,
    pub ref_y: f64,
    pub comp_x0: f64,
    pub comp_x1: f64,
    pub comp_y: f64,
}

/// Chord endpoints on a circle: the block's span on the reference arc and
/// on the comparison arc, as Cartesian points relative to the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChordShape {
    pub ref_start: (f64, f64),
    pub ref_end: (f64, f64),
    pub comp_start: (f64, f64),
    pub comp_end: (f64, f64),
}

/// Ribbon for one block between a reference track at `ref_y` and a
/// comparison track at `comp_y`. `None` when either chromosome is missing
/// from its map.
pub fn ribbon_between(
    block: &SyntenyBlock,
    ref_map: &LinearGenomeMap,
    comp_map: &LinearGenomeMap,
    ref_y: f64,
    comp_y: f64,
    orientation: Orientation,
) -> Option<RibbonQuad> {
    let ref_x0 = ref_map.position_of(&block.ref_chr, block.ref_start)?;
    let ref_x1 = ref_map.position_of(&block.ref_chr, block.ref_end)?;
    let (c0, c1) = block.coords(orientation);
    let comp_x0 = comp_map.position_of(&block.comp_chr, c0)?;
    let comp_x1 = comp_map.position_of(&block.comp_chr, c1)?;
    Some(RibbonQuad {
        ref_x0,
        ref_x1,
        ref_y,
        comp_x0,
        comp_x1,
        comp_y,
    })
}

/// Chord for one block on a circular map holding both genomes' arcs (the
/// whole-genome circle view draws both species on one circle).
pub fn chord_between(
    block: &SyntenyBlock,
    map: &CircularGenomeMap,
    radius: f64,
    orientation: Orientation,
) -> Option<ChordShape> {
    let ref_start = map.to_cartesian(&block.ref_chr, block.ref_start, radius)?;
    let ref_end = map.to_cartesian(&block.ref_chr, block.ref_end, radius)?;
    let (c0, c1) = block.coords(orientation);
    let comp_start = map.to_cartesian(&block.comp_chr, c0, radius)?;
    let comp_end = map.to_cartesian(&block.comp_chr, c1, radius)?;
    Some(ChordShape {
        ref_start,
        ref_end,
        comp_start,
        comp_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Genome;

    fn block() -> SyntenyBlock {
        SyntenyBlock::new(
            "b1".to_string(),
            "1".to_string(),
            0,
            50,
            "2".to_string(),
            10,
            60,
            false,
        )
    }

    #[test]
    fn test_ribbon_positions_come_from_both_maps() {
        let ref_genome = Genome::from_sizes([("1", 100)]);
        let comp_genome = Genome::from_sizes([("2", 100)]);
        let ref_map = LinearGenomeMap::build(&ref_genome, 100.0, 0.0);
        let comp_map = LinearGenomeMap::build(&comp_genome, 100.0, 0.0);

        let quad = ribbon_between(&block(), &ref_map, &comp_map, 0.0, 80.0, Orientation::True)
            .unwrap();
        assert_eq!(quad.ref_x0, 0.0);
        assert_eq!(quad.ref_x1, 50.0);
        assert_eq!(quad.comp_x0, 10.0);
        assert_eq!(quad.comp_x1, 60.0);
        assert_eq!(quad.comp_y, 80.0);
    }

    #[test]
    fn test_matching_orientation_crosses_the_ribbon() {
        let ref_genome = Genome::from_sizes([("1", 100)]);
        let comp_genome = Genome::from_sizes([("2", 100)]);
        let ref_map = LinearGenomeMap::build(&ref_genome, 100.0, 0.0);
        let comp_map = LinearGenomeMap::build(&comp_genome, 100.0, 0.0);

        let quad = ribbon_between(
            &block(),
            &ref_map,
            &comp_map,
            0.0,
            80.0,
            Orientation::Matching,
        )
        .unwrap();
        assert!(quad.comp_x0 > quad.comp_x1);
    }

    #[test]
    fn test_chord_unknown_chromosome_is_none() {
        let genome = Genome::from_sizes([("1", 100)]);
        let map = CircularGenomeMap::build(&genome, 0.0);
        assert!(chord_between(&block(), &map, 50.0, Orientation::True).is_none());
    }

    #[test]
    fn test_chord_endpoints_on_radius() {
        let genome = Genome::from_sizes([("1", 100), ("2", 100)]);
        let map = CircularGenomeMap::build(&genome, 0.0);
        let chord = chord_between(&block(), &map, 50.0, Orientation::True).unwrap();
        for (x, y) in [chord.ref_start, chord.ref_end, chord.comp_start, chord.comp_end] {
            assert!(((x * x + y * y).sqrt() - 50.0).abs() < 1e-9);
        }
    }
}
