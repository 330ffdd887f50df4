//! Ordered chromosome tables.
//!
//! A [`Genome`] is the single source of chromosome order and length for
//! both genome maps: chromosomes are laid out in insertion order, and every
//! chromosome carries its cumulative base-pair offset from the start of the
//! genome.

use crate::types::GenomicPos;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromosomeInfo {
    pub id: u32,
    pub name: String,
    pub length: GenomicPos,
    /// Sum of the lengths of all preceding chromosomes.
    pub offset: GenomicPos,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub chromosomes: Vec<ChromosomeInfo>,
    pub total_length: GenomicPos,
    chromosome_map: HashMap<String, u32>,
}

impl Genome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a genome from an ordered `(name, length)` sequence.
    ///
    /// Panics on a zero-length chromosome.
    pub fn from_sizes<I, S>(sizes: I) -> Self
    where
        I: IntoIterator<Item = (S, GenomicPos)>,
        S: Into<String>,
    {
        let mut genome = Self::new();
        for (name, length) in sizes {
            genome.add_chromosome(name.into(), length);
        }
        genome
    }

    pub fn add_chromosome(&mut self, name: String, length: GenomicPos) -> u32 {
        assert!(
            length > 0,
            "invalid genome: chromosome '{}' has zero length",
            name
        );
        let id = self.chromosomes.len() as u32;
        let offset = self.total_length;

        self.chromosomes.push(ChromosomeInfo {
            id,
            name: name.clone(),
            length,
            offset,
        });

        self.chromosome_map.insert(name, id);
        self.total_length += length;
        id
    }

    pub fn get(&self, id: u32) -> Option<&ChromosomeInfo> {
        self.chromosomes.get(id as usize)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ChromosomeInfo> {
        self.chromosome_map.get(name).and_then(|&id| self.get(id))
    }

    pub fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
}
