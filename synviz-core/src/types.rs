use serde::{Deserialize, Serialize};

pub type GenomicPos = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl From<char> for Strand {
    fn from(c: char) -> Self {
        match c {
            '-' => Strand::Reverse,
            _ => Strand::Forward,
        }
    }
}

impl From<Strand> for char {
    fn from(strand: Strand) -> Self {
        match strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

/// A synteny block record as delivered by the data-retrieval collaborator.
/// `comp_start`/`comp_end` are raw source coordinates; they may arrive in
/// either order depending on the aligner's strand call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub id: String,
    pub ref_chr: String,
    pub ref_start: GenomicPos,
    pub ref_end: GenomicPos,
    pub comp_chr: String,
    pub comp_start: GenomicPos,
    pub comp_end: GenomicPos,
    pub orientation_matches: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub id: String,
    pub symbol: String,
    pub chr: String,
    pub start: GenomicPos,
    pub end: GenomicPos,
    #[serde(rename = "type")]
    pub gene_type: String,
    pub strand: Option<Strand>,
    #[serde(default)]
    pub homolog_ids: Vec<String>,
}

impl Gene {
    pub fn length(&self) -> GenomicPos {
        self.end.saturating_sub(self.start)
    }

    pub fn overlaps(&self, start: GenomicPos, end: GenomicPos) -> bool {
        self.start <= end && start <= self.end
    }
}

/// A QTL or other interval feature shown on a track. Point features are
/// encoded as `start == end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QtlRecord {
    pub id: String,
    pub symbol: String,
    pub chr: String,
    pub start: GenomicPos,
    pub end: GenomicPos,
}

impl QtlRecord {
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_char_roundtrip() {
        assert_eq!(char::from(Strand::Forward), '+');
        assert_eq!(char::from(Strand::Reverse), '-');
        assert_eq!(Strand::from('-'), Strand::Reverse);
        assert_eq!(Strand::from('+'), Strand::Forward);
    }

    #[test]
    fn test_gene_overlap_is_closed() {
        let gene = Gene {
            id: "g1".to_string(),
            symbol: "G1".to_string(),
            chr: "1".to_string(),
            start: 100,
            end: 200,
            gene_type: "gene".to_string(),
            strand: Some(Strand::Forward),
            homolog_ids: vec![],
        };
        assert!(gene.overlaps(200, 300));
        assert!(gene.overlaps(50, 100));
        assert!(!gene.overlaps(201, 300));
    }

    #[test]
    fn test_point_qtl() {
        let qtl = QtlRecord {
            id: "q1".to_string(),
            symbol: "Q1".to_string(),
            chr: "1".to_string(),
            start: 500,
            end: 500,
        };
        assert!(qtl.is_point());
    }
}
