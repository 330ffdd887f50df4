//! SynViz Core Library
//!
//! Genome coordinate maps, synteny block transforms, viewport derivation,
//! QTL lane packing, and gene filtering for SynViz. Everything here is a
//! synchronous transformation from already-parsed records to plain-data
//! geometry; retrieval and rendering live in the surrounding application.

pub mod types;
pub mod genome;
pub mod scale;
pub mod linear;
pub mod circular;
pub mod block;
pub mod viewport;
pub mod lanes;
pub mod filter;
pub mod shapes;

// Re-export commonly used types and functions
pub use types::{BlockRecord, Gene, GenomicPos, QtlRecord, Strand};
pub use genome::Genome;
pub use scale::LinearScale;
pub use linear::LinearGenomeMap;
pub use circular::{CircularGenomeMap, CHR_SPACING_RAD};
pub use block::{Orientation, SyntenyBlock};
pub use viewport::{BrowserInterval, ViewportError, ViewportResult};
pub use lanes::{pack_lanes, LaneAssignment};
pub use filter::{
    evaluate, Condition, Filter, FilterError, FilterMode, FilterOutcome, GeneField,
    OntologyAssociations, OntologyIndex, SpeciesScope,
};
pub use shapes::{chord_between, ribbon_between, ChordShape, RibbonQuad};

/// Version information for the SynViz core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
