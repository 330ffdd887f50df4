//! Gene filtering
//!
//! Evaluates a set of user-defined filters against the reference and
//! comparison gene sets and partitions genes into hidden, highlighted and
//! untouched. A gene matches one filter when it satisfies every condition
//! of that filter; it is affected by the filter set when it matches any
//! filter. Hide filters run first, Highlight filters second, and a gene
//! caught by both ends up highlighted.

use crate::types::Gene;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("filter '{0}' has a condition with no value")]
    IncompleteCondition(String),
}

pub type FilterResult<T> = Result<T, FilterError>;

/// Term -> gene-ID association lookup, supplied by the ontology
/// collaborator. Associations are resolved ahead of evaluation; the
/// engine itself performs no I/O.
pub trait OntologyAssociations {
    fn genes_for_term(&self, ontology: &str, term_id: &str) -> Option<&HashSet<String>>;
}

/// In-memory association table; the usual implementation once the
/// collaborator's response has been parsed.
#[derive(Debug, Clone, Default)]
pub struct OntologyIndex {
    associations: HashMap<(String, String), HashSet<String>>,
}

impl OntologyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ontology: &str, term_id: &str, gene_id: &str) {
        self.associations
            .entry((ontology.to_string(), term_id.to_string()))
            .or_default()
            .insert(gene_id.to_string());
    }
}

impl OntologyAssociations for OntologyIndex {
    fn genes_for_term(&self, ontology: &str, term_id: &str) -> Option<&HashSet<String>> {
        self.associations
            .get(&(ontology.to_string(), term_id.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneField {
    Id,
    Symbol,
    Chromosome,
    Type,
    Strand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    Equals { field: GeneField, value: String },
    NotEquals { field: GeneField, value: String },
    Contains { field: GeneField, value: String },
    NotContains { field: GeneField, value: String },
    OntologyTerm { ontology: String, term_id: String },
    NotOntologyTerm { ontology: String, term_id: String },
}

impl Condition {
    /// Attribute conditions are evaluated before ontology conditions
    /// within a filter; the association lookup is the expensive half.
    pub fn is_attribute(&self) -> bool {
        !matches!(
            self,
            Condition::OntologyTerm { .. } | Condition::NotOntologyTerm { .. }
        )
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Condition::Equals { value, .. }
            | Condition::NotEquals { value, .. }
            | Condition::Contains { value, .. }
            | Condition::NotContains { value, .. } => !value.is_empty(),
            Condition::OntologyTerm { ontology, term_id }
            | Condition::NotOntologyTerm { ontology, term_id } => {
                !ontology.is_empty() && !term_id.is_empty()
            }
        }
    }

    pub fn matches(&self, gene: &Gene, associations: &dyn OntologyAssociations) -> bool {
        match self {
            Condition::Equals { field, value } => field_text(gene, *field) == value.as_str(),
            Condition::NotEquals { field, value } => field_text(gene, *field) != value.as_str(),
            Condition::Contains { field, value } => field_text(gene, *field).contains(value.as_str()),
            Condition::NotContains { field, value } => {
                !field_text(gene, *field).contains(value.as_str())
            }
            Condition::OntologyTerm { ontology, term_id } => associations
                .genes_for_term(ontology, term_id)
                .is_some_and(|genes| genes.contains(&gene.id)),
            Condition::NotOntologyTerm { ontology, term_id } => !associations
                .genes_for_term(ontology, term_id)
                .is_some_and(|genes| genes.contains(&gene.id)),
        }
    }
}

fn field_text(gene: &Gene, field: GeneField) -> &str {
    match field {
        GeneField::Id => &gene.id,
        GeneField::Symbol => &gene.symbol,
        GeneField::Chromosome => &gene.chr,
        GeneField::Type => &gene.gene_type,
        GeneField::Strand => match gene.strand {
            Some(crate::types::Strand::Forward) => "+",
            Some(crate::types::Strand::Reverse) => "-",
            None => "",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    Hide,
    Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesScope {
    Reference,
    Comparison,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    pub mode: FilterMode,
    pub scope: SpeciesScope,
    pub conditions: Vec<Condition>,
}

impl Filter {
    pub fn validate(&self) -> FilterResult<()> {
        if self.conditions.iter().any(|c| !c.is_complete()) {
            return Err(FilterError::IncompleteCondition(self.name.clone()));
        }
        Ok(())
    }

    /// All conditions must hold; attribute conditions are checked first so
    /// an attribute miss short-circuits the association lookups.
    fn matches(&self, gene: &Gene, associations: &dyn OntologyAssociations) -> bool {
        self.conditions
            .iter()
            .filter(|c| c.is_attribute())
            .all(|c| c.matches(gene, associations))
            && self
                .conditions
                .iter()
                .filter(|c| !c.is_attribute())
                .all(|c| c.matches(gene, associations))
    }
}

/// Per-filter evaluation summary, for "this filter affects N features"
/// messaging. Counts are taken as each filter is applied, after the
/// highlight-over-hide resolution for the genes it touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterReport {
    pub name: String,
    pub mode: FilterMode,
    pub matched: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOutcome {
    pub hidden: BTreeSet<String>,
    pub highlighted: BTreeSet<String>,
    pub untouched: BTreeSet<String>,
    pub reports: Vec<FilterReport>,
    /// Names of filters skipped for having incomplete conditions.
    pub skipped: Vec<String>,
}

/// Evaluate `filters` over both species' gene sets.
///
/// Every call starts from a clean slate. Hide filters apply before
/// Highlight filters, and a gene marked by both is resolved to
/// highlighted the moment the highlight lands, not in a later pass.
/// Incomplete filters are skipped and reported rather than failing the
/// whole evaluation.
pub fn evaluate(
    ref_genes: &[Gene],
    comp_genes: &[Gene],
    filters: &[Filter],
    associations: &dyn OntologyAssociations,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    let mut ordered: Vec<&Filter> = Vec::with_capacity(filters.len());
    ordered.extend(filters.iter().filter(|f| f.mode == FilterMode::Hide));
    ordered.extend(filters.iter().filter(|f| f.mode == FilterMode::Highlight));

    for filter in ordered {
        if let Err(FilterError::IncompleteCondition(name)) = filter.validate() {
            log::debug!("skipping incomplete filter '{}'", name);
            outcome.skipped.push(name);
            continue;
        }

        let candidates: Vec<&Gene> = match filter.scope {
            SpeciesScope::Reference => ref_genes.iter().collect(),
            SpeciesScope::Comparison => comp_genes.iter().collect(),
            SpeciesScope::Both => ref_genes.iter().chain(comp_genes.iter()).collect(),
        };

        let mut matched = 0;
        for gene in candidates {
            if !filter.matches(gene, associations) {
                continue;
            }
            matched += 1;
            match filter.mode {
                FilterMode::Hide => {
                    // Highlight strictly dominates: a gene already
                    // highlighted cannot be re-hidden by a later filter.
                    if !outcome.highlighted.contains(&gene.id) {
                        outcome.hidden.insert(gene.id.clone());
                    }
                }
                FilterMode::Highlight => {
                    outcome.hidden.remove(&gene.id);
                    outcome.highlighted.insert(gene.id.clone());
                }
            }
        }

        outcome.reports.push(FilterReport {
            name: filter.name.clone(),
            mode: filter.mode,
            matched,
        });
    }

    for gene in ref_genes.iter().chain(comp_genes.iter()) {
        if !outcome.hidden.contains(&gene.id) && !outcome.highlighted.contains(&gene.id) {
            outcome.untouched.insert(gene.id.clone());
        }
    }

    outcome
}
