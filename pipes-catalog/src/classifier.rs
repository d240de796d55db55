use crate::variant::{Constraint, VariantDefinition, VariantId, CATALOG};
use pipes_shared::OrderRequest;

/// Outcome of matching an order against the catalog.
///
/// `NoMatch` is an ordinary result, the caller decides how to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Matched(VariantId),
    NoMatch,
}

impl Classification {
    pub fn variant(&self) -> Option<VariantId> {
        match self {
            Classification::Matched(id) => Some(*id),
            Classification::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }
}

/// Why an order does not fit one particular variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMismatch {
    pub variant: VariantId,
    pub violated: Vec<Constraint>,
}

/// Rule matcher over an ordered set of variant definitions
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    catalog: &'static [VariantDefinition],
}

impl Classifier {
    /// Definitions are tried in slice order
    pub fn new(catalog: &'static [VariantDefinition]) -> Self {
        Self { catalog }
    }

    /// First definition the request satisfies, or `NoMatch`
    pub fn classify(&self, request: &OrderRequest) -> Classification {
        let outcome = self
            .catalog
            .iter()
            .find(|variant| variant.matches(request))
            .map_or(Classification::NoMatch, |variant| {
                Classification::Matched(variant.id)
            });

        match outcome {
            Classification::Matched(id) => {
                tracing::debug!(variant = %id, grade = request.grade, colours = request.colours, "order classified");
            }
            Classification::NoMatch => {
                tracing::debug!(grade = request.grade, colours = request.colours, "no variant matches order");
            }
        }

        outcome
    }

    /// Per-variant list of broken constraints. Variants the request
    /// satisfies are left out.
    pub fn explain(&self, request: &OrderRequest) -> Vec<VariantMismatch> {
        self.catalog
            .iter()
            .filter_map(|variant| {
                let violated = variant.violations(request);
                (!violated.is_empty()).then(|| VariantMismatch {
                    variant: variant.id,
                    violated,
                })
            })
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}

/// Classify against the fixed catalog
pub fn classify(request: &OrderRequest) -> Classification {
    Classifier::default().classify(request)
}
