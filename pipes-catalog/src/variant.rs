use pipes_shared::OrderRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog position of a variant; lower ids win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u8);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Constant constraints that make up one pipe type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDefinition {
    pub id: VariantId,
    pub allowed_grades: &'static [u8],
    pub colours: u8,
    pub inner_insulation: bool,
    pub outer_reinforcement: bool,
}

/// The five orderable pipe types, in priority order.
///
/// Chemical resistance is optional on all of them and so is absent here.
pub static CATALOG: [VariantDefinition; 5] = [
    VariantDefinition {
        id: VariantId(1),
        allowed_grades: &[1, 2, 3],
        colours: 0,
        inner_insulation: false,
        outer_reinforcement: false,
    },
    VariantDefinition {
        id: VariantId(2),
        allowed_grades: &[2, 3, 4],
        colours: 1,
        inner_insulation: false,
        outer_reinforcement: false,
    },
    VariantDefinition {
        id: VariantId(3),
        allowed_grades: &[2, 3, 4, 5],
        colours: 2,
        inner_insulation: false,
        outer_reinforcement: false,
    },
    VariantDefinition {
        id: VariantId(4),
        allowed_grades: &[2, 3, 4, 5],
        colours: 2,
        inner_insulation: true,
        outer_reinforcement: false,
    },
    VariantDefinition {
        id: VariantId(5),
        allowed_grades: &[3, 4, 5],
        colours: 2,
        inner_insulation: true,
        outer_reinforcement: true,
    },
];

/// A single requirement of a variant that an order can violate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Grade,
    Colours,
    InnerInsulation,
    OuterReinforcement,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Constraint::Grade => "plastic grade",
            Constraint::Colours => "colour count",
            Constraint::InnerInsulation => "inner insulation",
            Constraint::OuterReinforcement => "outer reinforcement",
        };
        f.write_str(name)
    }
}

impl VariantDefinition {
    pub fn allows_grade(&self, grade: u8) -> bool {
        self.allowed_grades.contains(&grade)
    }

    /// True when every gating constraint holds
    pub fn matches(&self, request: &OrderRequest) -> bool {
        self.allows_grade(request.grade)
            && request.colours == self.colours
            && request.inner_insulation == self.inner_insulation
            && request.outer_reinforcement == self.outer_reinforcement
    }

    /// Constraints the request breaks, in checking order
    pub fn violations(&self, request: &OrderRequest) -> Vec<Constraint> {
        let mut violated = Vec::new();

        if !self.allows_grade(request.grade) {
            violated.push(Constraint::Grade);
        }
        if request.colours != self.colours {
            violated.push(Constraint::Colours);
        }
        if request.inner_insulation != self.inner_insulation {
            violated.push(Constraint::InnerInsulation);
        }
        if request.outer_reinforcement != self.outer_reinforcement {
            violated.push(Constraint::OuterReinforcement);
        }

        violated
    }
}
