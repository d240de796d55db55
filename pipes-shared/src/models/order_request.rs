use serde::{Deserialize, Serialize};

/// Raw order parameters as handed over by the form layer.
///
/// Values are already parsed; nothing here is range-checked. Classification
/// decides whether the combination is orderable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Length in metres
    pub length: f64,
    /// Outer diameter in inches
    pub diameter: f64,
    /// Plastic grade, 1 to 5
    pub grade: u8,
    /// Number of colours, 0 to 2
    pub colours: u8,
    #[serde(default)]
    pub inner_insulation: bool,
    #[serde(default)]
    pub outer_reinforcement: bool,
    #[serde(default)]
    pub chemical_resistance: bool,
}

/// Optional extras that show up in the details line and carry a surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    InnerInsulation,
    OuterReinforcement,
    ChemicalResistance,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::InnerInsulation,
        Feature::OuterReinforcement,
        Feature::ChemicalResistance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::InnerInsulation => "Insulation",
            Feature::OuterReinforcement => "Reinforcement",
            Feature::ChemicalResistance => "Chemical Resistance",
        }
    }
}

impl OrderRequest {
    pub fn new(length: f64, diameter: f64, grade: u8, colours: u8) -> Self {
        Self {
            length,
            diameter,
            grade,
            colours,
            inner_insulation: false,
            outer_reinforcement: false,
            chemical_resistance: false,
        }
    }

    pub fn with_inner_insulation(mut self, on: bool) -> Self {
        self.inner_insulation = on;
        self
    }

    pub fn with_outer_reinforcement(mut self, on: bool) -> Self {
        self.outer_reinforcement = on;
        self
    }

    pub fn with_chemical_resistance(mut self, on: bool) -> Self {
        self.chemical_resistance = on;
        self
    }

    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::InnerInsulation => self.inner_insulation,
            Feature::OuterReinforcement => self.outer_reinforcement,
            Feature::ChemicalResistance => self.chemical_resistance,
        }
    }

    /// Requested extras in display order
    pub fn features(&self) -> Vec<Feature> {
        Feature::ALL.into_iter().filter(|f| self.has(*f)).collect()
    }
}
