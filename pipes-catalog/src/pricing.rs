use pipes_shared::OrderRequest;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Length conversion applied before computing volume
pub const INCHES_PER_METRE: f64 = 39.37;

/// Inner radius as a fraction of the outer radius; the wall is always 10%.
pub const INNER_RADIUS_RATIO: f64 = 0.9;

/// Price list behind the pipe cost formula. Geometry is not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price per cubic inch of plastic, indexed by grade - 1
    pub grade_prices: Vec<f64>,

    pub one_colour_surcharge: f64,
    pub two_colour_surcharge: f64,
    pub insulation_surcharge: f64,
    pub reinforcement_surcharge: f64,
    pub chemical_resistance_surcharge: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            grade_prices: vec![0.30, 0.32, 0.35, 0.40, 0.46],
            one_colour_surcharge: 0.12,
            two_colour_surcharge: 0.17,
            insulation_surcharge: 0.14,
            reinforcement_surcharge: 0.15,
            chemical_resistance_surcharge: 0.12,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("No base price for plastic grade {0}")]
    UnknownGrade(u8),
}

/// Geometric cost calculation for a single pipe
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Base price for a 1-indexed grade
    pub fn base_price(&self, grade: u8) -> Result<f64, PricingError> {
        (grade as usize)
            .checked_sub(1)
            .and_then(|index| self.config.grade_prices.get(index))
            .copied()
            .ok_or(PricingError::UnknownGrade(grade))
    }

    /// Cubic inches of plastic in the pipe wall
    pub fn plastic_volume(&self, request: &OrderRequest) -> f64 {
        let length_inches = request.length * INCHES_PER_METRE;
        let outer_radius = request.diameter / 2.0;
        let inner_radius = outer_radius * INNER_RADIUS_RATIO;

        PI * (outer_radius * outer_radius - inner_radius * inner_radius) * length_inches
    }

    /// 1.0 plus every applicable add-on, stacked additively
    pub fn surcharge_multiplier(&self, request: &OrderRequest) -> f64 {
        let mut multiplier = 1.0;

        match request.colours {
            1 => multiplier += self.config.one_colour_surcharge,
            2 => multiplier += self.config.two_colour_surcharge,
            _ => {}
        }
        if request.inner_insulation {
            multiplier += self.config.insulation_surcharge;
        }
        if request.outer_reinforcement {
            multiplier += self.config.reinforcement_surcharge;
        }
        if request.chemical_resistance {
            multiplier += self.config.chemical_resistance_surcharge;
        }

        multiplier
    }

    /// Unrounded cost. Rounding happens only when the figure is printed.
    pub fn compute_cost(&self, request: &OrderRequest) -> Result<f64, PricingError> {
        let base_price = self.base_price(request.grade)?;
        Ok(base_price * self.surcharge_multiplier(request) * self.plastic_volume(request))
    }
}
