use pipes_catalog::VariantId;
use pipes_shared::{format_fixed, format_pounds, round_half_up, OrderRequest};
use serde::{Deserialize, Serialize};

/// An order that passed classification, frozen with its price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedOrder {
    pub request: OrderRequest,
    pub variant: VariantId,
    /// Full precision; rounded only for display
    pub cost: f64,
}

impl AcceptedOrder {
    pub fn new(request: OrderRequest, variant: VariantId, cost: f64) -> Self {
        Self {
            request,
            variant,
            cost,
        }
    }

    /// `Length: .. | Diameter: .. | Plastic Grade: .. | Colours: .. | <extras> | Cost: ..`
    pub fn details(&self) -> String {
        let request = &self.request;
        let extras: Vec<&str> = request.features().iter().map(|f| f.label()).collect();
        let extras = if extras.is_empty() {
            "No other features".to_string()
        } else {
            extras.join(" | ")
        };

        format!(
            "Length: {} metres | Diameter: {} inches | Plastic Grade: {} | Colours: {} | {} | Cost: {}",
            format_fixed(request.length, 3),
            format_fixed(request.diameter, 3),
            request.grade,
            request.colours,
            extras,
            format_pounds(self.cost),
        )
    }

    pub fn details_with_type(&self) -> String {
        format!("Type: {} | {}", self.variant, self.details())
    }
}

/// Serializable snapshot of a basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketSummary {
    pub items: Vec<SummaryLine>,
    pub item_count: usize,
    pub total_cost: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub position: usize,
    pub variant: VariantId,
    pub request: OrderRequest,
    pub cost: f64,
    pub rounded_cost: f64,
}

impl SummaryLine {
    pub fn new(position: usize, order: &AcceptedOrder) -> Self {
        Self {
            position,
            variant: order.variant,
            request: order.request,
            cost: order.cost,
            rounded_cost: round_half_up(order.cost, 2),
        }
    }
}
