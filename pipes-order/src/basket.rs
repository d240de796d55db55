use crate::models::{AcceptedOrder, BasketSummary, SummaryLine};
use pipes_catalog::{Classification, Classifier, PricingEngine, PricingError, VariantMismatch};
use pipes_shared::{round_half_up, OrderRequest, CURRENCY_SYMBOL};

/// Line terminator used by the printed order sheet
const LINE_END: &str = "\r\n";

/// Running list of accepted orders for one session.
///
/// Append-only: items keep insertion order and are never removed.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    items: Vec<AcceptedOrder>,
    classifier: Classifier,
    engine: PricingEngine,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Basket that prices with a configured engine
    pub fn with_engine(engine: PricingEngine) -> Self {
        Self {
            items: Vec::new(),
            classifier: Classifier::default(),
            engine,
        }
    }

    /// Classify, price and append. On any error the basket is unchanged.
    pub fn add(&mut self, request: OrderRequest) -> Result<&AcceptedOrder, BasketError> {
        let variant = match self.classifier.classify(&request) {
            Classification::Matched(id) => id,
            Classification::NoMatch => {
                tracing::warn!(
                    grade = request.grade,
                    colours = request.colours,
                    "order rejected: no matching pipe type"
                );
                return Err(BasketError::NoMatchingVariant {
                    grade: request.grade,
                    colours: request.colours,
                    mismatches: self.classifier.explain(&request),
                });
            }
        };

        let cost = self.engine.compute_cost(&request)?;
        let position = self.items.len();
        self.items.push(AcceptedOrder::new(request, variant, cost));

        tracing::info!(
            position = position + 1,
            variant = %variant,
            cost,
            "order added to basket"
        );

        Ok(&self.items[position])
    }

    /// `add` reduced to accepted / rejected
    pub fn try_add(&mut self, request: OrderRequest) -> bool {
        self.add(request).is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[AcceptedOrder] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AcceptedOrder> {
        self.items.iter()
    }

    /// One line per item, numbered from 1
    pub fn itemize(&self, include_variant_tag: bool) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, order)| {
                let details = if include_variant_tag {
                    order.details_with_type()
                } else {
                    order.details()
                };
                format!("{} | {}", index + 1, details)
            })
            .collect()
    }

    /// Itemized lines, each terminated with CRLF
    pub fn report(&self, include_variant_tag: bool) -> String {
        self.itemize(include_variant_tag)
            .into_iter()
            .map(|line| line + LINE_END)
            .collect()
    }

    /// Sum of unrounded costs, rounded once to pence
    pub fn total_cost(&self) -> f64 {
        let total: f64 = self.items.iter().map(|order| order.cost).sum();
        round_half_up(total, 2)
    }

    pub fn summary(&self) -> BasketSummary {
        BasketSummary {
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(index, order)| SummaryLine::new(index + 1, order))
                .collect(),
            item_count: self.items.len(),
            total_cost: self.total_cost(),
            currency: CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a AcceptedOrder;
    type IntoIter = std::slice::Iter<'a, AcceptedOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("No pipe type accepts grade {grade} with {colours} colour(s) and the requested features")]
    NoMatchingVariant {
        grade: u8,
        colours: u8,
        mismatches: Vec<VariantMismatch>,
    },

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipes_catalog::{PricingConfig, VariantId};

    #[test]
    fn test_add_tags_matched_variant() {
        let mut basket = Basket::new();
        let request = OrderRequest::new(3.0, 2.0, 3, 1);

        let order = basket.add(request).unwrap();
        assert_eq!(order.variant, VariantId(2));
        assert_eq!(order.request, request);
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_rejected_order_leaves_basket_unchanged() {
        let mut basket = Basket::new();
        assert!(basket.try_add(OrderRequest::new(1.0, 1.0, 2, 0)));

        assert!(!basket.try_add(OrderRequest::new(1.0, 1.0, 1, 1)));
        assert!(!basket.try_add(OrderRequest::new(1.0, 1.0, 9, 0)));
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.itemize(true).len(), 1);
    }

    #[test]
    fn test_rejection_carries_explanation() {
        let mut basket = Basket::new();
        let err = basket.add(OrderRequest::new(1.0, 1.0, 1, 1)).unwrap_err();

        match err {
            BasketError::NoMatchingVariant {
                grade,
                colours,
                mismatches,
            } => {
                assert_eq!((grade, colours), (1, 1));
                assert_eq!(mismatches.len(), 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pricing_failure_is_atomic() {
        let engine = PricingEngine::new(PricingConfig {
            grade_prices: vec![0.30],
            ..PricingConfig::default()
        });
        let mut basket = Basket::with_engine(engine);

        let err = basket.add(OrderRequest::new(1.0, 1.0, 2, 0)).unwrap_err();
        assert!(matches!(err, BasketError::Pricing(PricingError::UnknownGrade(2))));
        assert!(basket.is_empty());
    }

    #[test]
    fn test_total_rounds_once() {
        let mut basket = Basket::new();
        // Each item costs ~1.7625; per-item rounding would give 3.52
        basket.add(OrderRequest::new(1.0, 1.0, 1, 0)).unwrap();
        basket.add(OrderRequest::new(1.0, 1.0, 1, 0)).unwrap();

        let rounded_each: f64 = basket.iter().map(|o| round_half_up(o.cost, 2)).sum();
        assert!((rounded_each - 3.52).abs() < 1e-9);
        assert_eq!(basket.total_cost(), 3.53);
    }

    #[test]
    fn test_empty_basket() {
        let basket = Basket::new();
        assert_eq!(basket.total_cost(), 0.0);
        assert!(basket.itemize(false).is_empty());
        assert_eq!(basket.report(true), "");
    }

    #[test]
    fn test_report_lines_and_idempotence() {
        let mut basket = Basket::new();
        basket.add(OrderRequest::new(1.0, 1.0, 1, 0)).unwrap();
        basket
            .add(
                OrderRequest::new(2.0, 3.0, 5, 2)
                    .with_inner_insulation(true)
                    .with_outer_reinforcement(true),
            )
            .unwrap();

        let lines = basket.itemize(true);
        assert!(lines[0].starts_with("1 | Type: 1 | Length: 1.000 metres"));
        assert!(lines[1].starts_with("2 | Type: 5 | Length: 2.000 metres"));
        assert!(lines[1].contains("| Insulation | Reinforcement | Cost: £"));

        let plain = basket.itemize(false);
        assert!(plain[0].starts_with("1 | Length: 1.000 metres"));
        assert!(!plain[1].contains("Type:"));

        assert_eq!(basket.itemize(true), lines);
        assert_eq!(basket.total_cost(), basket.total_cost());
        assert_eq!(basket.report(false), format!("{}\r\n{}\r\n", plain[0], plain[1]));
    }

    #[test]
    fn test_itemize_full_lines_with_type() {
        let mut basket = Basket::new();
        basket.add(OrderRequest::new(1.0, 1.0, 1, 0)).unwrap();
        basket
            .add(
                OrderRequest::new(1.0, 1.0, 5, 2)
                    .with_inner_insulation(true)
                    .with_outer_reinforcement(true)
                    .with_chemical_resistance(true),
            )
            .unwrap();

        assert_eq!(
            basket.itemize(true),
            vec![
                "1 | Type: 1 | Length: 1.000 metres | Diameter: 1.000 inches | Plastic Grade: 1 | Colours: 0 | No other features | Cost: £1.76".to_string(),
                "2 | Type: 5 | Length: 1.000 metres | Diameter: 1.000 inches | Plastic Grade: 5 | Colours: 2 | Insulation | Reinforcement | Chemical Resistance | Cost: £4.27".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_matches_basket() {
        let mut basket = Basket::new();
        basket.add(OrderRequest::new(1.0, 1.0, 1, 0)).unwrap();
        basket.add(OrderRequest::new(1.0, 1.0, 1, 0)).unwrap();

        let summary = basket.summary();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_cost, 3.53);
        assert_eq!(summary.items[1].position, 2);
        assert_eq!(summary.items[1].rounded_cost, 1.76);
        assert_eq!(summary.currency, "£");
    }
}
