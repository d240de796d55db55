use crate::app_config::{OutputConfig, OutputFormat};
use pipes_catalog::{PricingConfig, PricingEngine};
use pipes_order::{Basket, BasketError};
use pipes_shared::{format_pounds, OrderRequest};

/// An input order the basket refused, with its 1-based input position
#[derive(Debug)]
pub struct Rejection {
    pub input_position: usize,
    pub request: OrderRequest,
    pub error: BasketError,
}

impl Rejection {
    /// Multi-line explanation suitable for stderr
    pub fn describe(&self) -> String {
        let mut text = format!("order #{}: {}", self.input_position, self.error);
        if let BasketError::NoMatchingVariant { mismatches, .. } = &self.error {
            for mismatch in mismatches {
                let violated: Vec<String> =
                    mismatch.violated.iter().map(|c| c.to_string()).collect();
                text.push_str(&format!(
                    "\n  type {}: wrong {}",
                    mismatch.variant,
                    violated.join(", ")
                ));
            }
        }
        text
    }
}

#[derive(Debug)]
pub struct Quote {
    pub basket: Basket,
    pub rejections: Vec<Rejection>,
}

/// Run a batch of orders through a fresh basket
pub fn quote(requests: Vec<OrderRequest>, pricing: PricingConfig) -> Quote {
    let mut basket = Basket::with_engine(PricingEngine::new(pricing));
    let mut rejections = Vec::new();

    for (index, request) in requests.into_iter().enumerate() {
        if let Err(error) = basket.add(request) {
            rejections.push(Rejection {
                input_position: index + 1,
                request,
                error,
            });
        }
    }

    tracing::info!(
        accepted = basket.len(),
        rejected = rejections.len(),
        "batch quoted"
    );

    Quote { basket, rejections }
}

pub fn render(basket: &Basket, output: &OutputConfig) -> anyhow::Result<String> {
    match output.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&basket.summary())?),
        OutputFormat::Text => {
            let mut text = basket.report(output.include_variant_tag);
            text.push_str(&format!("Total: {}", format_pounds(basket.total_cost())));
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<OrderRequest> {
        vec![
            OrderRequest::new(1.0, 1.0, 1, 0),
            OrderRequest::new(1.0, 1.0, 1, 1),
            OrderRequest::new(1.0, 1.0, 1, 0),
        ]
    }

    #[test]
    fn test_quote_collects_rejections() {
        let quote = quote(sample(), PricingConfig::default());

        assert_eq!(quote.basket.len(), 2);
        assert_eq!(quote.rejections.len(), 1);
        assert_eq!(quote.rejections[0].input_position, 2);

        let text = quote.rejections[0].describe();
        assert!(text.starts_with("order #2: No pipe type accepts grade 1"));
        assert!(text.contains("type 1: wrong colour count"));
        assert!(text.contains("type 2: wrong plastic grade"));
    }

    #[test]
    fn test_render_text() {
        let quote = quote(sample(), PricingConfig::default());
        let text = render(&quote.basket, &OutputConfig::default()).unwrap();

        assert!(text.starts_with("1 | Type: 1 | Length: 1.000 metres"));
        assert!(text.ends_with("\r\nTotal: £3.53"));
    }

    #[test]
    fn test_render_json() {
        let quote = quote(sample(), PricingConfig::default());
        let output = OutputConfig {
            format: OutputFormat::Json,
            include_variant_tag: false,
        };

        let json: serde_json::Value =
            serde_json::from_str(&render(&quote.basket, &output).unwrap()).unwrap();
        assert_eq!(json["item_count"], 2);
        assert_eq!(json["total_cost"], 3.53);
        assert_eq!(json["items"][0]["variant"], 1);
    }
}
