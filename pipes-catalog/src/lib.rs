pub mod variant;
pub mod classifier;
pub mod pricing;

pub use variant::{Constraint, VariantDefinition, VariantId, CATALOG};
pub use classifier::{classify, Classification, Classifier, VariantMismatch};
pub use pricing::{PricingConfig, PricingEngine, PricingError};
