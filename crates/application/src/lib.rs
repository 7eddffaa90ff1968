//! Ferrous Zone Application Layer
pub mod services;
pub mod use_cases;

pub use services::{ImportTransformer, ZoneNormalizer};
pub use use_cases::NormalizeZonesUseCase;
