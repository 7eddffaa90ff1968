mod import_transformer;
mod zone_normalizer;

pub use import_transformer::ImportTransformer;
pub use zone_normalizer::ZoneNormalizer;
