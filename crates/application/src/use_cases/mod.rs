pub mod zones;

pub use zones::NormalizeZonesUseCase;
