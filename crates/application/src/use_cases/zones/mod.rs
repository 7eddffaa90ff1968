mod normalize;

pub use normalize::NormalizeZonesUseCase;
