pub mod forecast;
pub mod geocode;
pub mod normalize;
pub mod suggestions;
