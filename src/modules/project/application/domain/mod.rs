pub mod entities;
pub mod media_normalizer;
