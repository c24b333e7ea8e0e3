//! Conversion application layer

mod converter;

pub use converter::TreeConverter;
