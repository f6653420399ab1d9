mod field;
mod ring;

pub use field::RingFieldConfig;
pub use ring::Ring;
