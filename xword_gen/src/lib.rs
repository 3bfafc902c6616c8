pub mod adapter;
pub mod fill;
pub mod generate;
pub mod number;
pub mod pattern;
pub mod slot;
