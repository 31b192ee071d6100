pub mod prompt;
pub mod rounding;
pub mod seed;
