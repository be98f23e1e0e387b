pub mod range;
pub mod series;
