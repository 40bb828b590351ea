pub mod eta;
pub mod pricing;
pub mod resolver;
