pub mod quote;
pub mod restaurant;
pub mod settings;
pub mod zone;
