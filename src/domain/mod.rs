pub mod errors;
pub mod item;
pub mod ports;
