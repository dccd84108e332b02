/// Business logic services layer
pub mod aggregator;
pub mod controller;
pub mod filter;

pub use controller::Controller;
