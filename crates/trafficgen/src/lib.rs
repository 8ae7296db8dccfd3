pub mod clock;
pub mod config;
pub mod cycle;
pub mod driver;
pub mod pricing;
