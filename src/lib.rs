pub mod config;
pub mod dataset;
pub mod defects;
pub mod sampling;
