//! Infrastructure layer - CSV loaders, repositories and sample data

pub mod csv_loader;
pub mod persistence;
pub mod sample_data;
