//! In-memory entity store for one planning session

mod entities;

pub use entities::EntityStore;
