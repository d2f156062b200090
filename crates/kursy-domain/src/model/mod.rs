//! Domain model types

pub mod course;
pub mod driver;
pub mod slot;
pub mod vehicle;

pub use course::Course;
pub use driver::Driver;
pub use slot::Slot;
pub use vehicle::Vehicle;
