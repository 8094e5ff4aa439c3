mod registry;

pub use keel_core::*;
pub use keel_db2::*;
pub use registry::*;
