mod dictionary;
mod platform;

pub use dictionary::*;
pub use platform::*;
