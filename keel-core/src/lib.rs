mod buffer;
mod capabilities;
mod column;
mod dictionary;
mod operand;
mod select;
mod serialize;
mod template;
mod util;
mod value;

pub use ::anyhow::Context;
pub use buffer::*;
pub use capabilities::*;
pub use column::*;
pub use dictionary::*;
pub use operand::*;
pub use select::*;
pub use serialize::*;
pub use template::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
