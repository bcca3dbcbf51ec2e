pub mod distributions;
pub mod source;

pub use distributions::BoundedUniform;
pub use source::{Source, new_seed};
