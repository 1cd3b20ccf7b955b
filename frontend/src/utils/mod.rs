//! Small pure helpers shared by the components.

mod file_size;

pub use file_size::*;
