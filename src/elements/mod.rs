//! Section elements module

mod fiber;
mod section;

pub use fiber::Fiber;
pub use section::Section;
