mod runtime;
mod tabs;

pub use runtime::*;
pub use tabs::*;
