mod gjk;

pub use gjk::*;
