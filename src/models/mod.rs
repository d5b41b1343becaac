mod convex_body;
mod simplex;

pub use convex_body::*;
pub use simplex::*;

#[cfg(test)]
mod simplex_tests;
