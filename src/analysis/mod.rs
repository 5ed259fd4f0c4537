mod analyst;
pub mod prompt;

pub use analyst::Analyst;
