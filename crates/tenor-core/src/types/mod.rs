//! Core domain types.

mod compounding;
mod date;
mod frequency;
mod period;

pub use compounding::Compounding;
pub use date::Date;
pub use frequency::Frequency;
pub use period::{Period, TimeUnit};
