mod league;
mod schedule;
mod standings;
mod trainer;

pub use league::*;
pub use schedule::*;
pub use standings::*;
pub use trainer::*;
