mod league;
mod pokemon;

pub use league::*;
pub use pokemon::*;
