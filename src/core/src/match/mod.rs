mod r#match;
mod queries;
mod recorder;

pub use queries::*;
pub use r#match::*;
pub use recorder::*;
