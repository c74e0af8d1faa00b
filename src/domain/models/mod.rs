mod completion;
mod language;
mod seminar;

pub use completion::*;
pub use language::*;
pub use seminar::*;
