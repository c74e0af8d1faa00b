mod fix_grammar;
mod generate_seminar;
mod persona;
mod translate_text;

pub use fix_grammar::*;
pub use generate_seminar::*;
pub use translate_text::*;
