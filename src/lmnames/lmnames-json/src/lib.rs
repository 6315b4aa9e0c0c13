pub mod emit;
pub mod escape;

pub use emit::{level_key, write_document, write_fragment, Entry, KeyStyle};
pub use escape::{escape, escape_into};
