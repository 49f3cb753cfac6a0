pub mod cook;
pub mod errors;
pub mod lex;
pub mod names;
pub mod parse;
pub mod pipeline;
pub mod reshape;
pub mod source;
pub mod tokens;
pub mod trees;

pub use bumpalo as alloc;

mod messages;
