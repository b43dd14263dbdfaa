#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chunk;
pub mod normalize;

pub use chunk::Chunker;
pub use normalize::{detect_language, normalize};
