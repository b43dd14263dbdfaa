#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod flat;
pub mod index;

pub use flat::FlatIndex;
pub use index::EmbeddingIndex;
