pub mod common;
pub mod evaluate;

pub use common::*;
pub use evaluate::*;
