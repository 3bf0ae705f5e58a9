pub mod author;
pub mod book;
pub mod search_result;

pub use author::*;
pub use book::*;
pub use search_result::*;
