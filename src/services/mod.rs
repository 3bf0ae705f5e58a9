pub mod author_service;
pub mod catalog_service;
pub mod search_result;
pub mod validation;

pub use author_service::*;
pub use catalog_service::*;
pub use search_result::*;
pub use validation::*;
