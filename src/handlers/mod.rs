pub mod hello;
pub mod set;
pub mod get;
pub mod divide;
pub mod docs;

pub use hello::hello_handler;
pub use set::set_handler;
pub use get::get_handler;
pub use divide::divide_handler;
pub use docs::{docs_handler, openapi_handler};
