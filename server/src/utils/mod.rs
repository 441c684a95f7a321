pub mod error;
pub mod panic;
pub mod response;
