pub mod config;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod storage;
pub mod utils;
pub mod validation;

pub use routes::{create_routes, AppState};
pub use storage::{MemStorage, PgStorage, Storage, StorageError};
