pub mod storage;
mod types;

pub use storage::{Storage, StorageError};
pub use types::{DigitalTwin, TwinCreate, TwinPage, TwinUpdate};
