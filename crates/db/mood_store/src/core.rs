pub mod analysis;
pub mod model;
pub mod repository;
pub mod storage;

// Re-export commonly used types
pub use model::*;
pub use repository::MoodTracker;
pub use storage::{JsonFileStore, MemoryStore, RecordStore};
