/// Business logic layer for portfolio-service
///
/// This module provides:
/// - Storage: the `Storage` contract and its in-memory implementation
/// - Seed: demonstration content loaded at startup
/// - Clock: time source for server-assigned timestamps
pub mod clock;
pub mod seed;
pub mod storage;

// Re-export commonly used services
pub use clock::{Clock, SystemClock};
pub use storage::{CollectionCounts, MemStorage, Storage};
