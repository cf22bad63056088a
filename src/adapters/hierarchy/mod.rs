//! Hierarchy source adapters.
//!
//! - `FsHierarchySource` - Reads `{id}.json`, `{id}.yaml` or `{id}.yml` files
//! - `InMemoryHierarchySource` - Map-backed source for tests and embedding

mod filesystem;
mod in_memory;

pub use filesystem::FsHierarchySource;
pub use in_memory::InMemoryHierarchySource;
