//! Local preference storage

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::PreferenceStore;

#[cfg(test)]
pub use traits::MockPreferenceStore;
