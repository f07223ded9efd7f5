pub mod atomic_writer;
pub mod json_store;
pub mod memory;
pub mod state;
pub mod traits;

pub use atomic_writer::AtomicWriter;
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use state::StoreState;
pub use traits::{CardWrite, DataStore};
