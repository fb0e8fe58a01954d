//! Repository Layer
//!
//! Blob storage abstractions and the whole-board repository built on them.

mod board_repo;
mod file;
mod memory;
mod traits;


pub use board_repo::BoardRepository;
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::BlobStore;
