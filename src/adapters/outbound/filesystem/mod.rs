/// Filesystem adapters: manifest metadata, the cache file, and report output
mod cache_file_store;
mod file_reader;
mod file_writer;

pub use cache_file_store::JsonCacheFileStore;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
