pub mod file;

pub use file::JsonFileStore;
