pub mod files;
pub mod io;
pub mod types;

pub use files::FilesystemFileStore;
pub use io::FilesystemStateStore;
pub use types::StateValue;
