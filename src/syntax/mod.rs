// Parsed-file view handed to the section layer
pub mod file;

pub use file::SyntaxFile;
