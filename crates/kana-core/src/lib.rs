pub mod convert;
pub mod options;
pub mod settings;
pub mod stream;
pub mod tables;
pub mod unicode;

pub use convert::convert;
pub use options::{ConvertFlags, ConvertOptions, ParseFlagsError};
