pub mod error;
pub mod format;
pub mod layout;
pub mod naming;
pub mod output;

pub use error::PersistError;
pub use format::modeline;
pub use layout::{write_minimal, write_pretty, write_volume};
pub use naming::{FileNamer, SplitNamer};
pub use output::{create_output_dir, OutputFiles};
