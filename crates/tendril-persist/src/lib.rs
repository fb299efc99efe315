pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::CursorRecord;
pub use load::{load_cursors, parse_cursors, LoadReport};
pub use save::save_cursors;
