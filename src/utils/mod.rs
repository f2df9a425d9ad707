// Utils compartidos

pub mod constants;
pub mod storage;
pub mod viewport;
pub mod format;

pub use constants::*;
pub use storage::*;
pub use viewport::scroll_to_top;
pub use format::*;
