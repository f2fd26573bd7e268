//! The README written next to a freshly created layout.

mod readme;

pub use readme::{DEFAULT_PROJECT_NAME, ReadmeError, write_readme};
