pub mod api;
pub mod errors;
pub mod layout;
pub mod preview;
pub mod prompt;
pub mod scaffold;

pub use api::{Mode, Outcome, SkeletonError};
pub use layout::Layout;
pub use scaffold::{Scaffolder, Summary};
