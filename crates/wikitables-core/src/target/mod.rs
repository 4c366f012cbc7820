//! Target modeling: which page identifiers are accepted, and where their
//! tables are written.

mod dir;
mod validate;

pub use dir::{output_dir_name, ROOT_DIR_NAME};
pub use validate::is_valid_target;
