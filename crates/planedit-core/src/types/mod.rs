//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` based sharing.

pub mod aliases;

pub use aliases::*;
