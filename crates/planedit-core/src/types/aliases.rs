//! Type aliases for commonly used complex types.
//!
//! The editing engine is single-threaded: the plan, its selection and the
//! editors bound to it all live on the thread that owns the plan. These
//! aliases give that sharing pattern readable names.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planedit_core::types::*;
//!
//! // Instead of: Rc<RefCell<Plan>>
//! let plan: Shared<Plan> = shared(Plan::new());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Used to bind a points editor to the live plan it mutates.
///
/// # Example
/// ```rust,ignore
/// let plan: Shared<Plan> = Shared::new(RefCell::new(Plan::new()));
/// plan.borrow_mut().add(room);
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// Observer callback receiving a borrowed event.
pub type EventCallback<T> = Box<dyn Fn(&T)>;

/// Create a new `Shared<T>` from a value.
///
/// # Example
/// ```
/// use planedit_core::types::shared;
///
/// let value = shared(5);
/// *value.borrow_mut() += 1;
/// assert_eq!(*value.borrow(), 6);
/// ```
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
