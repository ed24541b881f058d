//! Control adaptors: deferred calls, protection, indirection and mutable
//! state.
//!
//! - [`lazy`](lazy()): defer a call, binding its arguments to placeholders
//!   ([`_1`] .. [`_6`]), constants or nested deferred calls
//! - [`protect`](protect()): keep a callable from being evaluated as a binding
//! - [`indirect`](indirect()): call through a `Box`, `Rc`, `Arc` or reference
//! - [`mutable`](mutable()) / [`mutable_sync`]: call an `FnMut` through a shared reference
//! - [`PROTECT`], [`INDIRECT`], [`LAZY`], [`MUTABLE`] and `REVEAL`: the
//!   constructors above as constant callables
//!
//! # Examples
//!
//! ```rust
//! use fitting::call;
//! use fitting::control::{_1, _2, indirect, lazy};
//!
//! let sum = |a: i32, b: i32| a + b;
//! assert_eq!(call!(indirect(Box::new(sum)), 3, 2), 5);
//!
//! let flipped = call!(lazy(|a: i32, b: i32| a - b), _2, _1);
//! assert_eq!(call!(flipped, 2, 10), 8);
//! ```

mod indirect;
mod lazy;
mod mutable;
mod protect;
mod statics;

pub use indirect::{Indirect, indirect};
pub use lazy::{
    _1, _2, _3, _4, _5, _6, Bound, Lazy, Placeholder, Select, Transform, Value, lazy, val,
};
pub use mutable::{Mutable, SyncMutable, mutable, mutable_sync};
pub use protect::{Protect, protect};
#[cfg(feature = "reveal")]
pub use statics::{REVEAL, RevealConstructor};
pub use statics::{
    INDIRECT, IndirectConstructor, LAZY, LazyConstructor, MUTABLE, MutableConstructor, PROTECT,
    ProtectConstructor,
};
