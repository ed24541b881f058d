//! # fitting
//!
//! Function adaptors: building blocks that wrap ordinary callables into new
//! callables.
//!
//! ## Overview
//!
//! - **Call protocol**: the [`Callable`](callable::Callable) trait, implemented
//!   by every closure and adaptor, and the [`call!`] macro
//! - **Composition**: `compose!`, `flow!`, `on` / `by`, `fuse`, `pack`
//! - **Dispatch**: `conditional!` picks the candidate whose signature accepts
//!   the arguments, [`is_callable!`] asks whether a call is well-formed
//! - **Diagnostics**: `reveal` and `try_call!` report every candidate that
//!   rejected a call
//! - **Control**: `lazy` with placeholders, `protect`, `indirect`, `mutable`
//!
//! Adaptors store their callables by value. Closures that capture nothing are
//! zero-sized, and so is any adaptor built only from them.
//!
//! ## Feature Flags
//!
//! - `compose`: Composition adaptors (default)
//! - `control`: Lazy, protect, indirect and mutable adaptors (default)
//! - `reveal`: Failure reports and `try_call!` (default)
//! - `tracing`: Emit a `tracing` event for every call rejected by `try_call!`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fitting::prelude::*;
//! use fitting::{call, compose, conditional};
//!
//! struct Meters(f64);
//! struct Feet(f64);
//!
//! let to_meters = conditional!(|m: Meters| m.0, |f: Feet| f.0 * 0.3048);
//! let rounded = compose!(|x: f64| x.round() as i64, to_meters);
//!
//! assert_eq!(call!(rounded, Feet(10.0)), 3);
//! assert_eq!(rounded.call((Meters(2.4),)), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the call protocol and the adaptor constructors.
///
/// # Usage
///
/// ```rust
/// use fitting::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::{Callable, Identity, always};

    pub use crate::probe::{Conditional, Exhausted};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "reveal")]
    pub use crate::reveal::{Reveal, RevealExt, reveal};
}

pub mod callable;

pub mod probe;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "reveal")]
pub mod reveal;
