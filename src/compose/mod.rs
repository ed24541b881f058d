//! Function composition adaptors.
//!
//! This module builds new callables out of existing ones. Every adaptor owns
//! its callables by value and forwards arguments through
//! [`Callable`](crate::callable::Callable) without copying them.
//!
//! # Overview
//!
//! - [`compose!`] / [`compose`]: right-to-left composition, `f(g(x))`
//! - [`flow!`]: left-to-right composition, `g(f(x))`
//! - [`on`] / [`by`]: apply a projection to each argument, then call
//! - [`fuse`]: spread a tuple argument into separate arguments
//! - [`pack`]: hold arguments until a callable is supplied
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use fitting::{call, compose};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(call!(composed, 5), 11);
//! ```
//!
//! ## Projection
//!
//! ```
//! use fitting::call;
//! use fitting::compose::on;
//!
//! struct Point { x: i32 }
//!
//! let add_x = on(|point: Point| point.x, |a: i32, b: i32| a + b);
//! assert_eq!(call!(add_x, Point { x: 1 }, Point { x: 2 }), 3);
//! ```
//!
//! # Storage
//!
//! Two-callable adaptors store their parts in a
//! [`Pair`](crate::callable::Pair). A closure that captures nothing is
//! zero-sized, so composing such closures produces a zero-sized adaptor no
//! matter how deep the chain is.
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(Identity, f) == f`
//! - **Right Identity**: `compose!(f, Identity) == f`
//! - **Flow**: `flow!(f, g, h) == compose!(h, g, f)`

mod compose_macro;
mod fuse;
mod on;

pub use compose_macro::{Compose, compose};
pub use fuse::{Fuse, Pack, fuse, pack};
pub use on::{On, by, on};
