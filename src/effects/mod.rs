//! Effect system: trees, target maps, and the resolution walk.
//!
//! - `Effect`: per-card tree of atomic effects and AND/OR combinators
//! - `TargetMap`: caller-supplied selection of which effects fire, with
//!   what targets
//! - `EffectHandler`: the seam where card-specific semantics live
//! - `EffectResolver`: decides which atomic effects fire, in what order,
//!   and applies any moves they synthesize
//!
//! ## Design Philosophy
//!
//! The resolver is a pure function of `(board, effect tree, target map)` -
//! it holds no state of its own. Everything game-specific reaches it
//! through `ResolverContext`.

pub mod effect;
pub mod handler;
pub mod resolver;
pub mod targets;

pub use effect::{AtomicEffect, CompoundKind, Effect, EffectId, EffectParam};
pub use handler::{EffectHandler, EventKind, NullEffectHandler};
pub use resolver::{EffectResolver, ResolverContext};
pub use targets::TargetMap;
