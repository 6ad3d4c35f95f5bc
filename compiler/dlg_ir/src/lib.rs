//! Dialog IR - token and resource model types
//!
//! This crate contains the data structures shared by the dialog resource
//! parser and its callers:
//! - Locations for token positions
//! - Tokens as produced by the external lexer
//! - The resource model (`DialogResource`, `Control`, `Property`, `Layer`)
//! - Per-language string tables (`StringMap`)
//!
//! # Design Philosophy
//!
//! - **Closed kinds**: physical property types are a closed enum; every
//!   parse routine produces exactly one variant.
//! - **Owned output**: a parsed resource owns all of its text, so results
//!   outlive the token array they came from and can cross threads.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on every
//! model type.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod language;
mod location;
mod property;
mod resource;
mod strings;
mod token;

pub use language::{Language, Locale};
pub use location::Location;
pub use property::{Flags, PhysicalType, Property, PropertyValue};
pub use resource::{Control, DialogResource, Layer, Redirect, ResourceId};
pub use strings::{StringEntry, StringMap};
pub use token::{Token, TokenKind};
