//! IANA Definitions for DNS.
//!
//! This module contains enums for parameters defined in IANA registries
//! that are relevant for encoding DNS records. All types are newtypes
//! around their integer value with associated constants for the well
//! known values. `FromStr` and `Display` are implemented to convert from
//! the string codes to the values and back.
//!
//! Types also implement a `compose()` method for composing into wire format
//! data.

pub use self::class::Class;
pub use self::family::AddressFamily;
pub use self::opt::OptionCode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod family;
pub mod opt;
pub mod rtype;
