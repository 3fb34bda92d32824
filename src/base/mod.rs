//! Basics.
//!
//! This module provides the types the encoder works with: the record types
//! themselves, the domain names they carry, the IANA-assigned values used in
//! their fields, and the traits for writing wire-format data.
//!
//! # Types for DNS Data
//!
//! The types are arranged in submodules. These are:
//!
//! * [iana] for the values of record types, classes, option codes, and
//!   address families,
//! * [name] for domain names,
//! * [opt] for the fields of OPT records and the client subnet option, and
//! * [record] for questions and resource records.
//!
//! # Composing
//!
//! We use the term *composing* for producing the wire-format representation
//! of some data. Data is composed into anything that implements
//! [`OctetsBuilder`][octseq::builder::OctetsBuilder], for instance a
//! `Vec<u8>` or, without an allocator, an [`Array`][octseq::array::Array].
//! The [wire] module contains the [`Compose`][wire::Compose] trait for the
//! integer types used in DNS data.

pub use self::iana::{AddressFamily, Class, OptionCode, Rtype};
pub use self::name::Name;
pub use self::opt::SubnetAddr;
pub use self::record::{
    ForeignRecord, OptEcsRecord, OptPseudoRecord, PtrRecord, Question,
    RawRecord, Record, RecordHeader,
};

pub mod iana;
pub mod name;
pub mod opt;
pub mod record;
pub mod wire;
