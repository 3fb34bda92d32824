//! Encoding DNS records into wire format.
//!
//! This crate turns DNS questions and a small set of resource records into
//! the wire format defined by [RFC 1035]. Besides PTR records and records
//! with opaque data, it knows about the OPT pseudo record of EDNS and can
//! produce OPT records carrying the EDNS client subnet option of
//! [RFC 7871].
//!
//! The crate only encodes single records. The message header, the order of
//! sections, and name compression are left to whoever assembles the
//! message.
//!
//! # Modules
//!
//! * [base] contains the record types and everything they are made of, and
//! * [encode] contains the [`RecordEncoder`][encode::RecordEncoder] trait
//!   doing the actual work.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use rr_encode::base::{OptEcsRecord, Question, Record, Rtype};
//! use rr_encode::encode::{DefaultRecordEncoder, RecordEncoder};
//! use std::net::Ipv4Addr;
//!
//! let mut buf = Vec::new();
//! let question: Record = Question::new_in("example.com", Rtype::A).into();
//! DefaultRecordEncoder.encode_record(&question, &mut buf).unwrap();
//!
//! let ecs: Record = OptEcsRecord::with_prefix(
//!     1232, 24, Ipv4Addr::new(192, 0, 2, 1)
//! ).into();
//! DefaultRecordEncoder.encode_record(&ecs, &mut buf).unwrap();
//! assert_eq!(buf.len(), 17 + 9 + 2 + 11);
//! # }
//! ```
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables using the type `BytesMut` from the
//!   [bytes](https://github.com/tokio-rs/bytes) crate as a target for
//!   encoding.
//! * `serde`: Enables serialization and deserialization of the record
//!   types via [serde](https://serde.rs/).
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//! * `tracing`: Emits diagnostic events while encoding via the
//!   [tracing](https://github.com/tokio-rs/tracing) crate.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 7871]: https://tools.ietf.org/html/rfc7871

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

extern crate alloc;

pub mod base;
pub mod encode;
