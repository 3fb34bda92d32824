//! Encoding records into wire format.
//!
//! The [`RecordEncoder`] trait turns the records of the
//! [record][crate::base::record] module into their wire format as defined
//! in [RFC 1035] and, for the EDNS client subnet option, [RFC 7871]. All
//! its methods are provided, so an encoder only needs to override what it
//! wants to do differently. [`DefaultRecordEncoder`] is an encoder that
//! overrides nothing.
//!
//! Encoding appends to an [`OctetsBuilder`] and never looks at what is
//! already there. Names are never compressed.
//!
//! If encoding fails, whatever has been appended before the failure stays
//! in the target. Use [`RecordEncoder::encode_record_atomic`] with a target
//! that can be truncated to get all-or-nothing behaviour.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 7871]: https://tools.ietf.org/html/rfc7871

use crate::base::iana::{AddressFamily, OptionCode};
use crate::base::name::Name;
use crate::base::opt::subnet::prefix_bytes;
use crate::base::record::{
    OptEcsRecord, OptPseudoRecord, PtrRecord, Question, RawRecord, Record,
    RecordHeader,
};
use crate::base::wire::{Compose, Composer};
use alloc::string::String;
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

/// The length of the fixed part of the client subnet option.
///
/// This is OPTION-CODE, OPTION-LENGTH, FAMILY, SOURCE PREFIX-LENGTH, and
/// SCOPE PREFIX-LENGTH.
const ECS_FIXED_LEN: usize = 2 + 2 + 2 + 1 + 1;

//------------ RecordEncoder -------------------------------------------------

/// A type that encodes records into wire format.
pub trait RecordEncoder {
    /// Appends the wire format of `record` to `target`.
    ///
    /// This picks the writer for the kind of record. Foreign records are
    /// rejected with [`EncodeError::UnsupportedRecordType`] without
    /// appending anything.
    fn encode_record<Octs, Target>(
        &self,
        record: &Record<Octs>,
        target: &mut Target,
    ) -> Result<(), EncodeError>
    where
        Octs: AsRef<[u8]>,
        Target: OctetsBuilder + ?Sized,
    {
        trace!(
            kind = record.kind_name(),
            name = %record.name(),
            "encoding record"
        );
        match record {
            Record::Question(question) => {
                self.encode_question(question, target)
            }
            Record::Ptr(record) => self.encode_ptr_record(record, target),
            Record::OptEcs(record) => {
                self.encode_opt_ecs_record(record, target)
            }
            Record::OptPseudo(record) => {
                self.encode_opt_pseudo_record(record, target)
            }
            Record::Raw(record) => self.encode_raw_record(record, target),
            Record::Foreign(record) => {
                debug!(kind = record.kind(), "no writer for record");
                Err(EncodeError::UnsupportedRecordType(record.kind().into()))
            }
        }
    }

    /// Appends the wire format of `record` or nothing at all.
    ///
    /// If encoding fails, `target` is truncated back to the length it had
    /// before the call.
    fn encode_record_atomic<Octs, Target>(
        &self,
        record: &Record<Octs>,
        target: &mut Target,
    ) -> Result<(), EncodeError>
    where
        Octs: AsRef<[u8]>,
        Target: Composer + ?Sized,
    {
        let start = target.as_ref().len();
        let res = self.encode_record(record, target);
        if res.is_err() {
            target.truncate(start);
        }
        res
    }

    /// Appends a question: its name, type, and class.
    fn encode_question<Target: OctetsBuilder + ?Sized>(
        &self,
        question: &Question,
        target: &mut Target,
    ) -> Result<(), EncodeError> {
        self.encode_name(question.qname(), target)?;
        question.qtype().compose(target)?;
        question.qclass().compose(target)?;
        Ok(())
    }

    /// Appends a domain name.
    ///
    /// The default implementation appends the uncompressed name.
    fn encode_name<Target: OctetsBuilder + ?Sized>(
        &self,
        name: &Name,
        target: &mut Target,
    ) -> Result<(), EncodeError> {
        name.compose(target)?;
        Ok(())
    }

    /// Appends the record header: owner name, type, class, and TTL.
    ///
    /// Only the lower 32 bits of the TTL are written.
    fn write_header<Target: OctetsBuilder + ?Sized>(
        &self,
        header: &RecordHeader,
        target: &mut Target,
    ) -> Result<(), EncodeError> {
        self.encode_name(header.name(), target)?;
        header.rtype().compose(target)?;
        header.class().compose(target)?;
        header.wire_ttl().compose(target)?;
        Ok(())
    }

    /// Appends a PTR record.
    fn encode_ptr_record<Target: OctetsBuilder + ?Sized>(
        &self,
        record: &PtrRecord,
        target: &mut Target,
    ) -> Result<(), EncodeError> {
        self.write_header(record.header(), target)?;
        self.encode_name(record.hostname(), target)
    }

    /// Appends an OPT record without options.
    fn encode_opt_pseudo_record<Target: OctetsBuilder + ?Sized>(
        &self,
        record: &OptPseudoRecord,
        target: &mut Target,
    ) -> Result<(), EncodeError> {
        self.write_header(record.header(), target)?;
        0u16.compose(target)?;
        Ok(())
    }

    /// Appends an OPT record with a client subnet option.
    ///
    /// The record is checked before anything is appended. The source prefix
    /// length must not be negative and must not exceed the number of bits
    /// in the address, and the address must be an IPv4 or IPv6 address.
    ///
    /// Only the octets of the address covered by the source prefix are
    /// written and any bits of the last of these octets beyond the prefix
    /// are cleared.
    fn encode_opt_ecs_record<Target: OctetsBuilder + ?Sized>(
        &self,
        record: &OptEcsRecord,
        target: &mut Target,
    ) -> Result<(), EncodeError> {
        let addr = record.addr();
        let invalid = || EncodeError::InvalidPrefixLength {
            prefix_len: record.source_prefix_len(),
            max: addr.address_bits(),
        };
        let source_prefix_len = usize::try_from(record.source_prefix_len())
            .ok()
            .filter(|&len| len <= addr.address_bits())
            .ok_or_else(invalid)?;
        let family = match addr.family() {
            family @ (AddressFamily::IPV4 | AddressFamily::IPV6) => family,
            family => {
                return Err(EncodeError::UnsupportedAddressFamily(family))
            }
        };

        // A well-formed IPv6 address has 128 bits, so these only fail if
        // the octets are too long for the family.
        let option_len = ECS_FIXED_LEN + prefix_bytes(source_prefix_len);
        let (Ok(source), Ok(option_len)) = (
            u8::try_from(source_prefix_len),
            u16::try_from(option_len),
        ) else {
            return Err(invalid());
        };

        self.write_header(record.header(), target)?;
        option_len.compose(target)?;
        OptionCode::ClientSubnet.compose(target)?;
        (option_len - 4).compose(target)?;
        family.compose(target)?;
        source.compose(target)?;
        record.scope_prefix_len().compose(target)?;
        addr.compose_prefix(source_prefix_len, target)?;
        Ok(())
    }

    /// Appends a record with opaque record data.
    ///
    /// Record data longer than 65535 octets is rejected before anything is
    /// appended.
    fn encode_raw_record<Octs, Target>(
        &self,
        record: &RawRecord<Octs>,
        target: &mut Target,
    ) -> Result<(), EncodeError>
    where
        Octs: AsRef<[u8]>,
        Target: OctetsBuilder + ?Sized,
    {
        let content = record.content().as_ref();
        let len = u16::try_from(content.len())
            .map_err(|_| EncodeError::ContentTooLarge(content.len()))?;
        self.write_header(record.header(), target)?;
        len.compose(target)?;
        target.append_slice(content)?;
        Ok(())
    }
}

//------------ DefaultRecordEncoder ------------------------------------------

/// The record encoder using all the provided methods.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultRecordEncoder;

impl DefaultRecordEncoder {
    /// Creates a new encoder.
    pub const fn new() -> Self {
        DefaultRecordEncoder
    }
}

impl RecordEncoder for DefaultRecordEncoder {}

//============ Error Types ===================================================

//------------ EncodeError ---------------------------------------------------

/// An error happened while encoding a record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// There is no writer for records of the given kind.
    UnsupportedRecordType(String),

    /// The source prefix length of a client subnet option is out of range.
    InvalidPrefixLength {
        /// The offending prefix length.
        prefix_len: i32,

        /// The number of bits in the address.
        max: usize,
    },

    /// The address of a client subnet option is neither IPv4 nor IPv6.
    UnsupportedAddressFamily(AddressFamily),

    /// The record data is longer than 65535 octets.
    ContentTooLarge(usize),

    /// The target ran out of space.
    ShortBuf,
}

impl<T: Into<ShortBuf>> From<T> for EncodeError {
    fn from(_: T) -> Self {
        EncodeError::ShortBuf
    }
}

//--- Display and Error

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeError::UnsupportedRecordType(ref kind) => {
                write!(f, "unsupported record type: {}", kind)
            }
            EncodeError::InvalidPrefixLength { prefix_len, max } => {
                write!(
                    f,
                    "invalid source prefix length {} (expected: 0..={})",
                    prefix_len, max
                )
            }
            EncodeError::UnsupportedAddressFamily(family) => {
                write!(f, "unsupported address family {}", family)
            }
            EncodeError::ContentTooLarge(len) => {
                write!(f, "record data too long: {} octets", len)
            }
            EncodeError::ShortBuf => f.write_str("buffer size exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

//============ Testing =======================================================

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::opt::SubnetAddr;
    use crate::base::record::ForeignRecord;
    use core::net::{Ipv4Addr, Ipv6Addr};
    use octseq::array::Array;
    use rstest::rstest;
    use std::vec::Vec;

    fn encode(record: impl Into<Record>) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::new();
        DefaultRecordEncoder.encode_record(&record.into(), &mut buf)?;
        Ok(buf)
    }

    /// The encoded header of an OPT record with all fields zero.
    const OPT_HEADER: &[u8] = b"\0\x00\x29\x02\x00\0\0\0\0";

    fn ecs(source_prefix_len: i32, addr: impl Into<SubnetAddr>) -> OptEcsRecord {
        OptEcsRecord::with_prefix(512, source_prefix_len, addr)
    }

    #[test]
    fn question() {
        assert_eq!(
            encode(Question::new_in("example.com", Rtype::A)).unwrap(),
            b"\x07example\x03com\0\x00\x01\x00\x01"
        );
    }

    #[test]
    fn question_root() {
        assert_eq!(
            encode(Question::new(".", Rtype::ANY, Class::CH)).unwrap(),
            b"\0\x00\xff\x00\x03"
        );
    }

    #[test]
    fn ptr_record() {
        let record = PtrRecord::new(
            "1.2.0.192.in-addr.arpa", Class::IN, 3600, "host.example"
        );
        assert_eq!(
            encode(record).unwrap(),
            b"\x011\x012\x010\x03192\x07in-addr\x04arpa\0\
              \x00\x0c\x00\x01\x00\x00\x0e\x10\
              \x04host\x07example\0"
        );
    }

    #[test]
    fn ttl_is_truncated() {
        let record = PtrRecord::new(".", Class::IN, 0xAB_0000_0001, ".");
        assert_eq!(
            encode(record).unwrap(),
            b"\0\x00\x0c\x00\x01\x00\x00\x00\x01\0"
        );
    }

    #[test]
    fn opt_pseudo_record() {
        let mut record = OptPseudoRecord::new(4096, 0, 0);
        record.set_dnssec_ok(true);
        assert_eq!(
            encode(record).unwrap(),
            b"\0\x00\x29\x10\x00\x00\x00\x80\x00\x00\x00"
        );
    }

    #[test]
    fn raw_record() {
        let content = b"\x04test\x03txt";
        let record = RawRecord::new(
            "example.com", Rtype::TXT, Class::IN, 60, content.to_vec()
        );
        let encoded = encode(record).unwrap();
        let (header, rest) = encoded.split_at(13 + 2 + 2 + 4);
        assert_eq!(
            header,
            b"\x07example\x03com\0\x00\x10\x00\x01\x00\x00\x00\x3c"
        );
        assert_eq!(&rest[..2], &[0, content.len() as u8]);
        assert_eq!(&rest[2..], content);
    }

    #[test]
    fn raw_record_empty() {
        let record = RawRecord::new(".", Rtype::TXT, Class::IN, 0, Vec::new());
        assert_eq!(
            encode(record).unwrap(),
            b"\0\x00\x10\x00\x01\0\0\0\0\0\0"
        );
    }

    #[test]
    fn raw_record_too_large() {
        let record = RawRecord::new(
            ".", Rtype::TXT, Class::IN, 0, vec![0u8; 0x10000]
        );
        let mut buf = Vec::new();
        assert_eq!(
            DefaultRecordEncoder.encode_raw_record(&record, &mut buf),
            Err(EncodeError::ContentTooLarge(0x10000))
        );
        assert!(buf.is_empty());

        let record = RawRecord::new(
            ".", Rtype::TXT, Class::IN, 0, vec![0u8; 0xFFFF]
        );
        assert_eq!(encode(record).unwrap().len(), 11 + 0xFFFF);
    }

    #[test]
    fn ecs_ipv4_24() {
        let encoded = encode(ecs(24, Ipv4Addr::new(192, 0, 2, 77))).unwrap();
        let (header, option) = encoded.split_at(OPT_HEADER.len());
        assert_eq!(header, OPT_HEADER);
        assert_eq!(
            option,
            [
                0, 11, // option data length
                0, 8, // OPTION-CODE
                0, 7, // OPTION-LENGTH
                0, 1, // FAMILY
                24, 0, // SOURCE and SCOPE PREFIX-LENGTH
                192, 0, 2, // ADDRESS
            ]
        );
    }

    #[test]
    fn ecs_ipv4_9() {
        let encoded = encode(ecs(9, Ipv4Addr::new(10, 0xFF, 3, 4))).unwrap();
        assert_eq!(
            &encoded[OPT_HEADER.len()..],
            [0, 10, 0, 8, 0, 6, 0, 1, 9, 0, 10, 0x80]
        );
    }

    #[test]
    fn ecs_ipv6_56() {
        let addr: Ipv6Addr = "2001:db8:1234:5678::1".parse().unwrap();
        let encoded = encode(ecs(56, addr)).unwrap();
        assert_eq!(
            &encoded[OPT_HEADER.len()..],
            [
                0, 15, 0, 8, 0, 11, 0, 2, 56, 0,
                0x20, 0x01, 0x0d, 0xb8, 0x12, 0x34, 0x56
            ]
        );
    }

    #[test]
    fn ecs_zero_prefix() {
        let record = OptEcsRecord::for_family(512, AddressFamily::IPV4)
            .unwrap();
        assert_eq!(
            &encode(record).unwrap()[OPT_HEADER.len()..],
            [0, 8, 0, 8, 0, 4, 0, 1, 0, 0]
        );
    }

    #[test]
    fn ecs_scope_prefix_is_verbatim() {
        let mut record = ecs(32, Ipv4Addr::new(192, 0, 2, 1));
        record.set_scope_prefix_len(200);
        let encoded = encode(record).unwrap();
        assert_eq!(encoded[OPT_HEADER.len() + 9], 200);
    }

    #[rstest]
    #[case(-1, 32)]
    #[case(33, 32)]
    #[case(i32::MIN, 32)]
    fn ecs_invalid_ipv4_prefix(#[case] prefix_len: i32, #[case] max: usize) {
        let mut buf = Vec::new();
        assert_eq!(
            DefaultRecordEncoder.encode_opt_ecs_record(
                &ecs(prefix_len, Ipv4Addr::LOCALHOST), &mut buf
            ),
            Err(EncodeError::InvalidPrefixLength { prefix_len, max })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn ecs_invalid_ipv6_prefix() {
        assert_eq!(
            encode(ecs(129, Ipv6Addr::LOCALHOST)),
            Err(EncodeError::InvalidPrefixLength {
                prefix_len: 129, max: 128
            })
        );
        assert!(encode(ecs(128, Ipv6Addr::LOCALHOST)).is_ok());
    }

    #[test]
    fn ecs_unsupported_family() {
        let addr = SubnetAddr::new(AddressFamily::from_int(6), [1, 2, 3, 4, 5, 6]);
        assert_eq!(
            encode(ecs(16, addr.clone())),
            Err(EncodeError::UnsupportedAddressFamily(
                AddressFamily::from_int(6)
            ))
        );
        // The prefix is checked first.
        assert_eq!(
            encode(ecs(49, addr)),
            Err(EncodeError::InvalidPrefixLength { prefix_len: 49, max: 48 })
        );
    }

    #[test]
    fn foreign_record() {
        let header = RecordHeader::new("example.com", Rtype::A, Class::IN, 0);
        let mut buf = Vec::new();
        assert_eq!(
            DefaultRecordEncoder.encode_record(
                &Record::<Vec<u8>>::Foreign(ForeignRecord::new(header, "ARecord")),
                &mut buf
            ),
            Err(EncodeError::UnsupportedRecordType("ARecord".into()))
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn short_buf() {
        let mut buf = Array::<8>::new();
        assert_eq!(
            DefaultRecordEncoder.encode_record(
                &Record::<Vec<u8>>::from(
                    Question::new_in("example.com", Rtype::A)
                ),
                &mut buf
            ),
            Err(EncodeError::ShortBuf)
        );
    }

    #[test]
    fn atomic_rolls_back() {
        let mut buf = Array::<16>::new();
        let record: Record = Question::new_in("a.b", Rtype::A).into();
        DefaultRecordEncoder
            .encode_record_atomic(&record, &mut buf)
            .unwrap();
        let len = AsRef::<[u8]>::as_ref(&buf).len();
        assert_eq!(len, 9);
        assert_eq!(
            DefaultRecordEncoder.encode_record_atomic(&record, &mut buf),
            Err(EncodeError::ShortBuf)
        );
        assert_eq!(AsRef::<[u8]>::as_ref(&buf).len(), len);
    }

    #[test]
    fn display() {
        assert_eq!(
            format!(
                "{}",
                EncodeError::InvalidPrefixLength { prefix_len: 33, max: 32 }
            ),
            "invalid source prefix length 33 (expected: 0..=32)"
        );
        assert_eq!(
            format!(
                "{}",
                EncodeError::UnsupportedAddressFamily(AddressFamily::from_int(6))
            ),
            "unsupported address family 6"
        );
    }
}
