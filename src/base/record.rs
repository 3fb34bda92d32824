//! Resource records.
//!
//! This module defines the records the encoder knows how to turn into wire
//! format. They all share a [`RecordHeader`] with the owner name, record
//! type, class, and TTL, except for [`Question`] which has no TTL. The
//! closed set of encodable records is collected in the [`Record`] enum.
//!
//! Records are plain values. They are created by the caller and only ever
//! read by the encoder.

use super::iana::{AddressFamily, Class, Rtype};
use super::name::Name;
use super::opt::{OptTtl, SubnetAddr};
use alloc::string::String;
use alloc::vec::Vec;

//------------ RecordHeader --------------------------------------------------

/// The header shared by all resource records.
///
/// The record model allows for TTLs wider than the 32 bits available in the
/// wire format. Only the lower 32 bits make it onto the wire, see
/// [`wire_ttl`][Self::wire_ttl].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordHeader {
    name: Name,
    rtype: Rtype,
    class: Class,
    ttl: u64,
}

impl RecordHeader {
    /// Creates a new header from its parts.
    pub fn new(
        name: impl Into<Name>,
        rtype: Rtype,
        class: Class,
        ttl: u64,
    ) -> Self {
        RecordHeader {
            name: name.into(),
            rtype,
            class,
            ttl,
        }
    }

    /// Returns the owner name of the record.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL as carried by the record.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    /// Returns the TTL as written to the wire.
    ///
    /// This is the lower 32 bits of the TTL. Any higher bits are silently
    /// dropped.
    pub fn wire_ttl(&self) -> u32 {
        self.ttl as u32
    }
}

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: impl Into<Name>, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: impl Into<Name>, qtype: Rtype) -> Self {
        Self::new(qname, qtype, Class::IN)
    }

    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

//------------ PtrRecord -----------------------------------------------------

/// A PTR record pointing to a host name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PtrRecord {
    header: RecordHeader,
    hostname: Name,
}

impl PtrRecord {
    /// Creates a new PTR record.
    pub fn new(
        name: impl Into<Name>,
        class: Class,
        ttl: u64,
        hostname: impl Into<Name>,
    ) -> Self {
        Self::from_parts(
            RecordHeader::new(name, Rtype::PTR, class, ttl),
            hostname,
        )
    }

    /// Creates a PTR record from an existing header.
    ///
    /// The record type is taken from the header as is.
    pub fn from_parts(header: RecordHeader, hostname: impl Into<Name>) -> Self {
        PtrRecord {
            header,
            hostname: hostname.into(),
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Returns the host name the record points to.
    pub fn hostname(&self) -> &Name {
        &self.hostname
    }
}

//------------ OptPseudoRecord -----------------------------------------------

/// An OPT record without any options.
///
/// See the [opt][super::opt] module for how the header fields are used by
/// OPT records.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptPseudoRecord {
    header: RecordHeader,
}

impl OptPseudoRecord {
    /// Creates a new OPT record.
    ///
    /// The owner is the root name and all flags are cleared.
    pub fn new(udp_payload_size: u16, ext_rcode: u8, version: u8) -> Self {
        OptPseudoRecord {
            header: opt_header(udp_payload_size, ext_rcode, version),
        }
    }

    /// Creates an OPT record from an arbitrary header.
    pub fn from_header(header: RecordHeader) -> Self {
        OptPseudoRecord { header }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Returns the UDP payload size announced by the record.
    pub fn udp_payload_size(&self) -> u16 {
        self.header.class.to_int()
    }

    /// Returns the upper bits of the extended response code.
    pub fn ext_rcode(&self) -> u8 {
        self.opt_ttl().ext_rcode()
    }

    /// Returns the EDNS version.
    pub fn version(&self) -> u8 {
        self.opt_ttl().version()
    }

    /// Returns the value of the DNSSEC OK (DO) bit.
    pub fn dnssec_ok(&self) -> bool {
        self.opt_ttl().dnssec_ok()
    }

    /// Sets the DNSSEC OK (DO) bit to the given value.
    pub fn set_dnssec_ok(&mut self, value: bool) {
        set_dnssec_ok(&mut self.header, value)
    }

    fn opt_ttl(&self) -> OptTtl {
        OptTtl::from_ttl(self.header.wire_ttl())
    }
}

//------------ OptEcsRecord --------------------------------------------------

/// An OPT record carrying a single EDNS client subnet option.
///
/// The option is defined in [RFC 7871]. The source prefix length is kept as
/// given by the caller and only checked against the address when the record
/// is encoded. The scope prefix length must be zero in queries, which is
/// what all the constructors use.
///
/// [RFC 7871]: https://tools.ietf.org/html/rfc7871
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptEcsRecord {
    header: RecordHeader,
    source_prefix_len: i32,
    scope_prefix_len: u8,
    addr: SubnetAddr,
}

impl OptEcsRecord {
    /// Creates a new client subnet OPT record.
    pub fn new(
        udp_payload_size: u16,
        ext_rcode: u8,
        version: u8,
        source_prefix_len: i32,
        addr: impl Into<SubnetAddr>,
    ) -> Self {
        Self::from_parts(
            opt_header(udp_payload_size, ext_rcode, version),
            source_prefix_len,
            0,
            addr,
        )
    }

    /// Creates a new EDNS version 0 client subnet record.
    pub fn with_prefix(
        udp_payload_size: u16,
        source_prefix_len: i32,
        addr: impl Into<SubnetAddr>,
    ) -> Self {
        Self::new(udp_payload_size, 0, 0, source_prefix_len, addr)
    }

    /// Creates a record that reveals nothing but the address family.
    ///
    /// The address is the loopback address of the family and the source
    /// prefix length is zero, so no address octets are sent. This should be
    /// the family used to send the query.
    ///
    /// Returns `None` if the family is neither IPv4 nor IPv6.
    pub fn for_family(
        udp_payload_size: u16,
        family: AddressFamily,
    ) -> Option<Self> {
        SubnetAddr::loopback(family)
            .map(|addr| Self::with_prefix(udp_payload_size, 0, addr))
    }

    /// Creates a record from all its parts.
    pub fn from_parts(
        header: RecordHeader,
        source_prefix_len: i32,
        scope_prefix_len: u8,
        addr: impl Into<SubnetAddr>,
    ) -> Self {
        OptEcsRecord {
            header,
            source_prefix_len,
            scope_prefix_len,
            addr: addr.into(),
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Returns the number of leading address bits sent.
    pub fn source_prefix_len(&self) -> i32 {
        self.source_prefix_len
    }

    /// Returns the number of leading address bits an answer covers.
    pub fn scope_prefix_len(&self) -> u8 {
        self.scope_prefix_len
    }

    /// Sets the scope prefix length.
    pub fn set_scope_prefix_len(&mut self, len: u8) {
        self.scope_prefix_len = len
    }

    /// Returns the address.
    pub fn addr(&self) -> &SubnetAddr {
        &self.addr
    }

    /// Returns the UDP payload size announced by the record.
    pub fn udp_payload_size(&self) -> u16 {
        self.header.class.to_int()
    }

    /// Returns the value of the DNSSEC OK (DO) bit.
    pub fn dnssec_ok(&self) -> bool {
        OptTtl::from_ttl(self.header.wire_ttl()).dnssec_ok()
    }

    /// Sets the DNSSEC OK (DO) bit to the given value.
    pub fn set_dnssec_ok(&mut self, value: bool) {
        set_dnssec_ok(&mut self.header, value)
    }
}

fn opt_header(udp_payload_size: u16, ext_rcode: u8, version: u8) -> RecordHeader {
    RecordHeader::new(
        Name::root(),
        Rtype::OPT,
        Class::from_int(udp_payload_size),
        OptTtl::new(ext_rcode, version).to_ttl().into(),
    )
}

fn set_dnssec_ok(header: &mut RecordHeader, value: bool) {
    let mut ttl = OptTtl::from_ttl(header.wire_ttl());
    ttl.set_dnssec_ok(value);
    header.ttl = ttl.to_ttl().into();
}

//------------ RawRecord -----------------------------------------------------

/// A record with opaque record data.
///
/// The record data is written as is, preceded by its length.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRecord<Octs = Vec<u8>> {
    header: RecordHeader,
    content: Octs,
}

impl<Octs> RawRecord<Octs> {
    /// Creates a new record from its parts.
    pub fn new(
        name: impl Into<Name>,
        rtype: Rtype,
        class: Class,
        ttl: u64,
        content: Octs,
    ) -> Self {
        Self::from_parts(RecordHeader::new(name, rtype, class, ttl), content)
    }

    /// Creates a record from an existing header and the record data.
    pub fn from_parts(header: RecordHeader, content: Octs) -> Self {
        RawRecord { header, content }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Returns the record data.
    pub fn content(&self) -> &Octs {
        &self.content
    }

    /// Converts the record into its record data.
    pub fn into_content(self) -> Octs {
        self.content
    }
}

//------------ ForeignRecord -------------------------------------------------

/// A record of a kind the encoder has no writer for.
///
/// This allows records handed over from elsewhere to travel through the
/// same channels as the encodable ones. Encoding such a record fails with
/// an error that names its kind.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignRecord {
    header: RecordHeader,
    kind: String,
}

impl ForeignRecord {
    /// Creates a new record of the given kind.
    pub fn new(header: RecordHeader, kind: impl Into<String>) -> Self {
        ForeignRecord {
            header,
            kind: kind.into(),
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Returns the name of the record’s kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

//------------ Record --------------------------------------------------------

/// Any record that can be handed to the encoder.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Record<Octs = Vec<u8>> {
    Question(Question),
    Ptr(PtrRecord),
    OptEcs(OptEcsRecord),
    OptPseudo(OptPseudoRecord),
    Raw(RawRecord<Octs>),
    Foreign(ForeignRecord),
}

impl<Octs> Record<Octs> {
    /// Returns the name of the record’s kind.
    ///
    /// For foreign records, this is the kind they were created with.
    pub fn kind_name(&self) -> &str {
        match self {
            Record::Question(_) => "Question",
            Record::Ptr(_) => "PtrRecord",
            Record::OptEcs(_) => "OptEcsRecord",
            Record::OptPseudo(_) => "OptPseudoRecord",
            Record::Raw(_) => "RawRecord",
            Record::Foreign(record) => record.kind(),
        }
    }

    /// Returns the record header.
    ///
    /// Returns `None` for questions which don’t have one.
    pub fn header(&self) -> Option<&RecordHeader> {
        match self {
            Record::Question(_) => None,
            Record::Ptr(record) => Some(record.header()),
            Record::OptEcs(record) => Some(record.header()),
            Record::OptPseudo(record) => Some(record.header()),
            Record::Raw(record) => Some(record.header()),
            Record::Foreign(record) => Some(record.header()),
        }
    }

    /// Returns the owner name of the record.
    pub fn name(&self) -> &Name {
        match self {
            Record::Question(question) => question.qname(),
            Record::Ptr(record) => record.header().name(),
            Record::OptEcs(record) => record.header().name(),
            Record::OptPseudo(record) => record.header().name(),
            Record::Raw(record) => record.header().name(),
            Record::Foreign(record) => record.header().name(),
        }
    }
}

//--- From

impl<Octs> From<Question> for Record<Octs> {
    fn from(question: Question) -> Self {
        Record::Question(question)
    }
}

impl<Octs> From<PtrRecord> for Record<Octs> {
    fn from(record: PtrRecord) -> Self {
        Record::Ptr(record)
    }
}

impl<Octs> From<OptEcsRecord> for Record<Octs> {
    fn from(record: OptEcsRecord) -> Self {
        Record::OptEcs(record)
    }
}

impl<Octs> From<OptPseudoRecord> for Record<Octs> {
    fn from(record: OptPseudoRecord) -> Self {
        Record::OptPseudo(record)
    }
}

impl<Octs> From<RawRecord<Octs>> for Record<Octs> {
    fn from(record: RawRecord<Octs>) -> Self {
        Record::Raw(record)
    }
}

impl<Octs> From<ForeignRecord> for Record<Octs> {
    fn from(record: ForeignRecord) -> Self {
        Record::Foreign(record)
    }
}

//============ Testing =======================================================

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use core::net::Ipv4Addr;

    #[test]
    fn wire_ttl_keeps_low_bits() {
        let header = RecordHeader::new(
            "example.com", Rtype::A, Class::IN, 0x1_0000_0E10
        );
        assert_eq!(header.ttl(), 0x1_0000_0E10);
        assert_eq!(header.wire_ttl(), 0x0E10);
    }

    #[test]
    fn opt_pseudo_header() {
        let mut opt = OptPseudoRecord::new(4096, 1, 0);
        assert!(opt.header().name().is_root());
        assert_eq!(opt.header().rtype(), Rtype::OPT);
        assert_eq!(opt.udp_payload_size(), 4096);
        assert_eq!(opt.ext_rcode(), 1);
        assert_eq!(opt.version(), 0);
        assert!(!opt.dnssec_ok());
        opt.set_dnssec_ok(true);
        assert!(opt.dnssec_ok());
        assert_eq!(opt.header().ttl(), 0x0100_8000);
    }

    #[test]
    fn ecs_constructors() {
        let ecs = OptEcsRecord::with_prefix(
            1232, 24, Ipv4Addr::new(192, 0, 2, 1)
        );
        assert_eq!(ecs.source_prefix_len(), 24);
        assert_eq!(ecs.scope_prefix_len(), 0);
        assert_eq!(ecs.udp_payload_size(), 1232);
        assert_eq!(ecs.header().ttl(), 0);

        let ecs = OptEcsRecord::for_family(512, AddressFamily::IPV6).unwrap();
        assert_eq!(ecs.source_prefix_len(), 0);
        assert_eq!(ecs.addr().family(), AddressFamily::IPV6);
        assert!(OptEcsRecord::for_family(512, AddressFamily::from_int(7))
            .is_none());
    }

    #[test]
    fn kind_names() {
        let record: Record = Question::new_in("example.com", Rtype::A).into();
        assert_eq!(record.kind_name(), "Question");
        assert!(record.header().is_none());
        assert_eq!(record.name().as_str(), "example.com");

        let header = RecordHeader::new("x", Rtype::A, Class::IN, 0);
        let record: Record = ForeignRecord::new(header, "ARecord").into();
        assert_eq!(record.kind_name(), "ARecord");
        assert_eq!(record.header().unwrap().rtype(), Rtype::A);
    }
}
