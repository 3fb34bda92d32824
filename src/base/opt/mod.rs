//! Record data for OPT records.
//!
//! OPT records are meta records used by EDNS to convey additional data about
//! clients, servers, and the query being performed.
//!
//! An OPT record repurposes the fields of the resource record header. Its
//! name is always the root, its class field holds the UDP payload size the
//! requestor is able to receive, and its TTL field is split into the upper
//! eight bits of the extended response code, the EDNS version, and a set of
//! flags of which only the DNSSEC OK bit is currently defined. See
//! [RFC 6891] for the details.
//!
//! The only option supported by the encoder is the EDNS client subnet
//! option. Its address handling lives in the [subnet] module.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

pub mod subnet;

pub use self::subnet::SubnetAddr;

//------------ OptTtl --------------------------------------------------------

/// The content of the TTL field of an OPT record.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct OptTtl {
    /// The upper eight bits of the extended response code.
    ext_rcode: u8,

    /// The EDNS version.
    version: u8,

    /// The EDNS flags.
    flags: u16,
}

impl OptTtl {
    /// The DNSSEC OK (DO) bit in the flags.
    pub const DNSSEC_OK: u16 = 0x8000;

    /// Creates a new value with all flags cleared.
    pub fn new(ext_rcode: u8, version: u8) -> Self {
        OptTtl { ext_rcode, version, flags: 0 }
    }

    /// Splits the TTL field of an OPT record into its parts.
    pub fn from_ttl(ttl: u32) -> Self {
        let [ext_rcode, version, hi, lo] = ttl.to_be_bytes();
        OptTtl {
            ext_rcode,
            version,
            flags: u16::from_be_bytes([hi, lo]),
        }
    }

    /// Returns the value for the TTL field of an OPT record.
    pub fn to_ttl(self) -> u32 {
        let [hi, lo] = self.flags.to_be_bytes();
        u32::from_be_bytes([self.ext_rcode, self.version, hi, lo])
    }

    /// Returns the upper eight bits of the extended response code.
    pub fn ext_rcode(self) -> u8 {
        self.ext_rcode
    }

    /// Returns the EDNS version.
    ///
    /// Only EDNS version 0 is currently defined.
    pub fn version(self) -> u8 {
        self.version
    }

    /// Returns the raw EDNS flags.
    pub fn flags(self) -> u16 {
        self.flags
    }

    /// Returns the value of the DNSSEC OK (DO) bit.
    ///
    /// By setting this bit, a resolver indicates that it is interested in
    /// also receiving the DNSSEC-related resource records necessary to
    /// validate an answer. The bit and the related procedures are defined in
    /// [RFC 3225].
    ///
    /// [RFC 3225]: https://tools.ietf.org/html/rfc3225
    pub fn dnssec_ok(self) -> bool {
        self.flags & Self::DNSSEC_OK != 0
    }

    /// Sets the DNSSEC OK (DO) bit to the given value.
    pub fn set_dnssec_ok(&mut self, value: bool) {
        if value {
            self.flags |= Self::DNSSEC_OK
        } else {
            self.flags &= !Self::DNSSEC_OK
        }
    }
}

//============ Testing =======================================================
