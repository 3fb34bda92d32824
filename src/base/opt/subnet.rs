//! Addresses of the EDNS client subnet option.
//!
//! The client subnet option of [RFC 7871] carries a network prefix rather
//! than a full address. Only the octets covered by the SOURCE PREFIX-LENGTH
//! are transmitted and the bits of the last octet beyond the prefix must be
//! zero:
//!
//! | ADDRESS, variable number of octets, contains either an IPv4 or
//! | IPv6 address, depending on FAMILY, which MUST be truncated to
//! | the number of bits indicated by the SOURCE PREFIX-LENGTH field,
//! | padding with 0 bits to pad to the end of the last octet needed.
//!
//! [RFC 7871]: https://tools.ietf.org/html/rfc7871#section-6

use super::super::iana::AddressFamily;
use alloc::vec::Vec;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use octseq::builder::OctetsBuilder;

//------------ PREFIX_MASKS --------------------------------------------------

/// Masks retaining the top bits of an octet.
///
/// The entry at index `n` keeps the `n` most significant bits of an octet
/// and clears the remaining `8 - n` bits: `0x00`, `0x80`, `0xC0`, `0xE0`,
/// `0xF0`, `0xF8`, `0xFC`, `0xFE`, `0xFF`. Each entry is the low octet of
/// `0xFF00 >> n`.
pub const PREFIX_MASKS: [u8; 9] = {
    let mut masks = [0u8; 9];
    let mut n = 0;
    while n < masks.len() {
        masks[n] = (0xFF00u16 >> n) as u8;
        n += 1;
    }
    masks
};

/// Returns the number of octets needed for a prefix of `bits` bits.
pub const fn prefix_bytes(bits: usize) -> usize {
    (bits + 7) / 8
}

//------------ SubnetAddr ----------------------------------------------------

/// The address of a client subnet option.
///
/// This is the raw octets of an address together with the family they
/// belong to. Values are normally created from a [`IpAddr`] but any family
/// and octets can be combined via [`SubnetAddr::new`]. The encoder only
/// accepts IPv4 and IPv6.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubnetAddr {
    family: AddressFamily,
    octets: Vec<u8>,
}

impl SubnetAddr {
    /// Creates an address from a family and the address octets.
    pub fn new(family: AddressFamily, octets: impl Into<Vec<u8>>) -> Self {
        SubnetAddr { family, octets: octets.into() }
    }

    /// Returns the loopback address of the given family.
    ///
    /// Returns `None` if the family is neither IPv4 nor IPv6.
    pub fn loopback(family: AddressFamily) -> Option<Self> {
        match family {
            AddressFamily::IPV4 => Some(Ipv4Addr::LOCALHOST.into()),
            AddressFamily::IPV6 => Some(Ipv6Addr::LOCALHOST.into()),
            _ => None,
        }
    }

    /// Returns the address family.
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Returns the address octets.
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    /// Returns the number of bits in the address.
    pub fn address_bits(&self) -> usize {
        self.octets.len() * 8
    }

    /// Returns the address as an IP address if it is one.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.family {
            AddressFamily::IPV4 => {
                <[u8; 4]>::try_from(self.octets.as_slice()).ok().map(Into::into)
            }
            AddressFamily::IPV6 => {
                <[u8; 16]>::try_from(self.octets.as_slice())
                    .ok()
                    .map(Into::into)
            }
            _ => None,
        }
    }

    /// Appends the octets covered by a prefix of `prefix_len` bits.
    ///
    /// Exactly `prefix_bytes(prefix_len)` octets are appended. Bits of the
    /// last octet beyond the prefix are cleared.
    ///
    /// # Panics
    ///
    /// The method panics if `prefix_len` is larger than the number of bits
    /// in the address.
    pub fn compose_prefix<Target: OctetsBuilder + ?Sized>(
        &self,
        prefix_len: usize,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        let len = prefix_bytes(prefix_len);
        let leftover = prefix_len % 8;
        if leftover == 0 {
            return target.append_slice(&self.octets[..len]);
        }
        target.append_slice(&self.octets[..len - 1])?;
        target.append_slice(&[self.octets[len - 1] & PREFIX_MASKS[leftover]])
    }
}

//--- From

impl From<IpAddr> for SubnetAddr {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => addr.into(),
            IpAddr::V6(addr) => addr.into(),
        }
    }
}

impl From<Ipv4Addr> for SubnetAddr {
    fn from(addr: Ipv4Addr) -> Self {
        SubnetAddr::new(AddressFamily::IPV4, addr.octets())
    }
}

impl From<Ipv6Addr> for SubnetAddr {
    fn from(addr: Ipv6Addr) -> Self {
        SubnetAddr::new(AddressFamily::IPV6, addr.octets())
    }
}

//============ Testing =======================================================

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn masks() {
        assert_eq!(
            PREFIX_MASKS,
            [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE, 0xFF]
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(8, 1)]
    #[case(9, 2)]
    #[case(24, 3)]
    #[case(32, 4)]
    #[case(127, 16)]
    #[case(128, 16)]
    fn prefix_len(#[case] bits: usize, #[case] bytes: usize) {
        assert_eq!(prefix_bytes(bits), bytes);
    }

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[0x80])]
    #[case(7, &[0xFE])]
    #[case(9, &[0xFF, 0x80])]
    #[case(20, &[0xFF, 0xFF, 0xF0])]
    #[case(24, &[0xFF, 0xFF, 0xFF])]
    #[case(31, &[0xFF, 0xFF, 0xFF, 0xFE])]
    #[case(32, &[0xFF, 0xFF, 0xFF, 0xFF])]
    fn prefix_is_masked(#[case] prefix_len: usize, #[case] expected: &[u8]) {
        let addr = SubnetAddr::from(Ipv4Addr::new(255, 255, 255, 255));
        let mut buf = Vec::new();
        addr.compose_prefix(prefix_len, &mut buf).unwrap();
        assert_eq!(buf, expected);
    }

    #[test]
    fn ipv6_prefix() {
        let addr = SubnetAddr::from(
            "2001:db8:ffff::1".parse::<Ipv6Addr>().unwrap()
        );
        let mut buf = Vec::new();
        addr.compose_prefix(36, &mut buf).unwrap();
        assert_eq!(buf, [0x20, 0x01, 0x0d, 0xb8, 0xf0]);
    }

    #[test]
    fn conversions() {
        let ip: IpAddr = "192.0.2.1".parse().unwrap();
        let addr = SubnetAddr::from(ip);
        assert_eq!(addr.family(), AddressFamily::IPV4);
        assert_eq!(addr.octets(), &[192, 0, 2, 1]);
        assert_eq!(addr.address_bits(), 32);
        assert_eq!(addr.ip_addr(), Some(ip));

        let odd = SubnetAddr::new(AddressFamily::IPV4, vec![1, 2]);
        assert_eq!(odd.ip_addr(), None);
        assert_eq!(odd.address_bits(), 16);
    }

    #[test]
    fn loopback() {
        assert_eq!(
            SubnetAddr::loopback(AddressFamily::IPV4).unwrap().ip_addr(),
            Some(IpAddr::from(Ipv4Addr::LOCALHOST))
        );
        assert_eq!(
            SubnetAddr::loopback(AddressFamily::IPV6).unwrap().octets().len(),
            16
        );
        assert!(SubnetAddr::loopback(AddressFamily::from_int(3)).is_none());
    }
}
