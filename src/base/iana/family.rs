//! Address family numbers.

//------------ AddressFamily -------------------------------------------------

int_enum! {
    /// Address family numbers.
    ///
    /// The FAMILY field of the EDNS client subnet option identifies the kind
    /// of address carried in the option using the values of the
    /// [IANA address family numbers] registry. Only IPv4 and IPv6 are
    /// permitted in the option.
    ///
    /// [IANA address family numbers]: http://www.iana.org/assignments/address-family-numbers/address-family-numbers.xhtml
    =>
    AddressFamily, u16;

    /// IP version 4.
    (IPV4 => 1, "IPv4")

    /// IP version 6.
    (IPV6 => 2, "IPv6")
}

int_enum_str_with_decimal!(AddressFamily, u16, "unknown address family");

impl AddressFamily {
    /// Returns the number of bits in an address of this family.
    ///
    /// Returns `None` for families other than IPv4 and IPv6.
    #[must_use]
    pub const fn address_bits(self) -> Option<u16> {
        match self {
            AddressFamily::IPV4 => Some(32),
            AddressFamily::IPV6 => Some(128),
            _ => None,
        }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::AddressFamily;
    use core::str::FromStr;

    #[test]
    fn address_bits() {
        assert_eq!(AddressFamily::IPV4.address_bits(), Some(32));
        assert_eq!(AddressFamily::IPV6.address_bits(), Some(128));
        assert_eq!(AddressFamily::from_int(16).address_bits(), None);
    }

    #[test]
    fn from_str() {
        assert_eq!(
            AddressFamily::from_str("ipv6").unwrap(), AddressFamily::IPV6
        );
        assert_eq!(AddressFamily::from_str("1").unwrap(), AddressFamily::IPV4);
        assert!(AddressFamily::from_str("ip").is_err());
    }
}
