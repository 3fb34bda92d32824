//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. Questions carry the type
    /// of record information that is requested. A few additional types,
    /// called query types, are defined as well and can only be used in
    /// questions. This type represents both these types.
    ///
    /// Only the types commonly seen by an encoder have named values here.
    /// Any other value can still be used via [`Rtype::from_int`]. The
    /// currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// OPT.
    ///
    /// The pseudo record type carrying EDNS data. See RFC 6891.
    (OPT => 41, "OPT")

    /// Delegation signer.
    ///
    /// See RFC 4034.
    (DS => 43, "DS")

    /// RRSIG.
    ///
    /// See RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// DNSKEY.
    ///
    /// See RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// General-purpose service binding.
    (SVCB => 64, "SVCB")

    /// Service binding type for use with HTTPS.
    (HTTPS => 65, "HTTPS")

    /// A request for all records the server/cache has available.
    (ANY => 255, "ANY")

    /// Certification Authority Restriction.
    (CAA => 257, "CAA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16, "unknown record type");

//============ Tests =========================================================
