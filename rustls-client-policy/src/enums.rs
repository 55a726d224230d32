#![allow(non_camel_case_types)]

enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ProtocolVersion {
        SSLv2 => 0x0002,
        SSLv3 => 0x0300,
        TLSv1_0 => 0x0301,
        TLSv1_1 => 0x0302,
        TLSv1_2 => 0x0303,
        TLSv1_3 => 0x0304,
        DTLSv1_0 => 0xFEFF,
        DTLSv1_2 => 0xFEFD,
        DTLSv1_3 => 0xFEFC,
    }
}

impl ProtocolVersion {
    /// The major byte of the wire encoding.  SSLv3 and every TLS version
    /// share `0x03`; DTLS versions use `0xfe`.
    pub fn major(self) -> u8 {
        self.to_array()[0]
    }

    /// The minor byte of the wire encoding.
    pub fn minor(self) -> u8 {
        self.to_array()[1]
    }

    /// Returns true for the DTLS family of versions.
    pub fn is_dtls(self) -> bool {
        self.major() == 0xfe
    }

    /// Returns true if `self` is the same version as `other`, or one
    /// that predates it.
    ///
    /// Only versions of the same family (same major byte) are ordered:
    /// comparing, say, a TLS version with a DTLS version is always false.
    /// DTLS minor numbers count downwards, so the comparison is inverted
    /// for them.
    pub fn is_equal_or_earlier_than(self, other: Self) -> bool {
        if self.major() != other.major() {
            return false;
        }

        match self.is_dtls() {
            true => self.minor() >= other.minor(),
            false => self.minor() <= other.minor(),
        }
    }

    /// Returns true if `self` strictly predates `other`.
    pub fn is_earlier_than(self, other: Self) -> bool {
        self != other && self.is_equal_or_earlier_than(other)
    }
}

enum_builder! {
    /// The `CipherSuite` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// The negotiation policy records these opaquely; the names are here
    /// for diagnostics.
    #[repr(u16)]
    pub enum CipherSuite {
        TLS_NULL_WITH_NULL_NULL => 0x0000,
        TLS_RSA_WITH_NULL_SHA => 0x0002,
        TLS_RSA_WITH_RC4_128_SHA => 0x0005,
        TLS_RSA_WITH_3DES_EDE_CBC_SHA => 0x000a,
        TLS_RSA_WITH_AES_128_CBC_SHA => 0x002f,
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA => 0x0033,
        TLS_RSA_WITH_AES_256_CBC_SHA => 0x0035,
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA => 0x0039,
        TLS_RSA_WITH_AES_128_CBC_SHA256 => 0x003c,
        TLS_RSA_WITH_AES_128_GCM_SHA256 => 0x009c,
        TLS_RSA_WITH_AES_256_GCM_SHA384 => 0x009d,
        TLS_EMPTY_RENEGOTIATION_INFO_SCSV => 0x00ff,
        TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA => 0xc009,
        TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA => 0xc00a,
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA => 0xc013,
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA => 0xc014,
        TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 => 0xc02b,
        TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 => 0xc02c,
        TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 => 0xc02f,
        TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 => 0xc030,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgs::codec::Codec;

    const TLS_FAMILY: &[ProtocolVersion] = &[
        ProtocolVersion::SSLv3,
        ProtocolVersion::TLSv1_0,
        ProtocolVersion::TLSv1_1,
        ProtocolVersion::TLSv1_2,
        ProtocolVersion::TLSv1_3,
    ];

    #[test]
    fn tls_versions_are_ordered_ascending() {
        for (i, earlier) in TLS_FAMILY.iter().enumerate() {
            for (j, later) in TLS_FAMILY.iter().enumerate() {
                assert_eq!(
                    earlier.is_equal_or_earlier_than(*later),
                    i <= j,
                    "{earlier:?} vs {later:?}"
                );
                assert_eq!(earlier.is_earlier_than(*later), i < j);
            }
        }
    }

    #[test]
    fn dtls_versions_are_ordered_descending() {
        assert!(ProtocolVersion::DTLSv1_0.is_equal_or_earlier_than(ProtocolVersion::DTLSv1_2));
        assert!(ProtocolVersion::DTLSv1_2.is_equal_or_earlier_than(ProtocolVersion::DTLSv1_3));
        assert!(!ProtocolVersion::DTLSv1_3.is_equal_or_earlier_than(ProtocolVersion::DTLSv1_0));
        assert!(ProtocolVersion::DTLSv1_2.is_equal_or_earlier_than(ProtocolVersion::DTLSv1_2));
    }

    #[test]
    fn families_are_not_ordered() {
        assert!(!ProtocolVersion::TLSv1_0.is_equal_or_earlier_than(ProtocolVersion::DTLSv1_2));
        assert!(!ProtocolVersion::DTLSv1_0.is_equal_or_earlier_than(ProtocolVersion::TLSv1_2));
        assert!(!ProtocolVersion::SSLv2.is_equal_or_earlier_than(ProtocolVersion::TLSv1_0));
    }

    #[test]
    fn unknown_versions_order_by_wire_value() {
        let future = ProtocolVersion::Unknown(0x0305);
        assert!(ProtocolVersion::TLSv1_3.is_earlier_than(future));
        assert!(!future.is_equal_or_earlier_than(ProtocolVersion::TLSv1_2));
    }

    #[test]
    fn version_bytes() {
        assert_eq!(ProtocolVersion::TLSv1_1.major(), 3);
        assert_eq!(ProtocolVersion::TLSv1_1.minor(), 2);
        assert!(ProtocolVersion::DTLSv1_0.is_dtls());
        assert!(!ProtocolVersion::TLSv1_2.is_dtls());
        assert_eq!(
            ProtocolVersion::read_bytes(&[0x03, 0x01]).unwrap(),
            ProtocolVersion::TLSv1_0
        );
    }

    #[test]
    fn cipher_suite_debug() {
        assert_eq!(
            format!("{:?}", CipherSuite::from(0xc02fu16)),
            "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"
        );
        assert_eq!(format!("{:?}", CipherSuite::from(0x1301u16)), "CipherSuite(0x1301)");
    }
}
