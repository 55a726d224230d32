#![allow(clippy::upper_case_acronyms)]

enum_builder! {
    /// The `Compression` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum Compression {
        Null => 0x00,
        Deflate => 0x01,
        LSZ => 0x40,
    }
}

enum_builder! {
    /// The `ExtensionType` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ExtensionType {
        ServerName => 0x0000,
        MaxFragmentLength => 0x0001,
        ClientCertificateUrl => 0x0002,
        TrustedCAKeys => 0x0003,
        TruncatedHMAC => 0x0004,
        StatusRequest => 0x0005,
        UserMapping => 0x0006,
        ClientAuthz => 0x0007,
        ServerAuthz => 0x0008,
        CertificateType => 0x0009,
        EllipticCurves => 0x000a,
        ECPointFormats => 0x000b,
        SRP => 0x000c,
        SignatureAlgorithms => 0x000d,
        UseSRTP => 0x000e,
        Heartbeat => 0x000f,
        ALProtocolNegotiation => 0x0010,
        SCT => 0x0012,
        Padding => 0x0015,
        EncryptThenMac => 0x0016,
        ExtendedMasterSecret => 0x0017,
        SessionTicket => 0x0023,
        NextProtocolNegotiation => 0x3374,
        RenegotiationInfo => 0xff01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgs::codec::Codec;

    #[test]
    fn compression_identifiers() {
        assert_eq!(u8::from(Compression::Null), 0);
        assert_eq!(Compression::from(0x01u8), Compression::Deflate);
        assert_eq!(Compression::from(0x99u8), Compression::Unknown(0x99));
        assert_eq!(format!("{:?}", Compression::Unknown(0x99)), "Compression(0x99)");
        assert_eq!(Compression::Null.as_str(), Some("Null"));
        assert_eq!(Compression::Unknown(7).as_str(), None);
    }

    #[test]
    fn extension_type_reads_unknown_values() {
        let ext = ExtensionType::read_bytes(&[0xfe, 0xed]).unwrap();
        assert_eq!(ext, ExtensionType::Unknown(0xfeed));
        assert_eq!(ext.to_array(), [0xfe, 0xed]);
        assert_eq!(
            ExtensionType::RenegotiationInfo.get_encoding(),
            vec![0xff, 0x01]
        );
    }
}
