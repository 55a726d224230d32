//! Record-layer compression transforms.

use std::fmt::Debug;

use crate::msgs::enums::Compression;

/// A record-layer compression transform, resolved from the negotiated
/// compression method once the handshake reaches change-cipher-spec.
pub trait CompressionTransform: Debug + Send + Sync {
    /// Compress the plaintext of one record.
    ///
    /// `input` is consumed so an implementation may work in place.
    fn compress(&self, input: Vec<u8>) -> Result<Vec<u8>, CompressionFailed>;

    /// Decompress the payload of one record.
    ///
    /// `Err(DecompressionFailed)` should be returned if `input` is in
    /// any way malformed.
    fn decompress(&self, input: Vec<u8>) -> Result<Vec<u8>, DecompressionFailed>;

    /// Which compression method this transform implements.
    fn method(&self) -> Compression;
}

/// The transform for the `null` compression method: records pass
/// through unchanged in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCompression;

impl CompressionTransform for NullCompression {
    fn compress(&self, input: Vec<u8>) -> Result<Vec<u8>, CompressionFailed> {
        Ok(input)
    }

    fn decompress(&self, input: Vec<u8>) -> Result<Vec<u8>, DecompressionFailed> {
        Ok(input)
    }

    fn method(&self) -> Compression {
        Compression::Null
    }
}

/// A content-less error for when `CompressionTransform::compress` fails.
#[derive(Debug)]
pub struct CompressionFailed;

/// A content-less error for when `CompressionTransform::decompress` fails.
#[derive(Debug)]
pub struct DecompressionFailed;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_compression_is_identity() {
        let inputs: [&[u8]; 4] = [b"", b"\x00", b"hello world", &[0xffu8; 16384]];
        for input in inputs {
            let compressed = NullCompression
                .compress(input.to_vec())
                .unwrap();
            assert_eq!(compressed, input);
            let decompressed = NullCompression
                .decompress(compressed)
                .unwrap();
            assert_eq!(decompressed, input);
        }
    }

    #[test]
    fn null_compression_method() {
        assert_eq!(NullCompression.method(), Compression::Null);
    }
}
