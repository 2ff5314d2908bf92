// zlib transform applied to envelopes before they hit disk.

use std::io::{self, Read};

use flate2::Compression;
use flate2::bufread::{ZlibDecoder, ZlibEncoder};

pub fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(data, Compression::default());
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed)?;
    Ok(compressed)
}

/// Inverse of [`deflate`]. Fails when the input is not a valid zlib stream,
/// which is how a damaged on-disk object is detected.
pub fn inflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::{deflate, inflate};

    #[test]
    fn round_trips() {
        let input = b"blob 11\x00hello world";
        assert_eq!(inflate(&deflate(input).unwrap()).unwrap(), input);
    }

    #[test]
    fn round_trips_empty_input() {
        assert_eq!(inflate(&deflate(b"").unwrap()).unwrap(), b"");
    }

    #[test]
    fn inflate_rejects_garbage() {
        assert!(inflate(b"definitely not zlib").is_err());
    }

    #[test]
    fn inflate_rejects_truncated_stream() {
        let compressed = deflate(b"some object contents").unwrap();
        assert!(inflate(&compressed[..compressed.len() / 2]).is_err());
    }
}
