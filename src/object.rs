// The object model and its envelope framing.
//
// Serialized envelope format, byte-exact:
//   <kind> <0x20> <payload length as decimal ASCII> <0x00> <payload>
// There is no trailing terminator; the buffer length delimits the payload.

use std::str::from_utf8;

use crate::error::StoreError;

/// A typed, content-addressed unit of storage. The `kind` is an opaque tag
/// (nothing branches on it after storage); the payload is arbitrary bytes.
#[derive(Debug)]
pub struct Object {
    kind: String,
    payload: Vec<u8>,
}

impl Object {
    /// Builds an object, rejecting kinds that cannot round-trip through the
    /// envelope framing (a space or NUL in the kind would shift the header
    /// delimiters).
    pub fn new(kind: &str, payload: Vec<u8>) -> Result<Self, StoreError> {
        if kind.is_empty() || kind.bytes().any(|b| b == b' ' || b == 0) {
            return Err(StoreError::InvalidKind(kind.to_string()));
        }

        Ok(Self {
            kind: kind.to_string(),
            payload,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Serializes the object into its envelope. Pure function of
    /// `(kind, payload)`; the digest is computed over these bytes.
    pub fn encode(&self) -> Vec<u8> {
        let header = format!("{} {}\x00", self.kind, self.payload.len());
        let mut output = Vec::with_capacity(header.len() + self.payload.len());
        output.extend_from_slice(header.as_bytes());
        output.extend_from_slice(&self.payload);
        output
    }

    /// Parses an envelope back into an object.
    pub fn decode(envelope: &[u8]) -> Result<Self, StoreError> {
        let space_idx = envelope
            .iter()
            .position(|&b| b == b' ')
            .ok_or_else(|| StoreError::MalformedEnvelope("missing space in header".into()))?;

        let null_idx = envelope[space_idx..]
            .iter()
            .position(|&b| b == 0)
            .map(|i| i + space_idx)
            .ok_or_else(|| StoreError::MalformedEnvelope("missing null byte in header".into()))?;

        let kind = from_utf8(&envelope[..space_idx])
            .map_err(|_| StoreError::MalformedEnvelope("kind is not valid UTF-8".into()))?;

        let declared_size: usize = from_utf8(&envelope[space_idx + 1..null_idx])
            .ok()
            .and_then(|field| field.parse().ok())
            .ok_or_else(|| StoreError::MalformedEnvelope("bad length field".into()))?;

        let payload = &envelope[null_idx + 1..];
        if declared_size != payload.len() {
            return Err(StoreError::MalformedEnvelope(format!(
                "declared length {} does not match payload length {}",
                declared_size,
                payload.len()
            )));
        }

        // A kind that survives framing can still be empty or carry a NUL
        // ahead of the first space; both are framing violations here.
        Self::new(kind, payload.to_vec())
            .map_err(|_| StoreError::MalformedEnvelope(format!("bad kind {:?}", kind)))
    }
}
