// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Canonical protobuf field encoding.
//!
//! This wraps the low-level `prost::encoding` primitives with a
//! non-discarding field writer: a field that is present on a message is
//! always emitted, in ascending tag order, even when its value is empty or
//! equal to the schema default. Ordinary protobuf encoders are free to omit
//! default values; here an explicitly-set empty `signature` field must still
//! appear on the wire, because the signature itself is computed over these
//! bytes.

use bytes::{Buf, BufMut};
use prost::encoding::{decode_key, decode_varint, encode_key, encode_varint, WireType};

/// Emit a varint field (key + value).
pub fn put_varint(tag: u32, value: u64, out: &mut Vec<u8>) {
    encode_key(tag, WireType::Varint, out);
    encode_varint(value, out);
}

/// Emit a length-delimited field (key + length + raw bytes).
pub fn put_bytes(tag: u32, value: &[u8], out: &mut Vec<u8>) {
    encode_key(tag, WireType::LengthDelimited, out);
    encode_varint(value.len() as u64, out);
    out.put_slice(value);
}

/// Emit a string field as UTF-8 bytes.
pub fn put_str(tag: u32, value: &str, out: &mut Vec<u8>) {
    put_bytes(tag, value.as_bytes(), out);
}

/// Cursor over the fields of one serialized message.
///
/// Parsing is tolerant of field order and unknown tags (callers `skip`
/// what they do not recognize), while serialization is strictly canonical.
pub struct FieldReader<'a> {
    buf: &'a [u8],
}

impl<'a> FieldReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Read the next field key. Returns `None` at end of input.
    pub fn next_key(&mut self) -> Result<Option<(u32, WireType)>, String> {
        if self.buf.is_empty() {
            return Ok(None);
        }
        let key = decode_key(&mut self.buf).map_err(|e| format!("invalid field key: {e}"))?;
        Ok(Some(key))
    }

    pub fn read_varint(&mut self) -> Result<u64, String> {
        decode_varint(&mut self.buf).map_err(|e| format!("invalid varint: {e}"))
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>, String> {
        let len = self.read_varint()? as usize;
        if self.buf.remaining() < len {
            return Err("length-delimited field overruns the input".to_string());
        }
        let out = self.buf[..len].to_vec();
        self.buf.advance(len);
        Ok(out)
    }

    pub fn read_string(&mut self) -> Result<String, String> {
        String::from_utf8(self.read_bytes()?).map_err(|_| "string field is not valid UTF-8".to_string())
    }

    /// Skip over a field of the given wire type.
    pub fn skip(&mut self, wire_type: WireType) -> Result<(), String> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::LengthDelimited => {
                self.read_bytes()?;
            }
            WireType::ThirtyTwoBit => {
                if self.buf.remaining() < 4 {
                    return Err("truncated 32-bit field".to_string());
                }
                self.buf.advance(4);
            }
            WireType::SixtyFourBit => {
                if self.buf.remaining() < 8 {
                    return Err("truncated 64-bit field".to_string());
                }
                self.buf.advance(8);
            }
            WireType::StartGroup | WireType::EndGroup => {
                return Err("group wire types are not supported".to_string());
            }
        }
        Ok(())
    }
}

/// Reject a field whose wire type does not match the schema.
pub fn expect_wire_type(got: WireType, want: WireType, field: &str) -> Result<(), String> {
    if got != want {
        return Err(format!("field {field} has wire type {got:?}, expected {want:?}"));
    }
    Ok(())
}
