// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! BIP70 `X509Certificates` container.
//!
//! An ordered sequence of DER certificates: index 0 is the end-entity
//! certificate, the rest are intermediates in chain order (closest to the
//! leaf first). Indices are always contiguous from 0, so a plain vector
//! models the container exactly.

use prost::encoding::WireType;

use crate::wire::{expect_wire_type, put_bytes, FieldReader};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct X509Certificates {
    /// DER-encoded certificates (tag 1, repeated).
    pub certificate: Vec<Vec<u8>>,
}

impl X509Certificates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_certificate(&mut self, der: Vec<u8>) {
        self.certificate.push(der);
    }

    pub fn get_certificate(&self, index: usize) -> Option<&[u8]> {
        self.certificate.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.certificate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificate.is_empty()
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for der in &self.certificate {
            put_bytes(1, der, &mut out);
        }
        out
    }

    pub fn parse(input: &[u8]) -> Result<Self, String> {
        let mut reader = FieldReader::new(input);
        let mut certs = X509Certificates::new();

        while let Some((tag, wire_type)) = reader.next_key()? {
            match tag {
                1 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "X509Certificates.certificate")?;
                    certs.certificate.push(reader.read_bytes()?);
                }
                _ => reader.skip(wire_type)?,
            }
        }

        Ok(certs)
    }
}
