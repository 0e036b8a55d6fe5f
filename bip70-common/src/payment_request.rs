// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! BIP70 `PaymentRequest` message.
//!
//! The request signature covers the serialized request with the signature
//! field set to an empty byte string. `signing_bytes` produces exactly
//! those bytes; both the signer and the validator call it, so a request
//! verifies only if the validator reconstructs the signer's serialization
//! byte for byte.

use prost::encoding::WireType;

use crate::payment_details::PaymentDetails;
use crate::wire::{expect_wire_type, put_bytes, put_str, put_varint, FieldReader};

/// The `pki_type` wire value of an unsigned request.
pub const PKI_TYPE_NONE: &str = "none";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Schema version of the serialized details (tag 1, default 1).
    pub payment_details_version: Option<u32>,
    /// PKI scheme identifier, e.g. `"x509+sha256"` (tag 2, default `"none"`).
    pub pki_type: Option<String>,
    /// Serialized `X509Certificates` container (tag 3).
    pub pki_data: Option<Vec<u8>>,
    /// Serialized `PaymentDetails` (tag 4, required).
    pub serialized_payment_details: Vec<u8>,
    /// Signature over the request serialized with this field empty (tag 5).
    pub signature: Option<Vec<u8>>,
}

impl PaymentRequest {
    /// Canonical serialization: present fields in ascending tag order.
    ///
    /// An explicitly-set empty signature is still emitted, which is what
    /// makes sign-time and verify-time serialization agree.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(version) = self.payment_details_version {
            put_varint(1, u64::from(version), &mut out);
        }
        if let Some(pki_type) = &self.pki_type {
            put_str(2, pki_type, &mut out);
        }
        if let Some(pki_data) = &self.pki_data {
            put_bytes(3, pki_data, &mut out);
        }
        put_bytes(4, &self.serialized_payment_details, &mut out);
        if let Some(signature) = &self.signature {
            put_bytes(5, signature, &mut out);
        }
        out
    }

    /// The bytes the signature is computed over: this request serialized
    /// with the signature field set to the empty byte string.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut unsigned = self.clone();
        unsigned.signature = Some(Vec::new());
        unsigned.serialize()
    }

    pub fn parse(input: &[u8]) -> Result<Self, String> {
        let mut reader = FieldReader::new(input);
        let mut request = PaymentRequest::default();
        let mut saw_details = false;

        while let Some((tag, wire_type)) = reader.next_key()? {
            match tag {
                1 => {
                    expect_wire_type(wire_type, WireType::Varint, "PaymentRequest.payment_details_version")?;
                    let v = reader.read_varint()?;
                    let v = u32::try_from(v)
                        .map_err(|_| "PaymentRequest.payment_details_version out of range".to_string())?;
                    request.payment_details_version = Some(v);
                }
                2 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentRequest.pki_type")?;
                    request.pki_type = Some(reader.read_string()?);
                }
                3 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentRequest.pki_data")?;
                    request.pki_data = Some(reader.read_bytes()?);
                }
                4 => {
                    expect_wire_type(
                        wire_type,
                        WireType::LengthDelimited,
                        "PaymentRequest.serialized_payment_details",
                    )?;
                    request.serialized_payment_details = reader.read_bytes()?;
                    saw_details = true;
                }
                5 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentRequest.signature")?;
                    request.signature = Some(reader.read_bytes()?);
                }
                _ => reader.skip(wire_type)?,
            }
        }

        if !saw_details {
            return Err("PaymentRequest.serialized_payment_details is required".to_string());
        }

        Ok(request)
    }

    /// The effective `pki_type`, applying the schema default.
    pub fn pki_type_str(&self) -> &str {
        self.pki_type.as_deref().unwrap_or(PKI_TYPE_NONE)
    }

    /// Decode the embedded payment details.
    pub fn details(&self) -> Result<PaymentDetails, String> {
        PaymentDetails::parse(&self.serialized_payment_details)
    }
}
