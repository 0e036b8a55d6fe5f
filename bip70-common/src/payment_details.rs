// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! BIP70 `PaymentDetails` and `Output` messages.
//!
//! Field tags and types follow the published BIP70 protobuf schema.
//! Presence is tracked with `Option` so that serialization can emit exactly
//! the fields the merchant set, no more and no less.

use prost::encoding::WireType;

use crate::wire::{expect_wire_type, put_bytes, put_str, put_varint, FieldReader};

/// A single requested transaction output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// Amount in satoshis (tag 1).
    pub amount: Option<u64>,
    /// Output script (tag 2).
    pub script: Option<Vec<u8>>,
}

impl Output {
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(amount) = self.amount {
            put_varint(1, amount, &mut out);
        }
        if let Some(script) = &self.script {
            put_bytes(2, script, &mut out);
        }
        out
    }

    pub fn parse(input: &[u8]) -> Result<Self, String> {
        let mut reader = FieldReader::new(input);
        let mut output = Output::default();

        while let Some((tag, wire_type)) = reader.next_key()? {
            match tag {
                1 => {
                    expect_wire_type(wire_type, WireType::Varint, "Output.amount")?;
                    output.amount = Some(reader.read_varint()?);
                }
                2 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "Output.script")?;
                    output.script = Some(reader.read_bytes()?);
                }
                _ => reader.skip(wire_type)?,
            }
        }

        Ok(output)
    }
}

/// Merchant payment instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    /// Network identifier, e.g. `"main"` or `"test"` (tag 1).
    pub network: Option<String>,
    /// Requested outputs (tag 2).
    pub outputs: Vec<Output>,
    /// Unix timestamp the request was created (tag 3, required).
    pub time: u64,
    /// Unix timestamp after which the request is invalid (tag 4).
    pub expires: Option<u64>,
    /// Human-readable memo (tag 5).
    pub memo: Option<String>,
    /// URL where a Payment message may be sent (tag 6).
    pub payment_url: Option<String>,
    /// Opaque merchant data echoed back in the Payment message (tag 7).
    pub merchant_data: Option<Vec<u8>>,
}

impl PaymentDetails {
    pub fn new(time: u64) -> Self {
        Self {
            network: None,
            outputs: Vec::new(),
            time,
            expires: None,
            memo: None,
            payment_url: None,
            merchant_data: None,
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(network) = &self.network {
            put_str(1, network, &mut out);
        }
        for output in &self.outputs {
            put_bytes(2, &output.serialize(), &mut out);
        }
        put_varint(3, self.time, &mut out);
        if let Some(expires) = self.expires {
            put_varint(4, expires, &mut out);
        }
        if let Some(memo) = &self.memo {
            put_str(5, memo, &mut out);
        }
        if let Some(payment_url) = &self.payment_url {
            put_str(6, payment_url, &mut out);
        }
        if let Some(merchant_data) = &self.merchant_data {
            put_bytes(7, merchant_data, &mut out);
        }
        out
    }

    pub fn parse(input: &[u8]) -> Result<Self, String> {
        let mut reader = FieldReader::new(input);
        let mut network = None;
        let mut outputs = Vec::new();
        let mut time = None;
        let mut expires = None;
        let mut memo = None;
        let mut payment_url = None;
        let mut merchant_data = None;

        while let Some((tag, wire_type)) = reader.next_key()? {
            match tag {
                1 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentDetails.network")?;
                    network = Some(reader.read_string()?);
                }
                2 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentDetails.outputs")?;
                    outputs.push(Output::parse(&reader.read_bytes()?)?);
                }
                3 => {
                    expect_wire_type(wire_type, WireType::Varint, "PaymentDetails.time")?;
                    time = Some(reader.read_varint()?);
                }
                4 => {
                    expect_wire_type(wire_type, WireType::Varint, "PaymentDetails.expires")?;
                    expires = Some(reader.read_varint()?);
                }
                5 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentDetails.memo")?;
                    memo = Some(reader.read_string()?);
                }
                6 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentDetails.payment_url")?;
                    payment_url = Some(reader.read_string()?);
                }
                7 => {
                    expect_wire_type(wire_type, WireType::LengthDelimited, "PaymentDetails.merchant_data")?;
                    merchant_data = Some(reader.read_bytes()?);
                }
                _ => reader.skip(wire_type)?,
            }
        }

        let time = time.ok_or_else(|| "PaymentDetails.time is required".to_string())?;

        Ok(Self {
            network,
            outputs,
            time,
            expires,
            memo,
            payment_url,
            merchant_data,
        })
    }
}
