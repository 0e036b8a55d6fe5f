// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for the canonical wire encoding.
//!
//! The properties under test are the ones the signature scheme depends on:
//! serialization is deterministic, explicitly-present empty fields are
//! emitted, and parsing faithfully round-trips presence.

use bip70_common::{Output, PaymentDetails, PaymentRequest, X509Certificates};

fn sample_details() -> PaymentDetails {
    let mut details = PaymentDetails::new(1509692666);
    details.network = Some("test".to_string());
    details.outputs.push(Output {
        amount: Some(100_000),
        script: Some(vec![0x76, 0xa9, 0x14]),
    });
    details.memo = Some("two coffees".to_string());
    details.payment_url = Some("https://merchant.example/pay".to_string());
    details.merchant_data = Some(b"order-42".to_vec());
    details
}

fn sample_request() -> PaymentRequest {
    PaymentRequest {
        payment_details_version: Some(1),
        pki_type: Some("x509+sha256".to_string()),
        pki_data: Some(vec![1, 2, 3]),
        serialized_payment_details: sample_details().serialize(),
        signature: Some(Vec::new()),
    }
}

#[test]
fn serialization_is_deterministic() {
    let request = sample_request();
    assert_eq!(request.serialize(), request.serialize());

    let details = sample_details();
    assert_eq!(details.serialize(), details.serialize());
}

#[test]
fn empty_signature_field_is_emitted() {
    let mut request = sample_request();
    request.signature = Some(Vec::new());
    let with_empty = request.serialize();

    request.signature = None;
    let without = request.serialize();

    // Field 5, length-delimited => key byte 0x2a, then zero length.
    assert_eq!(with_empty.len(), without.len() + 2);
    assert_eq!(&with_empty[without.len()..], &[0x2a, 0x00]);
}

#[test]
fn signing_bytes_ignore_the_actual_signature_value() {
    let mut request = sample_request();
    request.signature = Some(vec![0xde, 0xad, 0xbe, 0xef]);
    let a = request.signing_bytes();

    request.signature = Some(vec![0x01]);
    let b = request.signing_bytes();

    assert_eq!(a, b);

    // And the signing bytes equal a serialization with an empty signature.
    request.signature = Some(Vec::new());
    assert_eq!(a, request.serialize());
}

#[test]
fn payment_request_round_trips() {
    let request = sample_request();
    let parsed = PaymentRequest::parse(&request.serialize()).unwrap();
    assert_eq!(parsed, request);
}

#[test]
fn payment_details_round_trip() {
    let details = sample_details();
    let parsed = PaymentDetails::parse(&details.serialize()).unwrap();
    assert_eq!(parsed, details);
}

#[test]
fn absent_optional_fields_stay_absent() {
    let details = PaymentDetails::new(7);
    let parsed = PaymentDetails::parse(&details.serialize()).unwrap();
    assert_eq!(parsed.network, None);
    assert_eq!(parsed.expires, None);
    assert_eq!(parsed.memo, None);
    assert!(parsed.outputs.is_empty());
    assert_eq!(parsed.time, 7);
}

#[test]
fn missing_required_time_is_rejected() {
    // A details message with only a memo field (tag 5) and no time.
    let mut bytes = Vec::new();
    bip70_common::wire::put_str(5, "no time", &mut bytes);
    let err = PaymentDetails::parse(&bytes).unwrap_err();
    assert!(err.contains("time"), "unexpected error: {err}");
}

#[test]
fn missing_required_details_is_rejected() {
    let err = PaymentRequest::parse(&[]).unwrap_err();
    assert!(err.contains("serialized_payment_details"), "unexpected error: {err}");
}

#[test]
fn truncated_field_is_rejected() {
    let mut bytes = sample_request().serialize();
    bytes.pop();
    assert!(PaymentRequest::parse(&bytes).is_err());
}

#[test]
fn wrong_wire_type_is_rejected() {
    // Tag 4 (serialized_payment_details) encoded as a varint instead of
    // length-delimited: key = (4 << 3) | 0 = 0x20.
    let bytes = [0x20, 0x01];
    let err = PaymentRequest::parse(&bytes).unwrap_err();
    assert!(err.contains("wire type"), "unexpected error: {err}");
}

#[test]
fn unknown_fields_are_skipped() {
    let mut bytes = sample_request().serialize();
    // Append field 99 as a varint: key = (99 << 3) | 0 = 792 -> varint [0x98, 0x06].
    bytes.extend_from_slice(&[0x98, 0x06, 0x2a]);
    let parsed = PaymentRequest::parse(&bytes).unwrap();
    assert_eq!(parsed, sample_request());
}

#[test]
fn x509_certificates_preserve_order() {
    let mut certs = X509Certificates::new();
    certs.add_certificate(vec![0xaa; 4]);
    certs.add_certificate(vec![0xbb; 8]);
    certs.add_certificate(vec![0xcc; 2]);

    let parsed = X509Certificates::parse(&certs.serialize()).unwrap();
    assert_eq!(parsed, certs);
    assert_eq!(parsed.get_certificate(0), Some(&[0xaa; 4][..]));
    assert_eq!(parsed.get_certificate(2), Some(&[0xcc; 2][..]));
    assert_eq!(parsed.len(), 3);
}

#[test]
fn empty_container_serializes_to_nothing() {
    let certs = X509Certificates::new();
    assert!(certs.serialize().is_empty());
    assert!(X509Certificates::parse(&[]).unwrap().is_empty());
}
