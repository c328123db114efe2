/*
[INPUT]:  Merchant id, signature, card, country and statement period
[OUTPUT]: Payload fragments and the signed <request> document
[POS]:    XML layer - request serialization
[UPDATE]: When the bank changes the request layout
*/

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::types::StatementPeriod;

/// Server-side wait hint, in seconds
const WAIT_SECONDS: &str = "90";

/// Build the `<data>` fragment for a balance inquiry
pub fn balance_payload(card: &str, country: &str) -> io::Result<String> {
    payment_payload(&[("cardnum", card), ("country", country)])
}

/// Build the `<data>` fragment for a statement request
pub fn statement_payload(
    card: &str,
    country: &str,
    period: &StatementPeriod,
) -> io::Result<String> {
    let start = period.start_formatted();
    let end = period.end_formatted();
    payment_payload(&[
        ("sd", start.as_str()),
        ("ed", end.as_str()),
        ("cardnum", card),
        ("country", country),
    ])
}

/// Wrap a payload fragment into the signed request document
///
/// The payload is embedded byte for byte, so the signature computed over it
/// matches what the bank sees inside `<data>`.
pub fn envelope(merchant_id: &str, signature: &str, payload: &str) -> io::Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element("request")
        .with_attribute(("version", "1.0"))
        .write_inner_content(|writer| {
            writer
                .create_element("merchant")
                .write_inner_content(|writer| {
                    writer
                        .create_element("id")
                        .write_text_content(BytesText::new(merchant_id))?;
                    writer
                        .create_element("signature")
                        .write_text_content(BytesText::new(signature))?;
                    Ok(())
                })?;
            writer
                .create_element("data")
                .write_text_content(BytesText::from_escaped(payload))?;
            Ok(())
        })?;

    into_string(writer)
}

fn payment_payload(props: &[(&str, &str)]) -> io::Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer
        .create_element("oper")
        .write_text_content(BytesText::new("cmt"))?;
    writer
        .create_element("wait")
        .write_text_content(BytesText::new(WAIT_SECONDS))?;
    writer
        .create_element("test")
        .write_text_content(BytesText::new("0"))?;
    writer
        .create_element("payment")
        .with_attribute(("id", ""))
        .write_inner_content(|writer| {
            for (name, value) in props {
                writer
                    .create_element("prop")
                    .with_attribute(("name", *name))
                    .with_attribute(("value", *value))
                    .write_empty()?;
            }
            Ok(())
        })?;

    into_string(writer)
}

fn into_string(writer: Writer<Vec<u8>>) -> io::Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
