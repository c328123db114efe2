/*
[INPUT]:  Request fields and raw reply bodies
[OUTPUT]: Request envelopes and JSON trees of bank replies
[POS]:    XML layer - wire format in both directions
[UPDATE]: When the request layout or reply conversion rules change
*/

pub mod envelope;
pub mod parse;

pub use envelope::{balance_payload, envelope, statement_payload};
pub use parse::{XmlError, to_json, to_json_string};
