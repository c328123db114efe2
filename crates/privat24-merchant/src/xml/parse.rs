/*
[INPUT]:  Raw XML reply bodies from the bank
[OUTPUT]: Generic JSON trees (xml2js layout)
[POS]:    XML layer - reply conversion
[UPDATE]: When the conversion rules for attributes, text or repeats change
*/

//! XML to JSON conversion.
//!
//! Layout rules:
//!
//! * the root element becomes a single-key object `{"root": ...}`
//! * child elements are grouped by tag name into arrays, in document order
//! * attributes live under `"$"`
//! * an element without attributes or children collapses to its text,
//!   otherwise non-blank text is kept under `"_"`
//!
//! ```text
//! <response><data><ok/></data></response>
//! => {"response":{"data":[{"ok":[""]}]}}
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key holding element attributes
pub const ATTR_KEY: &str = "$";
/// Key holding element text when it cannot collapse to a string
pub const TEXT_KEY: &str = "_";

/// Errors produced while converting a reply body
#[derive(Error, Debug)]
pub enum XmlError {
    /// Tokenizer rejected the document
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    /// Input ended while an element was still open
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// Document has no root element
    #[error("document has no root element")]
    NoRoot,

    /// Text or a second element appeared outside the root
    #[error("content outside the root element")]
    TrailingContent,
}

/// Convert an XML document into a JSON tree
pub fn to_json(xml: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::TrailingContent);
                }
                stack.push(Node::open(&start)?);
            }
            Event::Empty(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::TrailingContent);
                }
                let node = Node::open(&start)?;
                attach(&mut stack, &mut root, node);
            }
            Event::End(_) => {
                // Tag names are matched by the reader.
                if let Some(node) = stack.pop() {
                    attach(&mut stack, &mut root, node);
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                match stack.last_mut() {
                    Some(node) => node.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(XmlError::TrailingContent),
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                match stack.last_mut() {
                    Some(node) => node.text.push_str(&String::from_utf8_lossy(&data)),
                    None => return Err(XmlError::TrailingContent),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed(open.name));
    }
    root.ok_or(XmlError::NoRoot)
}

/// Convert an XML document into its JSON string form
pub fn to_json_string(xml: &str) -> Result<String, XmlError> {
    to_json(xml).map(|value| value.to_string())
}

fn attach(stack: &mut [Node], root: &mut Option<Value>, node: Node) {
    let name = node.name.clone();
    let value = node.close();
    match stack.last_mut() {
        Some(parent) => parent.push_child(name, value),
        None => {
            let mut object = Map::new();
            object.insert(name, value);
            *root = Some(Value::Object(object));
        }
    }
}

struct Node {
    name: String,
    attributes: Map<String, Value>,
    children: Map<String, Value>,
    text: String,
}

impl Node {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut attributes = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.insert(key, Value::String(value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            children: Map::new(),
            text: String::new(),
        })
    }

    fn push_child(&mut self, name: String, value: Value) {
        let slot = self
            .children
            .entry(name)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = slot {
            items.push(value);
        }
    }

    fn close(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }

        let mut object = Map::new();
        if !self.text.trim().is_empty() {
            object.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }
        if !self.attributes.is_empty() {
            object.insert(ATTR_KEY.to_string(), Value::Object(self.attributes));
        }
        object.extend(self.children);
        Value::Object(object)
    }
}
