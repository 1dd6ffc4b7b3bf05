use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, thiserror::Error)]
pub enum XmlRpcError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("XML-RPC fault {code}: {message}")]
    Fault { code: i64, message: String },

    #[error("malformed XML-RPC response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlRpcValue {
    String(String),
    Int(i64),
    Boolean(bool),
    Double(f64),
    DateTime(String),
    Base64(String),
    Array(Vec<XmlRpcValue>),
    Struct(BTreeMap<String, XmlRpcValue>),
    Nil,
}

impl XmlRpcValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlRpcValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[XmlRpcValue]> {
        match self {
            XmlRpcValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&BTreeMap<String, XmlRpcValue>> {
        match self {
            XmlRpcValue::Struct(members) => Some(members),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            XmlRpcValue::String(_) => "string",
            XmlRpcValue::Int(_) => "int",
            XmlRpcValue::Boolean(_) => "boolean",
            XmlRpcValue::Double(_) => "double",
            XmlRpcValue::DateTime(_) => "dateTime.iso8601",
            XmlRpcValue::Base64(_) => "base64",
            XmlRpcValue::Array(_) => "array",
            XmlRpcValue::Struct(_) => "struct",
            XmlRpcValue::Nil => "nil",
        }
    }
}

impl From<&str> for XmlRpcValue {
    fn from(s: &str) -> Self {
        XmlRpcValue::String(s.to_string())
    }
}

impl From<String> for XmlRpcValue {
    fn from(s: String) -> Self {
        XmlRpcValue::String(s)
    }
}

/// Serializes a `methodCall` document.
pub fn encode_call(method: &str, params: &[XmlRpcValue]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<methodCall><methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param>");
        write_value(&mut out, param);
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>\n");
    out
}

fn write_value(out: &mut String, value: &XmlRpcValue) {
    out.push_str("<value>");
    match value {
        XmlRpcValue::String(s) => {
            let _ = write!(out, "<string>{}</string>", escape(s.as_str()));
        }
        XmlRpcValue::Int(i) => {
            let _ = write!(out, "<int>{}</int>", i);
        }
        XmlRpcValue::Boolean(b) => {
            let _ = write!(out, "<boolean>{}</boolean>", u8::from(*b));
        }
        XmlRpcValue::Double(d) => {
            let _ = write!(out, "<double>{}</double>", d);
        }
        XmlRpcValue::DateTime(s) | XmlRpcValue::Base64(s) => {
            let tag = value.type_name();
            let _ = write!(out, "<{tag}>{}</{tag}>", escape(s.as_str()));
        }
        XmlRpcValue::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        XmlRpcValue::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                let _ = write!(out, "<member><name>{}</name>", escape(name.as_str()));
                write_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
        XmlRpcValue::Nil => out.push_str("<nil/>"),
    }
    out.push_str("</value>");
}

/// Parses a `methodResponse` into its single return value.
///
/// A `<fault>` response becomes [`XmlRpcError::Fault`].
pub fn decode_response(xml: &str) -> Result<XmlRpcValue, XmlRpcError> {
    let root = parse_document(xml)?;
    if root.name != "methodResponse" {
        return Err(XmlRpcError::Malformed(format!(
            "expected <methodResponse>, found <{}>",
            root.name
        )));
    }

    if let Some(fault) = root.child("fault") {
        return Err(decode_fault(fault));
    }

    let value = root
        .require("params")?
        .require("param")?
        .require("value")?;
    decode_value(value)
}

fn decode_fault(fault: &Element) -> XmlRpcError {
    let members = fault
        .child("value")
        .and_then(|v| decode_value(v).ok())
        .and_then(|v| v.as_struct().cloned())
        .unwrap_or_default();

    let code = match members.get("faultCode") {
        Some(XmlRpcValue::Int(code)) => *code,
        _ => 0,
    };
    let message = members
        .get("faultString")
        .and_then(XmlRpcValue::as_str)
        .unwrap_or("unknown fault")
        .to_string();

    XmlRpcError::Fault { code, message }
}

fn decode_value(value: &Element) -> Result<XmlRpcValue, XmlRpcError> {
    // A <value> without a type element is a string.
    let Some(typed) = value.children.first() else {
        return Ok(XmlRpcValue::String(value.text.clone()));
    };

    match typed.name.as_str() {
        "string" => Ok(XmlRpcValue::String(typed.text.clone())),
        "int" | "i4" | "i8" => typed
            .text
            .trim()
            .parse()
            .map(XmlRpcValue::Int)
            .map_err(|_| XmlRpcError::Malformed(format!("bad integer '{}'", typed.text))),
        "boolean" => match typed.text.trim() {
            "1" => Ok(XmlRpcValue::Boolean(true)),
            "0" => Ok(XmlRpcValue::Boolean(false)),
            other => Err(XmlRpcError::Malformed(format!("bad boolean '{}'", other))),
        },
        "double" => typed
            .text
            .trim()
            .parse()
            .map(XmlRpcValue::Double)
            .map_err(|_| XmlRpcError::Malformed(format!("bad double '{}'", typed.text))),
        "dateTime.iso8601" => Ok(XmlRpcValue::DateTime(typed.text.clone())),
        "base64" => Ok(XmlRpcValue::Base64(typed.text.clone())),
        "nil" => Ok(XmlRpcValue::Nil),
        "array" => {
            let data = typed.require("data")?;
            data.children
                .iter()
                .filter(|c| c.name == "value")
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(XmlRpcValue::Array)
        }
        "struct" => {
            let mut members = BTreeMap::new();
            for member in typed.children.iter().filter(|c| c.name == "member") {
                let name = member.require("name")?.text.clone();
                let value = decode_value(member.require("value")?)?;
                members.insert(name, value);
            }
            Ok(XmlRpcValue::Struct(members))
        }
        other => Err(XmlRpcError::Malformed(format!(
            "unsupported value type <{}>",
            other
        ))),
    }
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    children: Vec<Element>,
    text: String,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn require(&self, name: &str) -> Result<&Element, XmlRpcError> {
        self.child(name).ok_or_else(|| {
            XmlRpcError::Malformed(format!("<{}> is missing <{}>", self.name, name))
        })
    }
}

fn element_name(start: &BytesStart<'_>) -> Result<String, XmlRpcError> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_string)
        .map_err(|e| XmlRpcError::Malformed(e.to_string()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlRpcError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(XmlRpcError::Malformed(
                "multiple root elements".to_string(),
            ))
        }
    }
    Ok(())
}

fn parse_document(xml: &str) -> Result<Element, XmlRpcError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlRpcError::Malformed(e.to_string()))?;

        match event {
            Event::Start(start) => stack.push(Element::new(element_name(&start)?)),
            Event::Empty(start) => {
                let element = Element::new(element_name(&start)?);
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlRpcError::Malformed("unexpected closing tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| XmlRpcError::Malformed(e.to_string()))?;
                    top.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlRpcError::Malformed(format!("unclosed <{}>", open.name)));
    }
    root.ok_or_else(|| XmlRpcError::Malformed("empty document".to_string()))
}
