//! Event scripts: aufgezeichnete Decoder-Ausgabe als JSON.
//!
//! Format: ein JSON-Array, ein Objekt pro Event, unterschieden ueber `"type"`.
//!
//! ```json
//! [
//!   {"type": "namespace_start", "prefix": "android", "uri": "http://schemas.android.com/apk/res/android"},
//!   {"type": "start_tag", "name": "manifest", "attributes": [{"name": "package", "value": "com.example"}]},
//!   {"type": "cdata", "value": "text"},
//!   {"type": "end_tag", "name": "manifest"},
//!   {"type": "namespace_end", "prefix": "android", "uri": "http://schemas.android.com/apk/res/android"}
//! ]
//! ```
//!
//! `ns` ist optional und darf `null` sein.

use std::rc::Rc;

use serde_json::{Map, Value};

use crate::event::{
    Attribute, CDataEvent, EndTagEvent, NamespaceEndEvent, NamespaceStartEvent, StartTagEvent,
    XmlEvent,
};
use crate::{Error, Result};

/// Parst ein Event-Script.
pub fn parse_event_script(json: &str) -> Result<Vec<XmlEvent>> {
    let value: Value = serde_json::from_str(json).map_err(|e| Error::InvalidEventScript {
        index: None,
        message: format!("JSON parse error: {e}"),
    })?;
    let Value::Array(items) = value else {
        return Err(Error::InvalidEventScript {
            index: None,
            message: "top level must be an array of events".into(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_event(item).map_err(|msg| Error::invalid_script_event(index, msg)))
        .collect()
}

/// Serialisiert Events zurueck ins Script-Format (z.B. fuer Fixtures).
pub fn events_to_script(events: &[XmlEvent]) -> String {
    let items: Vec<Value> = events.iter().map(event_to_value).collect();
    Value::Array(items).to_string()
}

type FieldResult<T> = core::result::Result<T, String>;

fn parse_event(item: &Value) -> FieldResult<XmlEvent> {
    let obj = item.as_object().ok_or("event must be an object")?;
    let kind = required_str(obj, "type")?;
    let event = match kind {
        "namespace_start" => XmlEvent::NamespaceStart(NamespaceStartEvent::new(
            required_str(obj, "prefix")?,
            required_str(obj, "uri")?,
        )),
        "namespace_end" => XmlEvent::NamespaceEnd(NamespaceEndEvent::new(
            required_str(obj, "prefix")?,
            required_str(obj, "uri")?,
        )),
        "start_tag" => {
            let attributes = match obj.get("attributes") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(attrs)) => attrs
                    .iter()
                    .map(parse_attribute)
                    .collect::<FieldResult<Vec<_>>>()?,
                Some(_) => return Err("'attributes' must be an array".into()),
            };
            XmlEvent::StartTag(StartTagEvent {
                name: required_str(obj, "name")?.into(),
                namespace_uri: optional_ns(obj)?,
                attributes,
            })
        }
        "end_tag" => XmlEvent::EndTag(EndTagEvent {
            name: required_str(obj, "name")?.into(),
            namespace_uri: optional_ns(obj)?,
        }),
        "cdata" => XmlEvent::CData(CDataEvent::new(required_str(obj, "value")?)),
        other => return Err(format!("unknown event type '{other}'")),
    };
    Ok(event)
}

fn parse_attribute(item: &Value) -> FieldResult<Attribute> {
    let obj = item.as_object().ok_or("attribute must be an object")?;
    Ok(Attribute {
        name: required_str(obj, "name")?.into(),
        namespace_uri: optional_ns(obj)?,
        value: required_str(obj, "value")?.into(),
    })
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> FieldResult<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(format!("field '{key}' must be a string")),
        None => Err(format!("missing field '{key}'")),
    }
}

fn optional_ns(obj: &Map<String, Value>) -> FieldResult<Option<Rc<str>>> {
    match obj.get("ns") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str().into())),
        Some(_) => Err("field 'ns' must be a string or null".into()),
    }
}

fn ns_value(ns: &Option<Rc<str>>) -> Value {
    match ns {
        Some(uri) => Value::String(uri.to_string()),
        None => Value::Null,
    }
}

fn event_to_value(event: &XmlEvent) -> Value {
    let mut map = Map::new();
    match event {
        XmlEvent::NamespaceStart(ns) => {
            map.insert("type".into(), "namespace_start".into());
            map.insert("prefix".into(), Value::from(&*ns.prefix));
            map.insert("uri".into(), Value::from(&*ns.uri));
        }
        XmlEvent::NamespaceEnd(ns) => {
            map.insert("type".into(), "namespace_end".into());
            map.insert("prefix".into(), Value::from(&*ns.prefix));
            map.insert("uri".into(), Value::from(&*ns.uri));
        }
        XmlEvent::StartTag(st) => {
            map.insert("type".into(), "start_tag".into());
            map.insert("name".into(), Value::from(&*st.name));
            map.insert("ns".into(), ns_value(&st.namespace_uri));
            let attrs = st
                .attributes
                .iter()
                .map(|a| {
                    let mut attr = Map::new();
                    attr.insert("name".into(), Value::from(&*a.name));
                    attr.insert("ns".into(), ns_value(&a.namespace_uri));
                    attr.insert("value".into(), Value::from(&*a.value));
                    Value::Object(attr)
                })
                .collect();
            map.insert("attributes".into(), Value::Array(attrs));
        }
        XmlEvent::EndTag(et) => {
            map.insert("type".into(), "end_tag".into());
            map.insert("name".into(), Value::from(&*et.name));
            map.insert("ns".into(), ns_value(&et.namespace_uri));
        }
        XmlEvent::CData(cd) => {
            map.insert("type".into(), "cdata".into());
            map.insert("value".into(), Value::from(&*cd.value));
        }
    }
    Value::Object(map)
}
