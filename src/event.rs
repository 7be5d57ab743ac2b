//! Event model of a binary XML decoder.
//!
//! Defines the five structural events a decoder pushes into an
//! [`XmlStreamer`](crate::streamer::XmlStreamer) and the [`XmlEvent`] sum type
//! used to record or replay such a stream.
//!
//! Alle Strings sind `Rc<str>`: Events werden vom Decoder einmal erzeugt und
//! danach nur noch gelesen bzw. billig geklont.

use std::rc::Rc;

/// Ein Attribut eines Start-Tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Local name.
    pub name: Rc<str>,
    /// Namespace URI (`None` wenn das Attribut keinen Namespace hat).
    pub namespace_uri: Option<Rc<str>>,
    /// Unescaped value as decoded.
    pub value: Rc<str>,
}

impl Attribute {
    /// Attribut ohne Namespace.
    pub fn new(name: impl Into<Rc<str>>, value: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace_uri: None,
            value: value.into(),
        }
    }

    /// Attribut mit Namespace-URI.
    pub fn with_namespace(
        uri: impl Into<Rc<str>>,
        name: impl Into<Rc<str>>,
        value: impl Into<Rc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace_uri: Some(uri.into()),
            value: value.into(),
        }
    }
}

/// Opens an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTagEvent {
    pub name: Rc<str>,
    pub namespace_uri: Option<Rc<str>>,
    /// Attributes in decoder order; written in exactly this order.
    pub attributes: Vec<Attribute>,
}

impl StartTagEvent {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace_uri: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_namespace(uri: impl Into<Rc<str>>, name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace_uri: Some(uri.into()),
            attributes: Vec::new(),
        }
    }

    /// Haengt ein Attribut an (Builder-Stil).
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Closes the innermost open element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTagEvent {
    pub name: Rc<str>,
    pub namespace_uri: Option<Rc<str>>,
}

impl EndTagEvent {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace_uri: None,
        }
    }

    pub fn with_namespace(uri: impl Into<Rc<str>>, name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace_uri: Some(uri.into()),
        }
    }
}

/// Declares a prefix binding for the following subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceStartEvent {
    pub prefix: Rc<str>,
    pub uri: Rc<str>,
}

impl NamespaceStartEvent {
    pub fn new(prefix: impl Into<Rc<str>>, uri: impl Into<Rc<str>>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Revokes a prefix binding declared by a [`NamespaceStartEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEndEvent {
    pub prefix: Rc<str>,
    pub uri: Rc<str>,
}

impl NamespaceEndEvent {
    pub fn new(prefix: impl Into<Rc<str>>, uri: impl Into<Rc<str>>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Text content. Der Wert ist vom Producer bereits escaped und wird
/// unveraendert geschrieben.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CDataEvent {
    pub value: Rc<str>,
}

impl CDataEvent {
    pub fn new(value: impl Into<Rc<str>>) -> Self {
        Self { value: value.into() }
    }
}

/// One event of a recorded decoder stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// Namespace Start - binds a prefix to a URI.
    NamespaceStart(NamespaceStartEvent),
    /// Namespace End - rescinds a binding.
    NamespaceEnd(NamespaceEndEvent),
    /// Start Tag - element name, namespace and attributes.
    StartTag(StartTagEvent),
    /// End Tag - closes the current element.
    EndTag(EndTagEvent),
    /// CDATA - literal text content.
    CData(CDataEvent),
}

impl From<NamespaceStartEvent> for XmlEvent {
    fn from(e: NamespaceStartEvent) -> Self {
        XmlEvent::NamespaceStart(e)
    }
}

impl From<NamespaceEndEvent> for XmlEvent {
    fn from(e: NamespaceEndEvent) -> Self {
        XmlEvent::NamespaceEnd(e)
    }
}

impl From<StartTagEvent> for XmlEvent {
    fn from(e: StartTagEvent) -> Self {
        XmlEvent::StartTag(e)
    }
}

impl From<EndTagEvent> for XmlEvent {
    fn from(e: EndTagEvent) -> Self {
        XmlEvent::EndTag(e)
    }
}

impl From<CDataEvent> for XmlEvent {
    fn from(e: CDataEvent) -> Self {
        XmlEvent::CData(e)
    }
}
