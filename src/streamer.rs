//! Consumer-Seite eines Event-Streams.
//!
//! Ein Decoder ruft pro Event genau eine `on_*`-Methode auf. Mit
//! [`CompositeXmlStreamer`] kann derselbe Decoder-Durchlauf mehrere
//! Consumer bedienen (z.B. XML-Text und Metadaten gleichzeitig).

use crate::event::{
    CDataEvent, EndTagEvent, NamespaceEndEvent, NamespaceStartEvent, StartTagEvent, XmlEvent,
};
use crate::Result;

/// Receives the events of a binary XML document in stream order.
pub trait XmlStreamer {
    fn on_start_tag(&mut self, event: &StartTagEvent) -> Result<()>;
    fn on_end_tag(&mut self, event: &EndTagEvent) -> Result<()>;
    fn on_cdata(&mut self, event: &CDataEvent) -> Result<()>;
    fn on_namespace_start(&mut self, event: &NamespaceStartEvent) -> Result<()>;
    fn on_namespace_end(&mut self, event: &NamespaceEndEvent) -> Result<()>;
}

impl<S: XmlStreamer + ?Sized> XmlStreamer for &mut S {
    fn on_start_tag(&mut self, event: &StartTagEvent) -> Result<()> {
        (**self).on_start_tag(event)
    }

    fn on_end_tag(&mut self, event: &EndTagEvent) -> Result<()> {
        (**self).on_end_tag(event)
    }

    fn on_cdata(&mut self, event: &CDataEvent) -> Result<()> {
        (**self).on_cdata(event)
    }

    fn on_namespace_start(&mut self, event: &NamespaceStartEvent) -> Result<()> {
        (**self).on_namespace_start(event)
    }

    fn on_namespace_end(&mut self, event: &NamespaceEndEvent) -> Result<()> {
        (**self).on_namespace_end(event)
    }
}

/// Leitet jedes Event in Registrierungsreihenfolge an alle Kinder weiter.
///
/// Der erste Fehler bricht die Weiterleitung fuer dieses Event ab.
#[derive(Default)]
pub struct CompositeXmlStreamer<'a> {
    streamers: Vec<Box<dyn XmlStreamer + 'a>>,
}

impl<'a> CompositeXmlStreamer<'a> {
    pub fn new() -> Self {
        Self { streamers: Vec::new() }
    }

    /// Registriert einen weiteren Consumer.
    pub fn push(&mut self, streamer: impl XmlStreamer + 'a) {
        self.streamers.push(Box::new(streamer));
    }

    /// Builder-Variante von [`push`](Self::push).
    pub fn with(mut self, streamer: impl XmlStreamer + 'a) -> Self {
        self.push(streamer);
        self
    }

    pub fn len(&self) -> usize {
        self.streamers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streamers.is_empty()
    }
}

impl XmlStreamer for CompositeXmlStreamer<'_> {
    fn on_start_tag(&mut self, event: &StartTagEvent) -> Result<()> {
        self.streamers.iter_mut().try_for_each(|s| s.on_start_tag(event))
    }

    fn on_end_tag(&mut self, event: &EndTagEvent) -> Result<()> {
        self.streamers.iter_mut().try_for_each(|s| s.on_end_tag(event))
    }

    fn on_cdata(&mut self, event: &CDataEvent) -> Result<()> {
        self.streamers.iter_mut().try_for_each(|s| s.on_cdata(event))
    }

    fn on_namespace_start(&mut self, event: &NamespaceStartEvent) -> Result<()> {
        self.streamers.iter_mut().try_for_each(|s| s.on_namespace_start(event))
    }

    fn on_namespace_end(&mut self, event: &NamespaceEndEvent) -> Result<()> {
        self.streamers.iter_mut().try_for_each(|s| s.on_namespace_end(event))
    }
}

/// Ruft fuer ein einzelnes Event die passende `on_*`-Methode auf.
pub fn dispatch<S: XmlStreamer + ?Sized>(event: &XmlEvent, streamer: &mut S) -> Result<()> {
    match event {
        XmlEvent::NamespaceStart(ns) => streamer.on_namespace_start(ns),
        XmlEvent::NamespaceEnd(ns) => streamer.on_namespace_end(ns),
        XmlEvent::StartTag(st) => streamer.on_start_tag(st),
        XmlEvent::EndTag(et) => streamer.on_end_tag(et),
        XmlEvent::CData(cd) => streamer.on_cdata(cd),
    }
}

/// Spielt eine aufgezeichnete Event-Sequenz in einen Streamer ein.
pub fn replay<'e, S: XmlStreamer + ?Sized>(
    events: impl IntoIterator<Item = &'e XmlEvent>,
    streamer: &mut S,
) -> Result<()> {
    for event in events {
        dispatch(event, streamer)?;
    }
    Ok(())
}
