//! Binary-XML Events → XML Text.
//!
//! Der Translator ist eine kleine Zustandsmaschine ueber `depth` und
//! "Start-Tag noch offen". Ohne Lookahead entscheidet erst das naechste Event,
//! wie ein Start-Tag abgeschlossen wird:
//!
//! - End-Tag direkt danach → ` />` (self-closing)
//! - Kind-Element oder Text → `>` und Zeilenumbruch
//!
//! Einrueckung: ein Tab pro Ebene, Zeilenende `\n`.
//!
//! APIs:
//! - [`XmlTranslator`] — Push-Consumer, implementiert [`XmlStreamer`].
//! - `events_to_xml()` — rendert eine aufgezeichnete Event-Sequenz (Convenience).
//! - `events_to_xml_writer()` — wie oben, direkt in `impl Write`.

use std::io::Write;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::escape::push_escaped_attr;
use crate::event::{
    Attribute, CDataEvent, EndTagEvent, NamespaceEndEvent, NamespaceStartEvent, StartTagEvent,
    XmlEvent,
};
use crate::namespace::NamespacePrefixRegistry;
use crate::options::TranslatorOptions;
use crate::streamer::{replay, XmlStreamer};
use crate::{Error, Result};

/// Feste XML-Deklaration am Anfang jeder Ausgabe.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Rendert Events als XML-String (Default-Optionen).
pub fn events_to_xml(events: &[XmlEvent]) -> Result<String> {
    events_to_xml_with_options(events, TranslatorOptions::default())
}

/// Rendert Events als XML-String.
pub fn events_to_xml_with_options(events: &[XmlEvent], options: TranslatorOptions) -> Result<String> {
    let mut translator = XmlTranslator::with_options(options);
    replay(events, &mut translator)?;
    Ok(translator.into_output())
}

/// Rendert Events direkt in einen Writer.
pub fn events_to_xml_writer(
    events: &[XmlEvent],
    options: TranslatorOptions,
    writer: impl Write,
) -> Result<()> {
    let mut translator = XmlTranslator::with_options(options);
    replay(events, &mut translator)?;
    translator.write_to(writer)
}

/// `{uri}name` bzw. `name`, fuer Fehlermeldungen.
fn expanded_name(namespace_uri: Option<&str>, name: &str) -> String {
    match namespace_uri {
        Some(uri) if !uri.is_empty() => format!("{{{uri}}}{name}"),
        _ => name.to_string(),
    }
}

/// Ein offenes Element (nur im Strict-Modus gefuehrt).
#[derive(Debug)]
struct OpenTag {
    namespace_uri: Option<Rc<str>>,
    name: Rc<str>,
}

/// Baut XML-Text aus einem Event-Stream. Eine Instanz pro Dokument.
///
/// Im Default-Modus werden Start-/End-Tags nicht gegeneinander geprueft; ein
/// End-Tag ohne offenes Element laesst `depth` bei 0 stehen und erzeugt
/// nicht-wohlgeformtes XML. Mit [`TranslatorOptions::strict`] wird stattdessen
/// ein Fehler zurueckgegeben und der Zustand bleibt unveraendert.
#[derive(Debug)]
pub struct XmlTranslator {
    out: String,
    namespaces: NamespacePrefixRegistry,
    depth: usize,
    start_tag_open: bool,
    options: TranslatorOptions,
    open_tags: Vec<OpenTag>,
}

impl Default for XmlTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlTranslator {
    pub fn new() -> Self {
        Self::with_options(TranslatorOptions::default())
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        debug!("new translator: {options:?}");
        Self {
            out: String::from(XML_DECLARATION),
            namespaces: NamespacePrefixRegistry::new(),
            depth: 0,
            start_tag_open: false,
            options,
            open_tags: Vec::new(),
        }
    }

    pub fn options(&self) -> TranslatorOptions {
        self.options
    }

    /// Aktuelle Verschachtelungstiefe.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True solange der zuletzt geschriebene Start-Tag noch nicht mit `>` oder
    /// ` />` abgeschlossen ist.
    pub fn is_start_tag_open(&self) -> bool {
        self.start_tag_open
    }

    /// Bisherige Ausgabe inkl. XML-Deklaration. Aendert keinen Zustand.
    pub fn materialize_output(&self) -> &str {
        &self.out
    }

    /// Gibt den Puffer ohne Kopie zurueck.
    pub fn into_output(self) -> String {
        self.out
    }

    /// Schreibt die bisherige Ausgabe in `writer` und flusht.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        writer.write_all(self.out.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) {
        self.out.extend(std::iter::repeat('\t').take(depth));
    }

    /// Schliesst einen offenen Start-Tag, weil ein Kind oder Text folgt.
    fn close_start_tag(&mut self) {
        if self.start_tag_open {
            self.out.push_str(">\n");
            self.start_tag_open = false;
        }
    }

    fn write_attribute(&mut self, attribute: &Attribute) {
        self.out.push(' ');
        let resolution = self.namespaces.resolve(attribute.namespace_uri.as_deref());
        if let Some(qualifier) = resolution.qualifier() {
            self.out.push_str(qualifier);
            self.out.push(':');
        }
        self.out.push_str(&attribute.name);
        self.out.push_str("=\"");
        push_escaped_attr(&mut self.out, &attribute.value);
        self.out.push('"');
    }

    /// Strict-Modus: End-Tag gegen das innerste offene Element pruefen.
    fn check_end_tag(&self, event: &EndTagEvent) -> Result<()> {
        let Some(open) = self.open_tags.last() else {
            return Err(Error::malformed_event_stream(expanded_name(
                event.namespace_uri.as_deref(),
                &event.name,
            )));
        };
        if open.name != event.name || open.namespace_uri != event.namespace_uri {
            return Err(Error::mismatched_end_tag(
                expanded_name(open.namespace_uri.as_deref(), &open.name),
                expanded_name(event.namespace_uri.as_deref(), &event.name),
            ));
        }
        Ok(())
    }
}

impl XmlStreamer for XmlTranslator {
    fn on_start_tag(&mut self, event: &StartTagEvent) -> Result<()> {
        trace!("start tag {} (depth {})", event.name, self.depth);
        self.close_start_tag();
        self.write_indent(self.depth);
        self.out.push('<');
        if let Some(qualifier) = self
            .namespaces
            .resolve(event.namespace_uri.as_deref())
            .qualifier()
        {
            self.out.push_str(qualifier);
            self.out.push(':');
        }
        self.out.push_str(&event.name);
        self.depth += 1;

        for ns in self.namespaces.consume_pending_namespaces() {
            self.out.push_str(" xmlns:");
            self.out.push_str(&ns.prefix);
            self.out.push_str("=\"");
            push_escaped_attr(&mut self.out, &ns.uri);
            self.out.push('"');
        }
        self.start_tag_open = true;

        for attribute in &event.attributes {
            self.write_attribute(attribute);
        }

        if self.options.strict {
            self.open_tags.push(OpenTag {
                namespace_uri: event.namespace_uri.clone(),
                name: event.name.clone(),
            });
        }
        Ok(())
    }

    fn on_end_tag(&mut self, event: &EndTagEvent) -> Result<()> {
        if self.options.strict {
            self.check_end_tag(event)?;
            self.open_tags.pop();
        } else if self.depth == 0 {
            warn!("end tag {} without open element", event.name);
        }
        self.depth = self.depth.saturating_sub(1);
        trace!("end tag {} (depth {})", event.name, self.depth);

        if self.start_tag_open {
            self.out.push_str(" />\n");
        } else {
            self.write_indent(self.depth);
            self.out.push_str("</");
            let qualifier = if self.options.resolve_end_tag_prefix {
                self.namespaces
                    .resolve(event.namespace_uri.as_deref())
                    .qualifier()
            } else {
                event.namespace_uri.as_deref().filter(|uri| !uri.is_empty())
            };
            if let Some(qualifier) = qualifier {
                self.out.push_str(qualifier);
                self.out.push(':');
            }
            self.out.push_str(&event.name);
            self.out.push_str(">\n");
        }
        self.start_tag_open = false;
        Ok(())
    }

    fn on_cdata(&mut self, event: &CDataEvent) -> Result<()> {
        self.close_start_tag();
        self.write_indent(self.depth);
        self.out.push_str(&event.value);
        self.out.push('\n');
        Ok(())
    }

    fn on_namespace_start(&mut self, event: &NamespaceStartEvent) -> Result<()> {
        self.namespaces
            .add_namespace(event.prefix.clone(), event.uri.clone());
        Ok(())
    }

    fn on_namespace_end(&mut self, event: &NamespaceEndEvent) -> Result<()> {
        self.namespaces.remove_namespace(&event.prefix, &event.uri);
        Ok(())
    }
}
