//! axml – rebuilds XML text from the event stream of a binary XML decoder
//! (e.g. Android's compiled `AndroidManifest.xml`).
//!
//! # Beispiel
//!
//! ```
//! use axml::{Attribute, EndTagEvent, NamespaceStartEvent, StartTagEvent, XmlStreamer, XmlTranslator};
//!
//! let mut translator = XmlTranslator::new();
//! translator
//!     .on_namespace_start(&NamespaceStartEvent::new(
//!         "android",
//!         "http://schemas.android.com/apk/res/android",
//!     ))
//!     .unwrap();
//! translator
//!     .on_start_tag(&StartTagEvent::new("manifest").attribute(Attribute::new("package", "com.example")))
//!     .unwrap();
//! translator.on_end_tag(&EndTagEvent::new("manifest")).unwrap();
//!
//! assert_eq!(
//!     translator.materialize_output(),
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
//!      <manifest xmlns:android=\"http://schemas.android.com/apk/res/android\" package=\"com.example\" />\n"
//! );
//! ```

pub mod error;
pub mod escape;
pub mod event;
pub mod namespace;
pub mod options;
pub mod script;
pub mod streamer;
pub mod translator;

pub use error::{Error, Result};

/// HashMap mit ahash (schneller, nicht DoS-resistent — für interne Datenstrukturen).
pub(crate) type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

// Public API: Events
pub use event::{
    Attribute, CDataEvent, EndTagEvent, NamespaceEndEvent, NamespaceStartEvent, StartTagEvent,
    XmlEvent,
};

// Public API: Options
pub use options::TranslatorOptions;

// Public API: Namespaces
pub use namespace::{NamespaceBinding, NamespacePrefixRegistry, NamespaceResolution};

// Public API: Streaming
pub use streamer::{dispatch, replay, CompositeXmlStreamer, XmlStreamer};
pub use translator::{
    events_to_xml, events_to_xml_with_options, events_to_xml_writer, XmlTranslator,
    XML_DECLARATION,
};

// Public API: Escaping / Scripts
pub use escape::escape_xml10;
pub use script::{events_to_script, parse_event_script};
