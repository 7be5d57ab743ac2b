//! Integrationstests fuer den Translator (Binary-XML Events → XML).

use axml::{
    events_to_xml, events_to_xml_with_options, events_to_xml_writer, replay, Attribute,
    CDataEvent, CompositeXmlStreamer, EndTagEvent, Error, NamespaceEndEvent,
    NamespaceStartEvent, StartTagEvent, TranslatorOptions, XmlEvent, XmlStreamer, XmlTranslator,
    XML_DECLARATION,
};

const ANDROID: &str = "http://schemas.android.com/apk/res/android";
const TOOLS: &str = "http://schemas.android.com/tools";

// ============================================================================
// Hilfsfunktionen
// ============================================================================

fn ns_start(prefix: &str, uri: &str) -> XmlEvent {
    NamespaceStartEvent::new(prefix, uri).into()
}

fn ns_end(prefix: &str, uri: &str) -> XmlEvent {
    NamespaceEndEvent::new(prefix, uri).into()
}

fn st(name: &str) -> XmlEvent {
    StartTagEvent::new(name).into()
}

fn st_attrs(name: &str, attrs: Vec<Attribute>) -> XmlEvent {
    XmlEvent::StartTag(StartTagEvent {
        name: name.into(),
        namespace_uri: None,
        attributes: attrs,
    })
}

fn st_ns(uri: &str, name: &str) -> XmlEvent {
    StartTagEvent::with_namespace(uri, name).into()
}

fn et(name: &str) -> XmlEvent {
    EndTagEvent::new(name).into()
}

fn et_ns(uri: &str, name: &str) -> XmlEvent {
    EndTagEvent::with_namespace(uri, name).into()
}

fn cdata(value: &str) -> XmlEvent {
    CDataEvent::new(value).into()
}

fn at(name: &str, value: &str) -> Attribute {
    Attribute::new(name, value)
}

fn at_android(name: &str, value: &str) -> Attribute {
    Attribute::with_namespace(ANDROID, name, value)
}

/// Dokument-Text ohne XML-Deklaration.
fn render(events: &[XmlEvent]) -> String {
    let xml = events_to_xml(events).unwrap();
    assert!(xml.starts_with(XML_DECLARATION), "{xml}");
    xml[XML_DECLARATION.len()..].to_string()
}

/// Ein kleines, realistisches Manifest.
fn manifest_events() -> Vec<XmlEvent> {
    vec![
        ns_start("android", ANDROID),
        st_attrs(
            "manifest",
            vec![
                at_android("versionCode", "42"),
                at_android("versionName", "1.2 \"beta\""),
                at("package", "com.example.app"),
            ],
        ),
        st_attrs("uses-sdk", vec![at_android("minSdkVersion", "21")]),
        et("uses-sdk"),
        st_attrs("uses-permission", vec![at_android("name", "android.permission.INTERNET")]),
        et("uses-permission"),
        st_attrs(
            "application",
            vec![at_android("label", "Tom & Jerry's <App>"), at_android("debuggable", "true")],
        ),
        st_attrs("activity", vec![at_android("name", ".MainActivity")]),
        st("intent-filter"),
        st_attrs("action", vec![at_android("name", "android.intent.action.MAIN")]),
        et("action"),
        et("intent-filter"),
        et("activity"),
        et("application"),
        et("manifest"),
        ns_end("android", ANDROID),
    ]
}

// ============================================================================
// Beispiele
// ============================================================================

/// Manifest mit android-Namespace und einfachem Attribut.
#[test]
fn manifest_self_closing_mit_namespace() {
    let events = vec![
        ns_start("android", ANDROID),
        st_attrs("manifest", vec![at("package", "com.example")]),
        et("manifest"),
    ];
    assert_eq!(
        events_to_xml(&events).unwrap(),
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <manifest xmlns:android=\"http://schemas.android.com/apk/res/android\" package=\"com.example\" />\n"
    );
}

/// Verschachtelte Elemente mit Text.
#[test]
fn verschachtelt_mit_text() {
    let events = vec![st("a"), st("b"), cdata("text"), et("b"), et("a")];
    assert_eq!(render(&events), "<a>\n\t<b>\n\t\ttext\n\t</b>\n</a>\n");
}

#[test]
fn komplettes_manifest() {
    let expected = format!(
        "<manifest xmlns:android=\"{ANDROID}\" android:versionCode=\"42\" android:versionName=\"1.2 &quot;beta&quot;\" package=\"com.example.app\">\n\
         \t<uses-sdk android:minSdkVersion=\"21\" />\n\
         \t<uses-permission android:name=\"android.permission.INTERNET\" />\n\
         \t<application android:label=\"Tom &amp; Jerry&apos;s &lt;App&gt;\" android:debuggable=\"true\">\n\
         \t\t<activity android:name=\".MainActivity\">\n\
         \t\t\t<intent-filter>\n\
         \t\t\t\t<action android:name=\"android.intent.action.MAIN\" />\n\
         \t\t\t</intent-filter>\n\
         \t\t</activity>\n\
         \t</application>\n\
         </manifest>\n"
    );
    assert_eq!(render(&manifest_events()), expected);
}

// ============================================================================
// Eigenschaften
// ============================================================================

/// depth kehrt nach balancierten Events auf 0 zurueck und wird nie negativ.
#[test]
fn depth_balanciert() {
    let mut translator = XmlTranslator::new();
    let mut max_depth = 0;
    for event in manifest_events() {
        axml::dispatch(&event, &mut translator).unwrap();
        max_depth = max_depth.max(translator.depth());
    }
    assert_eq!(max_depth, 5);
    assert_eq!(translator.depth(), 0);
    assert!(!translator.is_start_tag_open());
}

/// Namespaces werden nur auf dem naechsten Start-Tag ausgegeben.
#[test]
fn pending_namespaces_nur_einmal() {
    let events = vec![
        ns_start("android", ANDROID),
        ns_start("tools", TOOLS),
        st("a"),
        st("b"),
        et("b"),
        et("a"),
    ];
    let xml = render(&events);
    assert_eq!(xml.matches("xmlns:").count(), 2, "{xml}");
    assert!(xml.starts_with(&format!("<a xmlns:android=\"{ANDROID}\" xmlns:tools=\"{TOOLS}\">")));
    assert!(xml.contains("\t<b />\n"));
}

/// Namespace mitten im Dokument landet auf dem naechsten Kind.
#[test]
fn namespace_auf_innerem_element() {
    let events = vec![
        st("a"),
        ns_start("tools", TOOLS),
        st_attrs("b", vec![Attribute::with_namespace(TOOLS, "ignore", "x")]),
        et("b"),
        ns_end("tools", TOOLS),
        st_attrs("c", vec![Attribute::with_namespace(TOOLS, "ignore", "y")]),
        et("c"),
        et("a"),
    ];
    assert_eq!(
        render(&events),
        format!(
            "<a>\n\
             \t<b xmlns:tools=\"{TOOLS}\" tools:ignore=\"x\" />\n\
             \t<c {TOOLS}:ignore=\"y\" />\n\
             </a>\n"
        )
    );
}

/// Element-Namespace wird ueber die Registry aufgeloest, End-Tag nutzt die rohe URI.
#[test]
fn element_namespace_asymmetrie() {
    let events = vec![
        ns_start("android", ANDROID),
        st_ns(ANDROID, "x"),
        cdata("t"),
        et_ns(ANDROID, "x"),
    ];
    assert_eq!(
        render(&events),
        format!("<android:x xmlns:android=\"{ANDROID}\">\n\tt\n</{ANDROID}:x>\n")
    );
}

#[test]
fn end_tag_prefix_aufloesung() {
    let events = vec![
        ns_start("android", ANDROID),
        st_ns(ANDROID, "x"),
        st_ns(ANDROID, "y"),
        et_ns(ANDROID, "y"),
        et_ns(ANDROID, "x"),
        ns_end("android", ANDROID),
    ];
    let opts = TranslatorOptions::default().with_resolve_end_tag_prefix(true);
    let xml = events_to_xml_with_options(&events, opts).unwrap();

    let doc = roxmltree::Document::parse(&xml).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().namespace(), Some(ANDROID));
    assert_eq!(root.tag_name().name(), "x");
    let child = root.children().find(|n| n.is_element()).unwrap();
    assert_eq!(child.tag_name().namespace(), Some(ANDROID));
    assert_eq!(child.tag_name().name(), "y");
}

/// Attribut-Escaping der vier Basis-Entities.
#[test]
fn attribut_escaping() {
    let events = vec![st_attrs("r", vec![at("v", r#"<a href="x">&</a>"#)]), et("r")];
    assert_eq!(
        render(&events),
        "<r v=\"&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;\" />\n"
    );
}

/// CDATA wird nicht escaped.
#[test]
fn cdata_unveraendert() {
    let events = vec![st("r"), cdata("a &amp; b"), et("r")];
    assert_eq!(render(&events), "<r>\n\ta &amp; b\n</r>\n");
}

/// Text und Kind-Element gemischt.
#[test]
fn gemischter_inhalt() {
    let events = vec![st("r"), cdata("vor"), st("k"), et("k"), cdata("nach"), et("r")];
    assert_eq!(render(&events), "<r>\n\tvor\n\t<k />\n\tnach\n</r>\n");
}

#[test]
fn materialize_idempotent() {
    let mut translator = XmlTranslator::new();
    replay(&manifest_events(), &mut translator).unwrap();
    let first = translator.materialize_output().to_owned();
    let second = translator.materialize_output().to_owned();
    assert_eq!(first, second);
}

#[test]
fn leerer_stream() {
    assert_eq!(events_to_xml(&[]).unwrap(), XML_DECLARATION);
}

// ============================================================================
// Wohlgeformtheit
// ============================================================================

#[test]
fn manifest_ist_wohlgeformt_roxmltree() {
    let xml = events_to_xml(&manifest_events()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "manifest");
    assert_eq!(root.attribute("package"), Some("com.example.app"));
    assert_eq!(root.attribute((ANDROID, "versionName")), Some("1.2 \"beta\""));

    let app = root
        .children()
        .find(|n| n.has_tag_name("application"))
        .unwrap();
    assert_eq!(app.attribute((ANDROID, "label")), Some("Tom & Jerry's <App>"));
}

#[test]
fn manifest_ist_wohlgeformt_quick_xml() {
    use quick_xml::events::Event;

    let xml = events_to_xml(&manifest_events()).unwrap();
    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut elements = 0;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(_) | Event::Empty(_) => elements += 1,
            Event::Eof => break,
            _ => {}
        }
    }
    assert_eq!(elements, 7);
}

// ============================================================================
// Strict-Modus
// ============================================================================

#[test]
fn strict_unbalanciert() {
    let opts = TranslatorOptions::default().with_strict(true);
    let err = events_to_xml_with_options(&[st("a"), et("a"), et("a")], opts).unwrap_err();
    assert_eq!(err, Error::malformed_event_stream("a"));
}

#[test]
fn strict_falscher_name() {
    let opts = TranslatorOptions::default().with_strict(true);
    let err = events_to_xml_with_options(&[st("a"), st("b"), et("a")], opts).unwrap_err();
    assert_eq!(err, Error::mismatched_end_tag("b", "a"));
}

#[test]
fn strict_gleiches_ergebnis_wie_lenient() {
    let opts = TranslatorOptions::default().with_strict(true);
    assert_eq!(
        events_to_xml_with_options(&manifest_events(), opts).unwrap(),
        events_to_xml(&manifest_events()).unwrap()
    );
}

// ============================================================================
// Writer / Composite
// ============================================================================

#[test]
fn writer_api() {
    let mut buf = Vec::new();
    events_to_xml_writer(&manifest_events(), TranslatorOptions::default(), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), events_to_xml(&manifest_events()).unwrap());
}

/// Sammelt die Namen aller Start-Tags.
#[derive(Default)]
struct TagNames(Vec<String>);

impl XmlStreamer for TagNames {
    fn on_start_tag(&mut self, event: &StartTagEvent) -> axml::Result<()> {
        self.0.push(event.name.to_string());
        Ok(())
    }
    fn on_end_tag(&mut self, _: &EndTagEvent) -> axml::Result<()> {
        Ok(())
    }
    fn on_cdata(&mut self, _: &CDataEvent) -> axml::Result<()> {
        Ok(())
    }
    fn on_namespace_start(&mut self, _: &NamespaceStartEvent) -> axml::Result<()> {
        Ok(())
    }
    fn on_namespace_end(&mut self, _: &NamespaceEndEvent) -> axml::Result<()> {
        Ok(())
    }
}

#[test]
fn composite_translator_und_collector() {
    let mut translator = XmlTranslator::new();
    let mut names = TagNames::default();
    {
        let mut composite = CompositeXmlStreamer::new()
            .with(&mut translator)
            .with(&mut names);
        replay(&manifest_events(), &mut composite).unwrap();
    }
    assert_eq!(
        names.0,
        [
            "manifest",
            "uses-sdk",
            "uses-permission",
            "application",
            "activity",
            "intent-filter",
            "action"
        ]
    );
    assert_eq!(
        translator.into_output(),
        events_to_xml(&manifest_events()).unwrap()
    );
}
