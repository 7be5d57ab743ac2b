//! Translator options.
//!
//! # Beispiel
//!
//! ```
//! use axml::options::TranslatorOptions;
//!
//! let opts = TranslatorOptions::default().with_strict(true);
//! assert!(opts.strict());
//! assert!(!opts.resolve_end_tag_prefix());
//! ```

/// Options controlling how events are translated to XML text.
///
/// Die Defaults entsprechen exakt dem Verhalten eines vertrauenden
/// Translators: keine Validierung, End-Tags mit roher Namespace-URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslatorOptions {
    pub(crate) strict: bool,
    pub(crate) resolve_end_tag_prefix: bool,
}

impl TranslatorOptions {
    // --- Getter ---

    /// End tags are checked against an explicit stack of open elements.
    pub fn strict(&self) -> bool { self.strict }
    /// End tags resolve their namespace through the prefix registry like
    /// start tags do, instead of writing the raw namespace URI.
    pub fn resolve_end_tag_prefix(&self) -> bool { self.resolve_end_tag_prefix }

    // --- Setter ---

    pub fn set_strict(&mut self, v: bool) { self.strict = v; }
    pub fn set_resolve_end_tag_prefix(&mut self, v: bool) { self.resolve_end_tag_prefix = v; }

    // --- Builder ---

    pub fn with_strict(mut self, v: bool) -> Self { self.strict = v; self }
    pub fn with_resolve_end_tag_prefix(mut self, v: bool) -> Self { self.resolve_end_tag_prefix = v; self }
}
