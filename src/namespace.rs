//! Namespace-Prefix Registry.
//!
//! Binaere XML-Formate kodieren Namespace-Scopes als eigene Events statt als
//! `xmlns:`-Attribute. Die Registry merkt sich deshalb zwei Dinge:
//!
//! - **gebunden**: URI → Prefix, fuer die Aufloesung von Element- und
//!   Attributnamen. Gilt bis zum passenden Namespace-End-Event.
//! - **pending**: seit dem letzten Start-Tag deklarierte Bindings, die noch als
//!   `xmlns:` ausgegeben werden muessen. Werden genau einmal, auf dem naechsten
//!   Start-Tag, konsumiert.

use std::rc::Rc;

use log::trace;

use crate::FastHashMap;

/// Ein Prefix ↔ URI Binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    pub prefix: Rc<str>,
    pub uri: Rc<str>,
}

/// Ergebnis einer Namespace-Aufloesung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceResolution<'a> {
    /// Kein (oder leerer) Namespace.
    None,
    /// URI ist an diesen Prefix gebunden.
    Resolved(&'a str),
    /// URI ist nicht gebunden; die rohe URI dient als Fallback.
    Unresolved(&'a str),
}

impl<'a> NamespaceResolution<'a> {
    /// Text vor dem `:` eines qualifizierten Namens, falls einer geschrieben
    /// werden soll. Leere Prefixe (Default-Namespace) ergeben `None`.
    pub fn qualifier(self) -> Option<&'a str> {
        match self {
            Self::Resolved(p) | Self::Unresolved(p) if !p.is_empty() => Some(p),
            _ => None,
        }
    }
}

/// Verfolgt aktive Bindings und noch nicht ausgegebene Deklarationen.
#[derive(Debug, Default)]
pub struct NamespacePrefixRegistry {
    /// URI → Prefix-Stack; das letzte Element ist das aktuell gueltige.
    bound: FastHashMap<Rc<str>, Vec<Rc<str>>>,
    pending: Vec<NamespaceBinding>,
}

impl NamespacePrefixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindet `uri` an `prefix` und merkt die Deklaration zur Ausgabe vor.
    ///
    /// Erneute Deklaration derselben URI ist erlaubt; der neueste Prefix
    /// gewinnt bis zu seinem `remove_namespace`.
    pub fn add_namespace(&mut self, prefix: Rc<str>, uri: Rc<str>) {
        trace!("namespace start: {prefix} = {uri}");
        self.bound.entry(uri.clone()).or_default().push(prefix.clone());
        self.pending.push(NamespaceBinding { prefix, uri });
    }

    /// Loest das Binding `prefix` ↔ `uri`. Unbekannte Paare werden ignoriert.
    pub fn remove_namespace(&mut self, prefix: &str, uri: &str) {
        let mut removed = false;
        if let Some(prefixes) = self.bound.get_mut(uri) {
            if let Some(pos) = prefixes.iter().rposition(|p| &**p == prefix) {
                prefixes.remove(pos);
                removed = true;
            }
            if prefixes.is_empty() {
                self.bound.remove(uri);
            }
        }
        if let Some(pos) = self
            .pending
            .iter()
            .rposition(|b| &*b.prefix == prefix && &*b.uri == uri)
        {
            self.pending.remove(pos);
        }
        if removed {
            trace!("namespace end: {prefix} = {uri}");
        } else {
            trace!("namespace end ohne Binding ignoriert: {prefix} = {uri}");
        }
    }

    /// Prefix fuer `uri`, oder `None` wenn ungebunden bzw. `uri` fehlt.
    pub fn get_prefix_for_uri(&self, uri: Option<&str>) -> Option<&str> {
        self.bound
            .get(uri?)
            .and_then(|prefixes| prefixes.last())
            .map(|p| &**p)
    }

    /// Wie [`get_prefix_for_uri`](Self::get_prefix_for_uri), aber mit
    /// explizitem Fallback auf die rohe URI.
    pub fn resolve<'a>(&'a self, uri: Option<&'a str>) -> NamespaceResolution<'a> {
        match uri {
            None | Some("") => NamespaceResolution::None,
            Some(uri) => match self.get_prefix_for_uri(Some(uri)) {
                Some(prefix) => NamespaceResolution::Resolved(prefix),
                None => NamespaceResolution::Unresolved(uri),
            },
        }
    }

    /// Gibt die pending Deklarationen in Deklarationsreihenfolge zurueck und
    /// leert die Queue. Die Bindings selbst bleiben bestehen.
    pub fn consume_pending_namespaces(&mut self) -> Vec<NamespaceBinding> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Anzahl der URIs mit mindestens einem aktiven Binding.
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }
}
