//! Zentrale Fehlertypen fuer die Event → XML Uebersetzung.
//!
//! Im Default-Modus kann die Uebersetzung selbst nicht fehlschlagen; Fehler
//! entstehen nur im Strict-Modus, beim Schreiben in einen Sink oder beim
//! Einlesen eines Event-Scripts.

use core::fmt;
use std::borrow::Cow;

/// All error types of the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An end tag arrived while no element was open (strict mode only).
    ///
    /// Im lenient Modus wird stattdessen `depth` bei 0 gesaettigt.
    MalformedEventStream {
        /// Name des End-Tags, das keinen offenen Start-Tag hatte.
        end_tag: Cow<'static, str>,
    },
    /// An end tag does not match the innermost open element (strict mode only).
    MismatchedEndTag {
        /// Name (ggf. `{uri}name`) des offenen Elements.
        expected: Cow<'static, str>,
        /// Name (ggf. `{uri}name`) des empfangenen End-Tags.
        found: Cow<'static, str>,
    },
    /// An event script could not be parsed.
    InvalidEventScript {
        /// Index des Events im Script (`None` wenn das JSON selbst kaputt ist).
        index: Option<usize>,
        /// Fehlerbeschreibung.
        message: String,
    },
    /// Ein IO-Fehler beim Schreiben der XML-Ausgabe.
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEventStream { end_tag } => {
                write!(f, "malformed event stream: end tag '{end_tag}' without open element")
            }
            Self::MismatchedEndTag { expected, found } => {
                write!(f, "mismatched end tag: expected '{expected}', found '{found}'")
            }
            Self::InvalidEventScript { index: Some(index), message } => {
                write!(f, "invalid event script at event {index}: {message}")
            }
            Self::InvalidEventScript { index: None, message } => {
                write!(f, "invalid event script: {message}")
            }
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}

impl Error {
    /// Erstellt einen `MalformedEventStream` Fehler.
    pub fn malformed_event_stream(end_tag: impl Into<Cow<'static, str>>) -> Self {
        Self::MalformedEventStream { end_tag: end_tag.into() }
    }

    /// Erstellt einen `MismatchedEndTag` Fehler mit Kontext.
    pub fn mismatched_end_tag(
        expected: impl Into<Cow<'static, str>>,
        found: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::MismatchedEndTag {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Erstellt einen `InvalidEventScript` Fehler fuer ein bestimmtes Event.
    pub fn invalid_script_event(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidEventScript {
            index: Some(index),
            message: message.into(),
        }
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
