//! XML 1.0 Escaping fuer Attribut-Werte.
//!
//! Entities: `&` `<` `>` `"` `'` → `&amp;` `&lt;` `&gt;` `&quot;` `&apos;`.
//!
//! Steuerzeichen werden wie folgt behandelt (XML 1.0 Section 2.2, `Char`):
//! - `\t`, `\n`, `\r` bleiben unveraendert.
//! - U+0000..U+0008, U+000B, U+000C, U+000E..U+001F, U+FFFE, U+FFFF sind in
//!   XML 1.0 nicht erlaubt und werden entfernt.
//! - U+007F..U+0084 und U+0086..U+009F ("discouraged", Section 2.2) werden als
//!   numerische Referenz `&#NNN;` geschrieben.

use std::borrow::Cow;

/// Was mit einem einzelnen Zeichen passiert.
enum Escape {
    Entity(&'static str),
    Numeric,
    Remove,
}

#[inline]
fn classify(c: char) -> Option<Escape> {
    match c {
        '&' => Some(Escape::Entity("&amp;")),
        '<' => Some(Escape::Entity("&lt;")),
        '>' => Some(Escape::Entity("&gt;")),
        '"' => Some(Escape::Entity("&quot;")),
        '\'' => Some(Escape::Entity("&apos;")),
        '\t' | '\n' | '\r' => None,
        '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => Some(Escape::Remove),
        '\u{7F}'..='\u{84}' | '\u{86}'..='\u{9F}' => Some(Escape::Numeric),
        _ => None,
    }
}

/// Haengt `s` XML-1.0-escaped an `out` an.
///
/// Unveraenderte Abschnitte werden als ein Stueck kopiert.
pub fn push_escaped_attr(out: &mut String, s: &str) {
    let mut start = 0;
    for (pos, c) in s.char_indices() {
        let Some(escape) = classify(c) else {
            continue;
        };
        out.push_str(&s[start..pos]);
        match escape {
            Escape::Entity(entity) => out.push_str(entity),
            Escape::Numeric => {
                out.push_str("&#");
                out.push_str(&u32::from(c).to_string());
                out.push(';');
            }
            Escape::Remove => {}
        }
        start = pos + c.len_utf8();
    }
    out.push_str(&s[start..]);
}

/// Escaped einen Attribut-Wert; ohne Sonderzeichen wird nicht allokiert.
pub fn escape_xml10(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| classify(c).is_some()) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    push_escaped_attr(&mut out, s);
    Cow::Owned(out)
}
