//! The finished vector document produced by one render

use std::fmt;

use quick_xml::events::Event;
use quick_xml::Reader;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// A complete SVG document with every placeholder resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDocument {
    text: String,
}

impl VectorDocument {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Hex-encoded SHA-256 of the document text.
    ///
    /// Rendering is deterministic, so equal requests produce equal digests.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.text.as_bytes()))
    }

    /// Check that the text parses as markup with a single root element and
    /// balanced tags.
    pub fn check_well_formed(&self) -> Result<()> {
        check_well_formed(&self.text)
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub(crate) fn check_well_formed(text: &str) -> Result<()> {
    let mut reader = Reader::from_str(text);
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(_) => {
                // quick-xml rejects mismatched end names on its own
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::Malformed("unexpected closing tag".into()))?;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::Text(t) if depth == 0 => {
                if t.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(Error::Malformed("text outside the root element".into()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::Malformed(format!("{} unclosed element(s)", depth)));
    }
    match roots {
        1 => Ok(()),
        0 => Err(Error::Malformed("no root element".into())),
        n => Err(Error::Malformed(format!("{} root elements", n))),
    }
}
