//! Background composition: backdrop plus a scaled copy of the logo artwork

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::variant::Backdrop;
use crate::{Error, Result};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Transform applied to the artwork so it sits inside the rounded backdrop.
pub const ARTWORK_TRANSFORM: &str = "translate(15,12) scale(0.7)";

/// Nest the children of `body`'s root `<svg>` in a transformed group on a
/// full-size canvas, with `backdrop` drawn underneath.
///
/// The body is parsed rather than string-stripped, so the result does not
/// depend on the exact spelling of the body's root tag.
pub fn with_backdrop(body: &str, backdrop: Option<Backdrop>) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut root = BytesStart::new("svg");
    root.push_attribute(("viewBox", "0 0 100 100"));
    root.push_attribute(("xmlns", SVG_NAMESPACE));
    writer.write_event(Event::Start(root))?;

    if let Some(bg) = backdrop {
        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("width", "100"));
        rect.push_attribute(("height", "100"));
        rect.push_attribute(("rx", Backdrop::CORNER_RADIUS));
        rect.push_attribute(("fill", bg.fill));
        writer.write_event(Event::Empty(rect))?;
    }

    let mut group = BytesStart::new("g");
    group.push_attribute(("transform", ARTWORK_TRANSFORM));
    writer.write_event(Event::Start(group))?;

    copy_artwork(body, &mut writer)?;

    writer.write_event(Event::End(BytesEnd::new("g")))?;
    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Malformed(format!("composed document is not UTF-8: {}", e)))
}

/// Re-emit everything inside the body's root element.
fn copy_artwork(body: &str, writer: &mut Writer<Vec<u8>>) -> Result<()> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(Error::Malformed("artwork has more than one root".into()));
                    }
                    seen_root = true;
                } else {
                    writer.write_event(Event::Start(e))?;
                }
                depth += 1;
            }
            Event::End(e) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::Malformed("unexpected closing tag".into()))?;
                if depth > 0 {
                    writer.write_event(Event::End(e))?;
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    // an empty root has no artwork to copy
                    if seen_root {
                        return Err(Error::Malformed("artwork has more than one root".into()));
                    }
                    seen_root = true;
                } else {
                    writer.write_event(Event::Empty(e))?;
                }
            }
            Event::Eof => break,
            // declarations and comments outside the root are dropped
            ev if depth > 0 => writer.write_event(ev)?,
            _ => {}
        }
    }

    if !seen_root || depth != 0 {
        return Err(Error::Malformed("artwork is not a single element".into()));
    }
    Ok(())
}
