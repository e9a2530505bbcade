//! Small helpers over `quick-xml` shared by the Robot and xUnit readers.

use quick_xml::events::BytesStart;

/// Unescaped value of the attribute named `key`, if present.
pub(crate) fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, quick_xml::Error> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
