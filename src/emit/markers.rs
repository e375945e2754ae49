//! The two marker-attribute support types, emitted on every pass.
//!
//! These have no input dependency and are generated even when the scan finds
//! nothing. Their file names are a downstream compatibility surface and are
//! fixed strings, distinct from the emitted type names.

use super::writer::SourceWriter;
use super::{write_file_header, write_member_decorations, GeneratedFile};
use crate::generator::GeneratorOptions;

pub(crate) const ELEMENT_MARKER_FILE: &str = "UxmlElementClassName.g.cs";
pub(crate) const ATTRIBUTE_MARKER_FILE: &str = "UxmlAttributeClassName.g.cs";

const ELEMENT_MARKER_TYPE: &str = "UxmlElementAttribute";
const ATTRIBUTE_MARKER_TYPE: &str = "UxmlAttributeAttribute";

pub(crate) fn emit_element_marker(options: &GeneratorOptions) -> GeneratedFile {
    let mut w = SourceWriter::new();
    write_file_header(&mut w);
    w.open(&format!("namespace {}", options.tool_name));

    write_member_decorations(&mut w, options, true);
    w.open(&format!(
        "internal sealed class {} : global::System.Attribute",
        ELEMENT_MARKER_TYPE
    ));
    w.close();

    w.close();
    GeneratedFile {
        name: ELEMENT_MARKER_FILE.to_string(),
        contents: w.finish(),
    }
}

pub(crate) fn emit_attribute_marker(options: &GeneratorOptions) -> GeneratedFile {
    let mut w = SourceWriter::new();
    write_file_header(&mut w);
    w.open(&format!("namespace {}", options.tool_name));

    write_member_decorations(&mut w, options, true);
    w.open(&format!(
        "internal sealed class {} : global::System.Attribute",
        ATTRIBUTE_MARKER_TYPE
    ));

    write_member_decorations(&mut w, options, true);
    w.open(&format!(
        "public {}(object? defaultValue = default)",
        ATTRIBUTE_MARKER_TYPE
    ));
    w.line("DefaultValue = defaultValue;");
    w.close();
    w.blank();

    write_member_decorations(&mut w, options, true);
    w.line("public object? DefaultValue { get; }");

    w.close();
    w.close();
    GeneratedFile {
        name: ATTRIBUTE_MARKER_FILE.to_string(),
        contents: w.finish(),
    }
}
