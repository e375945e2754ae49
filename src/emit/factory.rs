//! Factory companion emission: binds a class into the markup framework's
//! instantiation machinery through a nested `UxmlFactory` type.

use super::writer::SourceWriter;
use super::{write_file_header, write_member_decorations, GeneratedFile, UI_ELEMENTS};
use crate::generator::GeneratorOptions;
use crate::scan::ElementCapture;

pub(crate) fn emit_factory(options: &GeneratorOptions, capture: &ElementCapture) -> GeneratedFile {
    let mut w = SourceWriter::new();
    write_file_header(&mut w);

    let namespaced = capture.class_namespace.is_some();
    if let Some(ns) = &capture.class_namespace {
        w.open(&format!("namespace {}", ns));
    }

    w.open(&format!("partial class {}", capture.class_name));
    write_member_decorations(&mut w, options, true);
    w.open(&format!(
        "public new class UxmlFactory : {}.UxmlFactory<{}, UxmlTraits>",
        UI_ELEMENTS, capture.class_name
    ));
    w.close();
    w.close();

    if namespaced {
        w.close();
    }

    GeneratedFile {
        name: format!("{}.{}.g.cs", capture.class_name, capture.tag),
        contents: w.finish(),
    }
}
