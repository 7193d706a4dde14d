//! Source text for the generated field

use crate::consts::SERIAL_VERSION_UID_FIELD;
use crate::semantic::ClassModel;

/// `private static final long serialVersionUID = <uid>L;`, optionally
/// preceded by an `@Serial` line
pub fn render_field(uid: i64, with_annotation: bool) -> String {
    let decl = format!("private static final long {} = {}L;", SERIAL_VERSION_UID_FIELD, uid);
    if with_annotation {
        format!("@Serial\n{}", decl)
    } else {
        decl
    }
}

/// Whether the class already declares a serialVersionUID field
pub fn has_serial_version_uid(class: &ClassModel) -> bool {
    class.fields.iter().any(|f| f.name == SERIAL_VERSION_UID_FIELD)
}

/// Computed UID of one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UidReport {
    pub class: String,
    pub uid: i64,
    /// The class already has a serialVersionUID field
    pub declared: bool,
}

impl UidReport {
    /// `<name>: <uid>`, or a comment line and the field declaration
    pub fn render(&self, as_field: bool, with_annotation: bool) -> String {
        if as_field {
            format!("// {}\n{}", self.class, render_field(self.uid, with_annotation))
        } else {
            format!("{}: {}", self.class, self.uid)
        }
    }
}

/// Lowercase hex, sixteen space-separated bytes per line
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .map(|chunk| chunk.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
