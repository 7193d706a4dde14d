//! Canonical byte encoding of a class descriptor
//!
//! The stream is written in the exact order `ObjectStreamClass` uses when it
//! computes a default serialVersionUID:
//!
//! ```text
//! class name, class modifiers,
//! interface names (sorted),
//! fields (sorted by name, private static / private transient skipped),
//! <clinit> when the class has a class-initialization effect,
//! non-private constructors (sorted by signature),
//! non-private methods (sorted by name, then signature)
//! ```
//!
//! Member signatures are written with `/` replaced by `.`, field descriptors
//! are not. Sorting always uses the unreplaced signature.

use super::data_output::DataOutput;
use crate::consts::access_flags::{ACC_PRIVATE, ACC_STATIC, ACC_TRANSIENT};
use crate::consts::{
    CLASS_MODIFIER_MASK, CLINIT_DESCRIPTOR, CLINIT_NAME, FIELD_MODIFIER_MASK, INIT_NAME, METHOD_MODIFIER_MASK,
};
use crate::error::Result;
use crate::model::{ClassDescriptor, FieldDescriptor};

/// Whether a field participates in the canonical form
pub fn is_hashed_field(field: &FieldDescriptor) -> bool {
    let mods = field.access_flags & FIELD_MODIFIER_MASK;
    mods & ACC_PRIVATE == 0 || mods & (ACC_STATIC | ACC_TRANSIENT) == 0
}

/// Encode a descriptor into the byte stream that gets digested
pub fn encode(desc: &ClassDescriptor) -> Result<Vec<u8>> {
    let mut out = DataOutput::with_capacity(256);

    out.write_utf(desc.qualified_name())?;
    out.write_int(i32::from(desc.access_flags() & CLASS_MODIFIER_MASK));

    let mut interfaces: Vec<&str> = desc.interfaces().iter().map(String::as_str).collect();
    interfaces.sort_unstable();
    for name in interfaces {
        out.write_utf(name)?;
    }

    let mut fields: Vec<&FieldDescriptor> = desc.fields().iter().collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    for field in fields.into_iter().filter(|f| is_hashed_field(f)) {
        log::trace!("field {} {}", field.name, field.type_descriptor);
        out.write_utf(&field.name)?;
        out.write_int(i32::from(field.access_flags & FIELD_MODIFIER_MASK));
        out.write_utf(&field.type_descriptor)?;
    }

    if desc.has_class_init_effect() {
        out.write_utf(CLINIT_NAME)?;
        out.write_int(i32::from(ACC_STATIC));
        out.write_utf(CLINIT_DESCRIPTOR)?;
    }

    let mut constructors: Vec<(String, u16)> = desc
        .constructors()
        .iter()
        .filter(|c| c.access_flags & ACC_PRIVATE == 0)
        .map(|c| (c.signature(), c.access_flags & METHOD_MODIFIER_MASK))
        .collect();
    constructors.sort();
    for (signature, mods) in constructors {
        log::trace!("constructor {}", signature);
        out.write_utf(INIT_NAME)?;
        out.write_int(i32::from(mods));
        out.write_utf(&signature.replace('/', "."))?;
    }

    let mut methods: Vec<(&str, String, u16)> = desc
        .methods()
        .iter()
        .filter(|m| m.access_flags & ACC_PRIVATE == 0)
        .map(|m| (m.name.as_str(), m.signature(), m.access_flags & METHOD_MODIFIER_MASK))
        .collect();
    methods.sort();
    for (name, signature, mods) in methods {
        log::trace!("method {}{}", name, signature);
        out.write_utf(name)?;
        out.write_int(i32::from(mods));
        out.write_utf(&signature.replace('/', "."))?;
    }

    log::debug!("encoded {} into {} bytes", desc.qualified_name(), out.len());
    Ok(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::access_flags::*;
    use crate::model::{ClassDescriptor, ConstructorDescriptor, MethodDescriptor, Modifier};

    #[test]
    fn test_empty_class_encoding() {
        let desc = ClassDescriptor::builder("com.example.Empty")
            .modifiers(&[Modifier::Public])
            .build()
            .unwrap();
        let bytes = encode(&desc).unwrap();
        let mut expected = vec![0x00, 0x11];
        expected.extend_from_slice(b"com.example.Empty");
        expected.extend_from_slice(&[0, 0, 0, 1]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_class_modifier_mask() {
        let desc = ClassDescriptor::builder("a.B")
            .access_flags(ACC_PUBLIC | ACC_FINAL | ACC_STATIC | ACC_STRICT)
            .build()
            .unwrap();
        let bytes = encode(&desc).unwrap();
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0x11]);
    }

    #[test]
    fn test_field_visibility_rule() {
        let field = |flags| FieldDescriptor::new("f", flags, "I");
        assert!(is_hashed_field(&field(ACC_PUBLIC)));
        assert!(is_hashed_field(&field(ACC_PRIVATE)));
        assert!(is_hashed_field(&field(ACC_PRIVATE | ACC_FINAL)));
        assert!(is_hashed_field(&field(ACC_STATIC | ACC_TRANSIENT)));
        assert!(!is_hashed_field(&field(ACC_PRIVATE | ACC_STATIC)));
        assert!(!is_hashed_field(&field(ACC_PRIVATE | ACC_TRANSIENT)));
        assert!(!is_hashed_field(&field(ACC_PRIVATE | ACC_STATIC | ACC_FINAL)));
    }

    #[test]
    fn test_clinit_triple() {
        let base = ClassDescriptor::builder("a.B").build().unwrap();
        let with_clinit = ClassDescriptor::builder("a.B").class_init_effect(true).build().unwrap();
        let plain = encode(&base).unwrap();
        let bytes = encode(&with_clinit).unwrap();

        let mut tail = vec![0x00, 0x08];
        tail.extend_from_slice(b"<clinit>");
        tail.extend_from_slice(&[0, 0, 0, 0x08, 0x00, 0x03]);
        tail.extend_from_slice(b"()V");
        assert_eq!(&bytes[..plain.len()], plain.as_slice());
        assert_eq!(&bytes[plain.len()..], tail.as_slice());
    }

    #[test]
    fn test_member_signatures_use_dots() {
        let desc = ClassDescriptor::builder("a.B")
            .constructor(ConstructorDescriptor::new(ACC_PUBLIC, vec!["Ljava/lang/String;".into()]))
            .method(MethodDescriptor::new("get", ACC_PUBLIC, vec![], "Ljava/util/List;"))
            .build()
            .unwrap();
        let bytes = encode(&desc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(Ljava.lang.String;)V"));
        assert!(text.contains("()Ljava.util.List;"));
        assert!(!text.contains('/'));
    }

    #[test]
    fn test_method_order_by_name_then_signature() {
        let m = |name: &str, ret: &str| MethodDescriptor::new(name, ACC_PUBLIC, vec![], ret);
        let desc = ClassDescriptor::builder("a.B")
            .method(m("b", "V"))
            .method(m("a", "J"))
            .method(m("a", "I"))
            .build()
            .unwrap();
        let reordered = ClassDescriptor::builder("a.B")
            .method(m("a", "I"))
            .method(m("a", "J"))
            .method(m("b", "V"))
            .build()
            .unwrap();
        let bytes = encode(&desc).unwrap();
        assert_eq!(bytes, encode(&reordered).unwrap());

        let text = String::from_utf8_lossy(&bytes).into_owned();
        let i = text.find("()I").unwrap();
        let j = text.find("()J").unwrap();
        let k = text.find("()V").unwrap();
        assert!(i < j && j < k);
    }
}
