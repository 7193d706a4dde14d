//! Utilities to build method/field descriptors

use super::erasure::erase;
use crate::consts::OBJECT_DESCRIPTOR;
use crate::model::JavaType;

/// Binary type descriptor of the erased type. Never fails: anything that
/// erases to something unrepresentable becomes `Ljava/lang/Object;`.
pub fn type_to_descriptor(ty: &JavaType) -> String {
    let mut desc = String::new();
    push_descriptor(&erase(ty), &mut desc);
    desc
}

fn push_descriptor(erased: &JavaType, desc: &mut String) {
    match erased {
        JavaType::Primitive(p) => desc.push(p.descriptor()),
        JavaType::Array(component) => {
            desc.push('[');
            push_descriptor(component, desc);
        }
        JavaType::Class { name, .. } => {
            desc.push('L');
            desc.push_str(&name.replace('.', "/"));
            desc.push(';');
        }
        // erase() never yields these
        _ => desc.push_str(OBJECT_DESCRIPTOR),
    }
}

/// Join already-encoded parameter descriptors and a return descriptor
pub fn member_signature(params: &[String], ret: &str) -> String {
    let len = params.iter().map(String::len).sum::<usize>() + ret.len() + 2;
    let mut d = String::with_capacity(len);
    d.push('(');
    for p in params {
        d.push_str(p);
    }
    d.push(')');
    d.push_str(ret);
    d
}
