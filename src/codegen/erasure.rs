//! Java generic type erasure
//!
//! # Type Erasure Rules (JLS §4.6):
//! 1. The erasure of a parameterized type G<T1,...,Tn> is |G|
//! 2. The erasure of an array type T[] is |T|[]
//! 3. The erasure of a type variable is the erasure of its leftmost bound
//! 4. The erasure of every other type is the type itself
//!
//! Unresolved names and unbounded variables erase to `java.lang.Object`.

use crate::model::JavaType;

/// Erase a type according to Java type erasure rules
pub fn erase(ty: &JavaType) -> JavaType {
    match ty {
        JavaType::Primitive(_) => ty.clone(),
        JavaType::Array(component) => JavaType::Array(Box::new(erase(component))),
        JavaType::Class { name, type_args } if !name.is_empty() => {
            if type_args.is_empty() {
                ty.clone()
            } else {
                JavaType::class(name.clone())
            }
        }
        JavaType::Class { .. } => JavaType::object(),
        JavaType::TypeVariable { bounds, .. } => bounds.first().map(erase).unwrap_or_else(JavaType::object),
        JavaType::Wildcard { bound: Some(bound), upper: true } => erase(bound),
        JavaType::Wildcard { .. } => JavaType::object(),
        JavaType::Unresolved(name) => {
            log::warn!("unresolved type '{}' erased to java.lang.Object", name);
            JavaType::object()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrimitiveType;

    #[test]
    fn test_primitive_type_erasure() {
        let int_type = JavaType::Primitive(PrimitiveType::Int);
        assert_eq!(erase(&int_type), int_type);
    }

    #[test]
    fn test_parameterized_type_erasure() {
        let list = JavaType::parameterized("java.util.List", vec![JavaType::class("java.lang.String")]);
        assert_eq!(erase(&list), JavaType::class("java.util.List"));
    }

    #[test]
    fn test_type_variable_uses_leftmost_bound() {
        let t = JavaType::TypeVariable {
            name: "T".into(),
            bounds: vec![
                JavaType::parameterized("java.lang.Comparable", vec![JavaType::Unresolved("T".into())]),
                JavaType::class("java.io.Serializable"),
            ],
        };
        assert_eq!(erase(&t), JavaType::class("java.lang.Comparable"));

        let unbounded = JavaType::TypeVariable { name: "E".into(), bounds: vec![] };
        assert_eq!(erase(&unbounded), JavaType::object());
    }

    #[test]
    fn test_array_of_generic_erasure() {
        let arr = JavaType::array_of(
            JavaType::parameterized("java.util.Map", vec![JavaType::object(), JavaType::object()]),
            2,
        );
        assert_eq!(erase(&arr), JavaType::array_of(JavaType::class("java.util.Map"), 2));
    }

    #[test]
    fn test_wildcards() {
        let upper = JavaType::Wildcard { bound: Some(Box::new(JavaType::class("java.lang.Number"))), upper: true };
        let lower = JavaType::Wildcard { bound: Some(Box::new(JavaType::class("java.lang.Number"))), upper: false };
        assert_eq!(erase(&upper), JavaType::class("java.lang.Number"));
        assert_eq!(erase(&lower), JavaType::object());
    }

    #[test]
    fn test_unresolved_falls_back_to_object() {
        assert_eq!(erase(&JavaType::Unresolved("Missing".into())), JavaType::object());
        assert_eq!(erase(&JavaType::class("")), JavaType::object());
    }
}
