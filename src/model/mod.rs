//! Input model: modifiers, type references and the class descriptor

pub mod descriptor;
pub mod modifiers;
pub mod types;

pub use descriptor::{
    ClassDescriptor, ClassDescriptorBuilder, ConstructorDescriptor, FieldDescriptor, MethodDescriptor,
};
pub use modifiers::{modifiers_to_flags, ClassKind, Modifier};
pub use types::{JavaType, PrimitiveType, TypeScope};
