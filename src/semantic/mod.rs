//! Semantic side: from a snapshot of declared classes to class descriptors
//!
//! The UID algorithm never looks at source code. Everything it needs (the
//! interface list, erased member descriptors, whether `<clinit>` exists) is
//! resolved here, once, into an immutable `ClassDescriptor`.

pub mod builder;
pub mod closure;
pub mod constants;
pub mod hierarchy;

pub use builder::DescriptorBuilder;
pub use closure::{DirectInterfaces, InterfaceClosure, TransitiveInterfaces};
pub use constants::{has_class_init_effect, ConstantEvaluator, HintedConstants};
pub use hierarchy::{
    ClassHierarchy, ClassModel, ConstructorModel, FieldModel, InitializerModel, MethodModel, Snapshot,
    Supertypes, TypeParamModel,
};
