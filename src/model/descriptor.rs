//! Immutable class description consumed by the UID algorithm

use super::modifiers::{modifiers_to_flags, ClassKind, Modifier};
use super::types::JavaType;
use crate::codegen::descriptor::{member_signature, type_to_descriptor};
use crate::consts::access_flags::ACC_INTERFACE;
use crate::error::{Error, Result};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub access_flags: u16,
    pub type_descriptor: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, access_flags: u16, type_descriptor: impl Into<String>) -> Self {
        Self { name: name.into(), access_flags, type_descriptor: type_descriptor.into() }
    }

    /// Build from source modifiers and a (possibly generic) type
    pub fn of_type(name: impl Into<String>, modifiers: &[Modifier], ty: &JavaType) -> Self {
        Self::new(name, modifiers_to_flags(modifiers), type_to_descriptor(ty))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    pub access_flags: u16,
    pub parameter_descriptors: Vec<String>,
}

impl ConstructorDescriptor {
    pub fn new(access_flags: u16, parameter_descriptors: Vec<String>) -> Self {
        Self { access_flags, parameter_descriptors }
    }

    pub fn of_types(modifiers: &[Modifier], params: &[JavaType]) -> Self {
        Self::new(modifiers_to_flags(modifiers), params.iter().map(type_to_descriptor).collect())
    }

    /// `(` parameter descriptors `)V`
    pub fn signature(&self) -> String {
        member_signature(&self.parameter_descriptors, "V")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub access_flags: u16,
    pub parameter_descriptors: Vec<String>,
    pub return_descriptor: String,
}

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        access_flags: u16,
        parameter_descriptors: Vec<String>,
        return_descriptor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_flags,
            parameter_descriptors,
            return_descriptor: return_descriptor.into(),
        }
    }

    pub fn of_types(name: impl Into<String>, modifiers: &[Modifier], params: &[JavaType], ret: &JavaType) -> Self {
        Self::new(
            name,
            modifiers_to_flags(modifiers),
            params.iter().map(type_to_descriptor).collect(),
            type_to_descriptor(ret),
        )
    }

    /// `(` parameter descriptors `)` return descriptor
    pub fn signature(&self) -> String {
        member_signature(&self.parameter_descriptors, &self.return_descriptor)
    }
}

/// Structural description of a class, built once per computation.
///
/// Fields are private: a descriptor is only obtainable through
/// [`ClassDescriptorBuilder`], which enforces a non-empty name and unique
/// interface names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    qualified_name: String,
    kind: ClassKind,
    access_flags: u16,
    interfaces: Vec<String>,
    fields: Vec<FieldDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
    methods: Vec<MethodDescriptor>,
    has_class_init_effect: bool,
}

impl ClassDescriptor {
    pub fn builder(qualified_name: impl Into<String>) -> ClassDescriptorBuilder {
        ClassDescriptorBuilder::new(qualified_name)
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Declared flags plus ACC_INTERFACE for interface kinds
    pub fn access_flags(&self) -> u16 {
        if self.kind.is_interface() {
            self.access_flags | ACC_INTERFACE
        } else {
            self.access_flags
        }
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn has_class_init_effect(&self) -> bool {
        self.has_class_init_effect
    }
}

#[derive(Debug, Clone)]
pub struct ClassDescriptorBuilder {
    qualified_name: String,
    kind: ClassKind,
    access_flags: u16,
    interfaces: Vec<String>,
    fields: Vec<FieldDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
    methods: Vec<MethodDescriptor>,
    has_class_init_effect: bool,
}

impl ClassDescriptorBuilder {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind: ClassKind::Ordinary,
            access_flags: 0,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            has_class_init_effect: false,
        }
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.access_flags = modifiers_to_flags(modifiers);
        self
    }

    pub fn access_flags(mut self, flags: u16) -> Self {
        self.access_flags = flags;
        self
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    pub fn interfaces<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn class_init_effect(mut self, present: bool) -> Self {
        self.has_class_init_effect = present;
        self
    }

    pub fn build(self) -> Result<ClassDescriptor> {
        if self.qualified_name.is_empty() {
            return Err(Error::EmptyClassName);
        }
        let mut seen = HashSet::new();
        let interfaces = self
            .interfaces
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Ok(ClassDescriptor {
            qualified_name: self.qualified_name,
            kind: self.kind,
            access_flags: self.access_flags,
            interfaces,
            fields: self.fields,
            constructors: self.constructors,
            methods: self.methods,
            has_class_init_effect: self.has_class_init_effect,
        })
    }
}
