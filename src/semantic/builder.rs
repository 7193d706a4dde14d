//! Turns a snapshot class into an immutable `ClassDescriptor`

use super::closure::{DirectInterfaces, InterfaceClosure, TransitiveInterfaces};
use super::constants::{has_class_init_effect, ConstantEvaluator, HintedConstants};
use super::hierarchy::{type_params_of, ClassHierarchy, ClassModel, ConstructorModel, MethodModel};
use crate::config::{Config, InterfaceMode};
use crate::consts::JAVA_IO_SERIALIZABLE;
use crate::error::{Error, Result};
use crate::model::{
    ClassDescriptor, ClassKind, ConstructorDescriptor, FieldDescriptor, JavaType, MethodDescriptor, Modifier,
    TypeScope,
};

pub struct DescriptorBuilder<'a> {
    hierarchy: &'a ClassHierarchy,
    closure: Box<dyn InterfaceClosure + 'a>,
    constants: Box<dyn ConstantEvaluator + 'a>,
    add_serializable: bool,
}

impl<'a> DescriptorBuilder<'a> {
    /// Transitive interface closure, snapshot-hinted constants, and classes
    /// described as implementing `java.io.Serializable`
    pub fn new(hierarchy: &'a ClassHierarchy) -> Self {
        Self {
            hierarchy,
            closure: Box::new(TransitiveInterfaces::new()),
            constants: Box::new(HintedConstants),
            add_serializable: true,
        }
    }

    pub fn from_config(hierarchy: &'a ClassHierarchy, config: &Config) -> Self {
        let builder = Self::new(hierarchy).with_serializable_added(config.add_serializable);
        match config.interface_mode {
            InterfaceMode::Transitive => builder,
            InterfaceMode::Direct => builder.with_closure(DirectInterfaces),
        }
    }

    pub fn with_closure(mut self, closure: impl InterfaceClosure + 'a) -> Self {
        self.closure = Box::new(closure);
        self
    }

    pub fn with_constants(mut self, constants: impl ConstantEvaluator + 'a) -> Self {
        self.constants = Box::new(constants);
        self
    }

    /// When set, an ordinary class that is not serializable through any of
    /// its supertypes is described with `java.io.Serializable` appended to
    /// its interfaces, as it reads once the interface has been added
    pub fn with_serializable_added(mut self, enabled: bool) -> Self {
        self.add_serializable = enabled;
        self
    }

    /// Whether `java.io.Serializable` is among the class's supertypes
    pub fn is_serializable(&self, class: &ClassModel) -> Result<bool> {
        let names = TransitiveInterfaces::new().collect(class, self.hierarchy)?;
        Ok(names.iter().any(|name| name == JAVA_IO_SERIALIZABLE))
    }

    /// Describe the snapshot class named `name`
    pub fn build(&self, name: &str) -> Result<ClassDescriptor> {
        let class = self
            .hierarchy
            .get(name)
            .ok_or_else(|| Error::UnknownClass { name: name.to_string() })?;
        self.describe(class)
    }

    pub fn describe(&self, class: &ClassModel) -> Result<ClassDescriptor> {
        let scope = self.hierarchy.scope_for(class)?;
        let mut interfaces = self.closure.collect(class, self.hierarchy)?;
        if self.add_serializable
            && class.kind == ClassKind::Ordinary
            && !interfaces.iter().any(|name| name == JAVA_IO_SERIALIZABLE)
            && !self.is_serializable(class)?
        {
            log::debug!("{} described as implementing {}", class.name, JAVA_IO_SERIALIZABLE);
            interfaces.push(JAVA_IO_SERIALIZABLE.to_string());
        }

        let mut builder = ClassDescriptor::builder(class.name.clone())
            .kind(class.kind)
            .modifiers(&class.modifiers)
            .interfaces(interfaces)
            .class_init_effect(has_class_init_effect(class, self.constants.as_ref()));

        for field in &class.fields {
            let ty = scope.parse(&field.ty)?;
            builder = builder.field(FieldDescriptor::of_type(field.name.clone(), &field.modifiers, &ty));
        }

        if class.constructors.is_empty() && !class.kind.is_interface() {
            builder = builder.constructor(ConstructorDescriptor::of_types(&implicit_constructor_modifiers(class), &[]));
        }
        for constructor in &class.constructors {
            builder = builder.constructor(describe_constructor(&scope, constructor)?);
        }

        for method in &class.methods {
            builder = builder.method(describe_method(&scope, method)?);
        }

        builder.build()
    }
}

/// The compiler-supplied default constructor takes the class's access level
fn implicit_constructor_modifiers(class: &ClassModel) -> Vec<Modifier> {
    class
        .modifiers
        .iter()
        .copied()
        .filter(|m| matches!(m, Modifier::Public | Modifier::Protected | Modifier::Private))
        .collect()
}

fn parse_all(scope: &TypeScope, texts: &[String]) -> Result<Vec<JavaType>> {
    texts.iter().map(|t| scope.parse(t)).collect()
}

fn describe_constructor(scope: &TypeScope, constructor: &ConstructorModel) -> Result<ConstructorDescriptor> {
    let scope = scope.enter_type_params(&type_params_of(&constructor.type_params))?;
    let params = parse_all(&scope, &constructor.params)?;
    Ok(ConstructorDescriptor::of_types(&constructor.modifiers, &params))
}

fn describe_method(scope: &TypeScope, method: &MethodModel) -> Result<MethodDescriptor> {
    let scope = scope.enter_type_params(&type_params_of(&method.type_params))?;
    let params = parse_all(&scope, &method.params)?;
    let ret = scope.parse(&method.returns)?;
    Ok(MethodDescriptor::of_types(method.name.clone(), &method.modifiers, &params, &ret))
}
