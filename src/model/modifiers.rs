//! Source-level modifiers and their JVM access flag bits

use crate::consts::access_flags::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    // Java 8: default interface method
    Default,
}

impl Modifier {
    /// The access flag bit for this modifier, or 0 when it has none
    pub fn flag(self) -> u16 {
        match self {
            Modifier::Public => ACC_PUBLIC,
            Modifier::Private => ACC_PRIVATE,
            Modifier::Protected => ACC_PROTECTED,
            Modifier::Static => ACC_STATIC,
            Modifier::Final => ACC_FINAL,
            Modifier::Abstract => ACC_ABSTRACT,
            Modifier::Native => ACC_NATIVE,
            Modifier::Synchronized => ACC_SYNCHRONIZED,
            Modifier::Transient => ACC_TRANSIENT,
            Modifier::Volatile => ACC_VOLATILE,
            Modifier::Strictfp => ACC_STRICT,
            Modifier::Default => 0,
        }
    }
}

/// Helper function to convert modifiers to access flags
pub fn modifiers_to_flags(modifiers: &[Modifier]) -> u16 {
    modifiers.iter().fold(0, |flags, m| flags | m.flag())
}

/// Kind of type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Ordinary,
    Interface,
    Annotation,
    Enum,
    Record,
}

impl ClassKind {
    /// Interfaces and annotation types carry ACC_INTERFACE
    pub fn is_interface(self) -> bool {
        matches!(self, ClassKind::Interface | ClassKind::Annotation)
    }

    /// Kinds whose default serialVersionUID is the constant 0
    pub fn has_fixed_uid(self) -> bool {
        !matches!(self, ClassKind::Ordinary)
    }
}
