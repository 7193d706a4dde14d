//! suidgen
//!
//! Computes the default `serialVersionUID` of a Java class, the value the
//! JVM assigns when a serializable class declares none.
//!
//! ## Architecture
//!
//! - **model**: immutable class descriptor, modifiers and type references
//! - **codegen**: erasure, binary descriptors, canonical byte stream, SHA-1 fold
//! - **semantic**: builds descriptors from a class snapshot (interface
//!   closure, constant initializers, implicit constructors)
//! - **render**: source text of the generated field
//! - **bin**: command-line interface
//!
//! ## Computation Flow
//!
//! ```text
//! ClassModel → DescriptorBuilder → ClassDescriptor → canonical bytes → SHA-1 → i64
//! ```

pub mod codegen;
pub mod config;
pub mod consts;
pub mod error;
pub mod model;
pub mod render;
pub mod semantic;

pub use config::{Config, InterfaceMode};
pub use error::{Error, Result};
pub use model::{ClassDescriptor, ClassKind, JavaType, Modifier};

use render::{has_serial_version_uid, UidReport};
use semantic::{ClassHierarchy, DescriptorBuilder};

/// Default serialVersionUID of a fully resolved class descriptor
pub fn compute_serial_version_uid(desc: &ClassDescriptor) -> Result<i64> {
    codegen::compute(desc)
}

/// Describe `class_name` from the snapshot and compute its serialVersionUID
pub fn serial_version_uid_of(hierarchy: &ClassHierarchy, class_name: &str, config: &Config) -> Result<i64> {
    let desc = DescriptorBuilder::from_config(hierarchy, config).build(class_name)?;
    compute_serial_version_uid(&desc)
}

/// Canonical byte stream hashed for `class_name`
pub fn canonical_bytes_of(hierarchy: &ClassHierarchy, class_name: &str, config: &Config) -> Result<Vec<u8>> {
    let desc = DescriptorBuilder::from_config(hierarchy, config).build(class_name)?;
    codegen::encode(&desc)
}

/// UIDs for `class_name`, or for every serialization candidate in the
/// snapshot: each non-interface class, limited to those already
/// serializable when `config.add_serializable` is off
pub fn serial_version_uids(
    hierarchy: &ClassHierarchy,
    class_name: Option<&str>,
    config: &Config,
) -> Result<Vec<UidReport>> {
    let builder = DescriptorBuilder::from_config(hierarchy, config);
    let targets = match class_name {
        Some(name) => vec![hierarchy
            .get(name)
            .ok_or_else(|| Error::UnknownClass { name: name.to_string() })?],
        None => {
            let mut targets = Vec::new();
            for class in hierarchy.classes().filter(|c| !c.kind.is_interface()) {
                if config.add_serializable || builder.is_serializable(class)? {
                    targets.push(class);
                }
            }
            targets
        }
    };

    targets
        .into_iter()
        .map(|class| -> Result<UidReport> {
            let desc = builder.describe(class)?;
            Ok(UidReport {
                class: class.name.clone(),
                uid: compute_serial_version_uid(&desc)?,
                declared: has_serial_version_uid(class),
            })
        })
        .collect()
}
