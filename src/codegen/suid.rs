//! Default serialVersionUID computation

use super::canonical::encode;
use super::digest::{fold_with, DigestProvider, Sha1Provider};
use crate::error::Result;
use crate::model::ClassDescriptor;

/// Compute the default serialVersionUID of `desc`.
///
/// Interfaces, annotation types, enums and records get the constant 0.
/// For records this differs from what the JVM does (it still hashes them)
/// and is kept as an explicit rule.
pub fn compute(desc: &ClassDescriptor) -> Result<i64> {
    compute_with(desc, &Sha1Provider)
}

pub fn compute_with(desc: &ClassDescriptor, provider: &dyn DigestProvider) -> Result<i64> {
    if desc.kind().has_fixed_uid() {
        log::debug!("{} is a {:?}: serialVersionUID 0", desc.qualified_name(), desc.kind());
        return Ok(0);
    }
    let bytes = encode(desc)?;
    let uid = fold_with(&bytes, provider)?;
    log::debug!("{}: serialVersionUID {}", desc.qualified_name(), uid);
    Ok(uid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ClassKind, Modifier};

    struct Unavailable;

    impl DigestProvider for Unavailable {
        fn algorithm(&self) -> &str {
            "SHA-1"
        }

        fn digest(&self, _bytes: &[u8]) -> Result<Vec<u8>> {
            Err(Error::digest_unavailable("SHA-1 not installed"))
        }
    }

    #[test]
    fn test_fixed_kinds_short_circuit() {
        for kind in [ClassKind::Interface, ClassKind::Annotation, ClassKind::Enum, ClassKind::Record] {
            let desc = ClassDescriptor::builder("a.K")
                .kind(kind)
                .modifiers(&[Modifier::Public])
                .class_init_effect(true)
                .build()
                .unwrap();
            assert_eq!(compute(&desc).unwrap(), 0, "{:?}", kind);
            // no digest is requested on the constant path
            assert_eq!(compute_with(&desc, &Unavailable).unwrap(), 0);
        }
    }

    #[test]
    fn test_digest_fault_surfaces() {
        let desc = ClassDescriptor::builder("a.K").build().unwrap();
        assert!(matches!(compute_with(&desc, &Unavailable), Err(Error::DigestUnavailable { .. })));
    }

    #[test]
    fn test_empty_public_class() {
        let desc = ClassDescriptor::builder("com.example.Empty")
            .modifiers(&[Modifier::Public])
            .build()
            .unwrap();
        assert_eq!(compute(&desc).unwrap(), 7_438_848_999_758_652_988);
    }
}
