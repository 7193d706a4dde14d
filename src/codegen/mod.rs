//! Descriptor encoding, canonical byte stream and digest folding
//!
//! ```text
//! JavaType ─erasure─► descriptor ─┐
//! ClassDescriptor ───────────────►├─ canonical ─► digest ─► i64
//! ```

pub mod canonical;
pub mod data_output;
pub mod descriptor;
pub mod digest;
pub mod erasure;
pub mod suid;

pub use canonical::encode;
pub use descriptor::{member_signature, type_to_descriptor};
pub use digest::{fold, fold_digest, DigestProvider, Sha1Provider};
pub use suid::{compute, compute_with};
