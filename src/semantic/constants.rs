//! Compile-time constant decisions for static field initializers

use super::hierarchy::{ClassModel, InitializerModel};

/// Decides whether an initializer is a compile-time constant.
/// Implementations answer `false` whenever they are unsure.
pub trait ConstantEvaluator {
    fn is_compile_time_constant(&self, initializer: &InitializerModel) -> bool;
}

/// Trusts the snapshot's `constant` verdict; no verdict means non-constant
#[derive(Debug, Default, Clone, Copy)]
pub struct HintedConstants;

impl ConstantEvaluator for HintedConstants {
    fn is_compile_time_constant(&self, initializer: &InitializerModel) -> bool {
        initializer.constant.unwrap_or(false)
    }
}

impl<F> ConstantEvaluator for F
where
    F: Fn(&InitializerModel) -> bool,
{
    fn is_compile_time_constant(&self, initializer: &InitializerModel) -> bool {
        self(initializer)
    }
}

/// A static initializer block, or a static field whose initializer is not
/// a compile-time constant, gives the class a `<clinit>`
pub fn has_class_init_effect(class: &ClassModel, evaluator: &dyn ConstantEvaluator) -> bool {
    if class.static_initializer {
        return true;
    }
    class.fields.iter().filter(|f| f.is_static()).any(|f| match &f.initializer {
        Some(init) => !evaluator.is_compile_time_constant(init),
        None => false,
    })
}
