//! Interface collection strategies

use super::hierarchy::{ClassHierarchy, ClassModel};
use crate::consts::MAX_HIERARCHY_STEPS;
use crate::error::Result;
use std::collections::{HashSet, VecDeque};

/// Supplies the interface names hashed for a class
pub trait InterfaceClosure {
    fn collect(&self, class: &ClassModel, hierarchy: &ClassHierarchy) -> Result<Vec<String>>;
}

/// Only the interfaces named in the class's own declaration.
///
/// This is what `Class.getInterfaces()` returns, so it matches the JVM's
/// own computation for classes with inherited interfaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectInterfaces;

impl InterfaceClosure for DirectInterfaces {
    fn collect(&self, class: &ClassModel, hierarchy: &ClassHierarchy) -> Result<Vec<String>> {
        Ok(hierarchy.supertypes(class)?.interfaces)
    }
}

/// Breadth-first closure over superclasses and superinterfaces, in
/// first-seen order. Types missing from the snapshot contribute their name
/// but nothing above them.
#[derive(Debug, Clone, Copy)]
pub struct TransitiveInterfaces {
    max_steps: usize,
}

impl TransitiveInterfaces {
    pub fn new() -> Self {
        Self { max_steps: MAX_HIERARCHY_STEPS }
    }

    pub fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps }
    }
}

impl Default for TransitiveInterfaces {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceClosure for TransitiveInterfaces {
    fn collect(&self, class: &ClassModel, hierarchy: &ClassHierarchy) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let mut visited_classes = HashSet::from([class.name.clone()]);
        let mut queue = VecDeque::from([class]);
        let mut steps = 0;

        while let Some(current) = queue.pop_front() {
            steps += 1;
            if steps > self.max_steps {
                log::warn!("interface walk for '{}' stopped after {} steps", class.name, self.max_steps);
                break;
            }
            let supers = hierarchy.supertypes(current)?;
            for name in supers.interfaces {
                if seen.insert(name.clone()) {
                    if let Some(model) = hierarchy.get(&name) {
                        queue.push_back(model);
                    }
                    names.push(name);
                }
            }
            if let Some(superclass) = supers.superclass {
                if visited_classes.insert(superclass.clone()) {
                    if let Some(model) = hierarchy.get(&superclass) {
                        queue.push_back(model);
                    }
                }
            }
        }
        Ok(names)
    }
}
