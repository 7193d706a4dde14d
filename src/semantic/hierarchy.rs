//! Snapshot of declared classes, as produced by a front end
//!
//! The snapshot is plain data: names are source text (simple or qualified,
//! possibly generic) and are resolved on demand against the declaring
//! class's package, imports and type parameters.

use crate::error::Result;
use crate::model::{ClassKind, JavaType, Modifier, TypeScope};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParamModel {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

/// A field initializer expression with an optional constness verdict
/// from whoever produced the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializerModel {
    pub expression: String,
    #[serde(default)]
    pub constant: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub initializer: Option<InitializerModel>,
}

impl FieldModel {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstructorModel {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub type_params: Vec<TypeParamModel>,
    #[serde(default)]
    pub params: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub type_params: Vec<TypeParamModel>,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default = "void_return")]
    pub returns: String,
}

fn void_return() -> String {
    "void".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Binary name (`com.example.Outer$Inner`)
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub type_params: Vec<TypeParamModel>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub constructors: Vec<ConstructorModel>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    #[serde(default)]
    pub static_initializer: bool,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Ordinary,
            modifiers: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            type_params: Vec::new(),
            imports: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            static_initializer: false,
        }
    }

    pub fn package(&self) -> &str {
        self.name.rsplit_once('.').map(|(pkg, _)| pkg).unwrap_or("")
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// On-disk form: `{ "classes": [ ... ] }`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub classes: Vec<ClassModel>,
}

pub(crate) fn type_params_of(params: &[TypeParamModel]) -> Vec<(String, Vec<String>)> {
    params.iter().map(|p| (p.name.clone(), p.bounds.clone())).collect()
}

/// Resolved direct supertypes of one class
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Supertypes {
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
}

/// Class lookup by binary name
#[derive(Debug, Default, Clone)]
pub struct ClassHierarchy {
    classes: Vec<ClassModel>,
    index: HashMap<String, usize>,
    // Shared with every scope handed out
    known: Arc<HashSet<String>>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes(classes: impl IntoIterator<Item = ClassModel>) -> Self {
        let mut hierarchy = Self::new();
        for class in classes {
            hierarchy.insert(class);
        }
        hierarchy
    }

    /// Add a class; a later declaration of the same name replaces the earlier one
    pub fn insert(&mut self, class: ClassModel) {
        match self.index.get(&class.name) {
            Some(&i) => {
                log::warn!("duplicate class '{}' in snapshot, keeping the last one", class.name);
                self.classes[i] = class;
            }
            None => {
                self.index.insert(class.name.clone(), self.classes.len());
                Arc::make_mut(&mut self.known).insert(class.name.clone());
                self.classes.push(class);
            }
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        Ok(Self::from_classes(snapshot.classes))
    }

    /// Load a snapshot file, or every `*.json` file under a directory
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_file() {
            return Self::from_json(&fs::read_to_string(path)?);
        }
        let mut hierarchy = Self::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
            if !entry.file_type().is_file() || !is_json {
                continue;
            }
            log::debug!("loading snapshot {}", entry.path().display());
            let snapshot: Snapshot = serde_json::from_str(&fs::read_to_string(entry.path())?)?;
            for class in snapshot.classes {
                hierarchy.insert(class);
            }
        }
        Ok(hierarchy)
    }

    pub fn get(&self, name: &str) -> Option<&ClassModel> {
        self.index.get(name).map(|&i| &self.classes[i])
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Type scope of a class body: package, imports, enclosing classes,
    /// the snapshot's classes and the class's own type parameters
    pub fn scope_for(&self, class: &ClassModel) -> Result<TypeScope> {
        let mut scope = TypeScope::new()
            .with_package(class.package())
            .with_enclosing(&class.name)
            .with_known(Arc::clone(&self.known));
        for import in &class.imports {
            scope.import(import);
        }
        scope.enter_type_params(&type_params_of(&class.type_params))
    }

    /// Superclass and declared interfaces, resolved in one scope.
    /// An unresolvable supertype keeps the name it was written with.
    pub fn supertypes(&self, class: &ClassModel) -> Result<Supertypes> {
        let scope = self.scope_for(class)?;
        let superclass = match &class.superclass {
            Some(text) => Some(supertype_name(&scope, text)?),
            None => None,
        };
        let interfaces = class
            .interfaces
            .iter()
            .map(|text| supertype_name(&scope, text))
            .collect::<Result<Vec<_>>>()?;
        Ok(Supertypes { superclass, interfaces })
    }
}

fn supertype_name(scope: &TypeScope, text: &str) -> Result<String> {
    Ok(match scope.parse(text)? {
        JavaType::Class { name, .. } => name,
        JavaType::Unresolved(name) => name,
        _ => text.to_string(),
    })
}
