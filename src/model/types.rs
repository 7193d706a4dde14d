//! Java type references and a parser for their source syntax
//!
//! `JavaType` is the input of the descriptor encoder. It keeps generic
//! information (type arguments, type variables, wildcards) so that erasure can
//! be applied uniformly, and it has an explicit `Unresolved` case so that a
//! partially resolved model degrades instead of failing.

use crate::consts::{is_well_known_type, JAVA_LANG_OBJECT, JAVA_LANG_SIMPLE_TYPES};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    Void,
}

impl PrimitiveType {
    pub fn from_name(name: &str) -> Option<Self> {
        let prim = match name {
            "byte" => PrimitiveType::Byte,
            "char" => PrimitiveType::Char,
            "double" => PrimitiveType::Double,
            "float" => PrimitiveType::Float,
            "int" => PrimitiveType::Int,
            "long" => PrimitiveType::Long,
            "short" => PrimitiveType::Short,
            "boolean" => PrimitiveType::Boolean,
            "void" => PrimitiveType::Void,
            _ => return None,
        };
        Some(prim)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Double => "double",
            PrimitiveType::Float => "float",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Short => "short",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Void => "void",
        }
    }

    /// Single-letter JVM descriptor
    pub fn descriptor(self) -> char {
        match self {
            PrimitiveType::Byte => 'B',
            PrimitiveType::Char => 'C',
            PrimitiveType::Double => 'D',
            PrimitiveType::Float => 'F',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Short => 'S',
            PrimitiveType::Boolean => 'Z',
            PrimitiveType::Void => 'V',
        }
    }
}

/// A (possibly generic) Java type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(PrimitiveType),
    Array(Box<JavaType>),
    /// Class or interface type by binary name (`java.util.Map$Entry`)
    Class { name: String, type_args: Vec<JavaType> },
    /// Type variable with its declared bounds, leftmost first
    TypeVariable { name: String, bounds: Vec<JavaType> },
    /// `?`, `? extends B` (upper) or `? super B`
    Wildcard { bound: Option<Box<JavaType>>, upper: bool },
    /// A name the model could not resolve
    Unresolved(String),
}

impl JavaType {
    pub fn class(name: impl Into<String>) -> Self {
        JavaType::Class { name: name.into(), type_args: Vec::new() }
    }

    pub fn parameterized(name: impl Into<String>, type_args: Vec<JavaType>) -> Self {
        JavaType::Class { name: name.into(), type_args }
    }

    pub fn object() -> Self {
        JavaType::class(JAVA_LANG_OBJECT)
    }

    pub fn void() -> Self {
        JavaType::Primitive(PrimitiveType::Void)
    }

    pub fn array_of(component: JavaType, dims: usize) -> Self {
        (0..dims).fold(component, |ty, _| JavaType::Array(Box::new(ty)))
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => f.write_str(p.name()),
            JavaType::Array(component) => write!(f, "{}[]", component),
            JavaType::Class { name, type_args } => {
                f.write_str(name)?;
                if !type_args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in type_args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            JavaType::TypeVariable { name, .. } => f.write_str(name),
            JavaType::Wildcard { bound: None, .. } => f.write_str("?"),
            JavaType::Wildcard { bound: Some(b), upper: true } => write!(f, "? extends {}", b),
            JavaType::Wildcard { bound: Some(b), upper: false } => write!(f, "? super {}", b),
            JavaType::Unresolved(text) => f.write_str(text),
        }
    }
}

impl FromStr for JavaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeScope::default().parse(s)
    }
}

/// Name resolution context for parsing type text
///
/// Resolution order for a simple name: type parameters, member types of the
/// enclosing classes, single-type imports, classes of the current package,
/// on-demand imports, then `java.lang`. Anything else is `Unresolved`.
#[derive(Debug, Clone, Default)]
pub struct TypeScope {
    type_params: HashMap<String, Vec<JavaType>>,
    imports: HashMap<String, String>,
    on_demand: Vec<String>,
    package: Option<String>,
    // Innermost first: `p.Outer$Inner`, then `p.Outer`
    enclosing: Vec<String>,
    known: Arc<HashSet<String>>,
}

impl TypeScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        let package = package.into();
        self.package = if package.is_empty() { None } else { Some(package) };
        self
    }

    /// Body of the class with this binary name; its member types, and those
    /// of every class around it, resolve by simple name
    pub fn with_enclosing(mut self, binary_name: &str) -> Self {
        self.enclosing.clear();
        let mut current = binary_name;
        loop {
            self.enclosing.push(current.to_string());
            match current.rsplit_once('$') {
                Some((outer, _)) if !outer.is_empty() => current = outer,
                _ => break,
            }
        }
        self
    }

    /// Share an existing set of known binary names
    pub fn with_known(mut self, known: Arc<HashSet<String>>) -> Self {
        self.known = known;
        self
    }

    /// Register an import: single-type (`java.util.List`) or on-demand (`java.util.*`)
    pub fn import(&mut self, qualified: &str) {
        let qualified = qualified.trim();
        if let Some(package) = qualified.strip_suffix(".*") {
            if !self.on_demand.iter().any(|p| p == package) {
                self.on_demand.push(package.to_string());
            }
            return;
        }
        let simple = qualified.rsplit('.').next().unwrap_or(qualified);
        self.imports.insert(simple.to_string(), qualified.to_string());
    }

    /// Register a class the model knows about, by binary name
    pub fn declare_known(&mut self, qualified: impl Into<String>) {
        Arc::make_mut(&mut self.known).insert(qualified.into());
    }

    /// Enter a generic declaration: returns a child scope with the given
    /// type parameters in view. Bounds may refer to any of the parameters,
    /// in any order.
    pub fn enter_type_params(&self, params: &[(String, Vec<String>)]) -> Result<TypeScope> {
        let mut scope = self.clone();
        for (name, _) in params {
            scope.type_params.insert(name.clone(), Vec::new());
        }
        // A chain T -> U -> ... settles after at most one pass per parameter
        for _ in 0..params.len() {
            let mut resolved = Vec::with_capacity(params.len());
            for (name, bounds) in params {
                let bounds = bounds
                    .iter()
                    .map(|b| scope.parse(b))
                    .collect::<Result<Vec<_>>>()?;
                resolved.push((name.clone(), bounds));
            }
            let settled = resolved
                .iter()
                .all(|(name, bounds)| scope.type_params.get(name) == Some(bounds));
            scope.type_params.extend(resolved);
            if settled {
                break;
            }
        }
        Ok(scope)
    }

    /// Parse Java type syntax in this scope
    pub fn parse(&self, text: &str) -> Result<JavaType> {
        let mut parser = TypeParser::new(text, self);
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if !parser.at_end() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(ty)
    }

    fn resolve_simple(&self, name: &str) -> Option<JavaType> {
        if let Some(bounds) = self.type_params.get(name) {
            return Some(JavaType::TypeVariable { name: name.to_string(), bounds: bounds.clone() });
        }
        self.resolve_class(name).map(JavaType::class)
    }

    fn resolve_class(&self, name: &str) -> Option<String> {
        for outer in &self.enclosing {
            let member = format!("{}${}", outer, name);
            if self.known.contains(&member) {
                return Some(member);
            }
        }
        if let Some(q) = self.imports.get(name) {
            return Some(q.clone());
        }
        if let Some(pkg) = &self.package {
            let candidate = format!("{}.{}", pkg, name);
            if self.known.contains(&candidate) {
                return Some(candidate);
            }
        } else if self.known.contains(name) {
            return Some(name.to_string());
        }
        for pkg in &self.on_demand {
            let candidate = format!("{}.{}", pkg, name);
            if self.known.contains(&candidate) || is_well_known_type(pkg, name) {
                return Some(candidate);
            }
        }
        if JAVA_LANG_SIMPLE_TYPES.contains(&name) {
            return Some(format!("java.lang.{}", name));
        }
        None
    }

    fn is_class(&self, qualified: &str) -> bool {
        if self.known.contains(qualified) {
            return true;
        }
        match qualified.rsplit_once('.') {
            Some((pkg, simple)) => is_well_known_type(pkg, simple),
            None => false,
        }
    }

    /// Resolve a dotted path. If its first segment names a class, the rest
    /// are member types joined with `$`. Otherwise the longest prefix naming
    /// a known class is the outer type; failing that, the first capitalized
    /// segment is.
    fn resolve_path(&self, segments: &[String]) -> JavaType {
        if segments.len() == 1 {
            return self
                .resolve_simple(&segments[0])
                .unwrap_or_else(|| JavaType::Unresolved(segments[0].clone()));
        }
        if let Some(outer) = self.resolve_class(&segments[0]) {
            return JavaType::class(format!("{}${}", outer, segments[1..].join("$")));
        }
        let split = (2..=segments.len())
            .rev()
            .find(|&i| self.is_class(&segments[..i].join(".")))
            .or_else(|| {
                segments
                    .iter()
                    .position(|s| s.starts_with(|c: char| c.is_uppercase()))
                    .map(|i| i + 1)
            })
            .unwrap_or(segments.len());
        let mut name = segments[..split].join(".");
        for member in &segments[split..] {
            name.push('$');
            name.push_str(member);
        }
        JavaType::class(name)
    }
}

struct TypeParser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
    scope: &'a TypeScope,
}

impl<'a> TypeParser<'a> {
    fn new(input: &'a str, scope: &'a TypeScope) -> Self {
        Self { input, chars: input.chars().collect(), pos: 0, scope }
    }

    fn error(&self, message: &str) -> Error {
        Error::type_syntax(self.input, format!("{} at offset {}", message, self.pos))
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn looking_at_ellipsis(&self) -> bool {
        self.chars[self.pos..].starts_with(&['.', '.', '.'])
    }

    fn identifier(&mut self) -> Result<String> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            let ok = c.is_alphanumeric() || c == '_' || c == '$';
            if !ok || (self.pos == start && c.is_ascii_digit()) {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("expected identifier"));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_type(&mut self) -> Result<JavaType> {
        let mut segments = vec![self.identifier()?];
        let mut type_args = self.parse_type_args()?;
        loop {
            self.skip_ws();
            if self.peek() != Some('.') || self.looking_at_ellipsis() {
                break;
            }
            self.pos += 1;
            segments.push(self.identifier()?);
            // Arguments on an outer segment are erased anyway; keep the innermost
            type_args = self.parse_type_args()?;
        }

        let base = match (segments.len(), PrimitiveType::from_name(&segments[0])) {
            (1, Some(prim)) => {
                if !type_args.is_empty() {
                    return Err(self.error("primitive type cannot take type arguments"));
                }
                JavaType::Primitive(prim)
            }
            _ => match self.scope.resolve_path(&segments) {
                JavaType::Class { name, .. } => JavaType::Class { name, type_args },
                other => other,
            },
        };

        let mut dims = 0;
        loop {
            self.skip_ws();
            if self.looking_at_ellipsis() {
                self.pos += 3;
                dims += 1;
                break;
            }
            if !self.eat('[') {
                break;
            }
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            dims += 1;
        }
        Ok(JavaType::array_of(base, dims))
    }

    fn parse_type_args(&mut self) -> Result<Vec<JavaType>> {
        if !self.eat('<') {
            return Ok(Vec::new());
        }
        let mut args = Vec::new();
        loop {
            args.push(self.parse_type_arg()?);
            if self.eat(',') {
                continue;
            }
            if self.eat('>') {
                return Ok(args);
            }
            return Err(self.error("unclosed type arguments"));
        }
    }

    fn parse_type_arg(&mut self) -> Result<JavaType> {
        if self.eat('?') {
            let save = self.pos;
            let bound = match self.identifier().ok().as_deref() {
                Some("extends") => Some((self.parse_type()?, true)),
                Some("super") => Some((self.parse_type()?, false)),
                _ => {
                    self.pos = save;
                    None
                }
            };
            return Ok(match bound {
                Some((b, upper)) => JavaType::Wildcard { bound: Some(Box::new(b)), upper },
                None => JavaType::Wildcard { bound: None, upper: true },
            });
        }
        let arg = self.parse_type()?;
        if let JavaType::Primitive(_) = arg {
            return Err(self.error("primitive type cannot be a type argument"));
        }
        Ok(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives_and_arrays() {
        assert_eq!("int".parse::<JavaType>().unwrap(), JavaType::Primitive(PrimitiveType::Int));
        assert_eq!(
            "double[][]".parse::<JavaType>().unwrap(),
            JavaType::array_of(JavaType::Primitive(PrimitiveType::Double), 2)
        );
        assert_eq!(
            "String...".parse::<JavaType>().unwrap(),
            JavaType::array_of(JavaType::class("java.lang.String"), 1)
        );
    }

    #[test]
    fn test_parse_generic_with_wildcards() {
        let ty: JavaType = "java.util.Map<String, ? extends Number>".parse().unwrap();
        assert_eq!(
            ty,
            JavaType::parameterized(
                "java.util.Map",
                vec![
                    JavaType::class("java.lang.String"),
                    JavaType::Wildcard { bound: Some(Box::new(JavaType::class("java.lang.Number"))), upper: true },
                ]
            )
        );
        assert_eq!(ty.to_string(), "java.util.Map<java.lang.String, ? extends java.lang.Number>");
    }

    #[test]
    fn test_unknown_simple_name_is_unresolved() {
        assert_eq!("Widget".parse::<JavaType>().unwrap(), JavaType::Unresolved("Widget".into()));
    }

    #[test]
    fn test_scope_resolution_order() {
        let mut scope = TypeScope::new().with_package("com.example");
        scope.import("java.util.List");
        scope.import("java.util.Map");
        scope.declare_known("com.example.Point");
        let scope = scope
            .enter_type_params(&[("T".into(), vec!["Comparable<T>".into()])])
            .unwrap();

        assert_eq!(scope.parse("List<T>").unwrap(), JavaType::parameterized(
            "java.util.List",
            vec![JavaType::TypeVariable {
                name: "T".into(),
                bounds: vec![JavaType::parameterized(
                    "java.lang.Comparable",
                    vec![JavaType::TypeVariable { name: "T".into(), bounds: vec![] }],
                )],
            }],
        ));
        assert_eq!(scope.parse("Point").unwrap(), JavaType::class("com.example.Point"));
        assert_eq!(scope.parse("Map.Entry<K, V>").unwrap(), JavaType::parameterized(
            "java.util.Map$Entry",
            vec![JavaType::Unresolved("K".into()), JavaType::Unresolved("V".into())],
        ));
    }

    #[test]
    fn test_malformed_type_text() {
        assert!(matches!("List<String".parse::<JavaType>(), Err(Error::TypeSyntax { .. })));
        assert!(matches!("int[".parse::<JavaType>(), Err(Error::TypeSyntax { .. })));
        assert!(matches!("List<int>".parse::<JavaType>(), Err(Error::TypeSyntax { .. })));
        assert!(matches!("".parse::<JavaType>(), Err(Error::TypeSyntax { .. })));
        assert!(matches!("a b".parse::<JavaType>(), Err(Error::TypeSyntax { .. })));
    }

    #[test]
    fn test_java_lang_is_implicitly_imported() {
        for name in ["Exception", "RuntimeException", "StringBuilder", "Thread", "AutoCloseable"] {
            assert_eq!(
                name.parse::<JavaType>().unwrap(),
                JavaType::class(format!("java.lang.{}", name)),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_member_types_of_enclosing_classes() {
        let mut scope = TypeScope::new().with_package("com.example");
        scope.declare_known("com.example.LinkedBag");
        scope.declare_known("com.example.LinkedBag$Node");
        scope.declare_known("com.example.LinkedBag$Node$Link");

        let outer = scope.clone().with_enclosing("com.example.LinkedBag");
        assert_eq!(outer.parse("Node").unwrap(), JavaType::class("com.example.LinkedBag$Node"));
        assert_eq!(outer.parse("Node.Link").unwrap(), JavaType::class("com.example.LinkedBag$Node$Link"));

        let inner = scope.with_enclosing("com.example.LinkedBag$Node$Link");
        assert_eq!(inner.parse("Node").unwrap(), JavaType::class("com.example.LinkedBag$Node"));
        assert_eq!(inner.parse("Link").unwrap(), JavaType::class("com.example.LinkedBag$Node$Link"));
        assert_eq!(inner.parse("LinkedBag").unwrap(), JavaType::class("com.example.LinkedBag"));
    }

    #[test]
    fn test_on_demand_imports() {
        let mut scope = TypeScope::new().with_package("com.example");
        scope.import("java.util.*");
        scope.import("com.shapes.*");
        scope.declare_known("com.shapes.Circle");

        assert_eq!(
            scope.parse("List<String>").unwrap(),
            JavaType::parameterized("java.util.List", vec![JavaType::class("java.lang.String")])
        );
        assert_eq!(scope.parse("Circle").unwrap(), JavaType::class("com.shapes.Circle"));
        assert_eq!(scope.parse("Square").unwrap(), JavaType::Unresolved("Square".into()));
    }

    #[test]
    fn test_bound_naming_a_later_parameter() {
        let scope = TypeScope::new()
            .enter_type_params(&[
                ("T".into(), vec!["U".into()]),
                ("U".into(), vec!["V".into()]),
                ("V".into(), vec!["Number".into()]),
            ])
            .unwrap();
        let number = JavaType::class("java.lang.Number");
        let v = JavaType::TypeVariable { name: "V".into(), bounds: vec![number] };
        let u = JavaType::TypeVariable { name: "U".into(), bounds: vec![v] };
        assert_eq!(scope.parse("T").unwrap(), JavaType::TypeVariable { name: "T".into(), bounds: vec![u] });
    }

    #[test]
    fn test_package_qualified_member_types() {
        assert_eq!(
            "java.util.Map.Entry<String, Integer>".parse::<JavaType>().unwrap(),
            JavaType::parameterized(
                "java.util.Map$Entry",
                vec![JavaType::class("java.lang.String"), JavaType::class("java.lang.Integer")]
            )
        );

        let mut scope = TypeScope::new();
        scope.declare_known("com.example.Outer");
        assert_eq!(scope.parse("com.example.Outer.Inner").unwrap(), JavaType::class("com.example.Outer$Inner"));
        // not in the model: the capitalized segment starts the class name
        assert_eq!("org.acme.Tree.Leaf".parse::<JavaType>().unwrap(), JavaType::class("org.acme.Tree$Leaf"));
        assert_eq!("java.util.List".parse::<JavaType>().unwrap(), JavaType::class("java.util.List"));
    }
}
