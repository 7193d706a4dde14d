//! Runtime configuration

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// How the interface list of a class is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceMode {
    /// Interfaces of the class, its superclasses and superinterfaces
    #[default]
    Transitive,
    /// Interfaces named in the class declaration only
    Direct,
}

impl FromStr for InterfaceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transitive" => Ok(InterfaceMode::Transitive),
            "direct" => Ok(InterfaceMode::Direct),
            other => Err(Error::config_error(format!(
                "unknown interface mode '{}' (expected 'direct' or 'transitive')",
                other
            ))),
        }
    }
}

impl fmt::Display for InterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceMode::Transitive => f.write_str("transitive"),
            InterfaceMode::Direct => f.write_str("direct"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interface_mode: InterfaceMode,
    /// Precede the generated field with `@Serial`
    pub serial_annotation: bool,
    /// Describe classes that are not yet serializable as implementing
    /// `java.io.Serializable`
    pub add_serializable: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface_mode: InterfaceMode::default(),
            serial_annotation: true,
            add_serializable: true,
            debug: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface_mode(mut self, mode: InterfaceMode) -> Self {
        self.interface_mode = mode;
        self
    }

    pub fn with_serial_annotation(mut self, enabled: bool) -> Self {
        self.serial_annotation = enabled;
        self
    }

    pub fn with_add_serializable(mut self, enabled: bool) -> Self {
        self.add_serializable = enabled;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Defaults overlaid with `SUIDGEN_INTERFACES`, `SUIDGEN_SERIAL_ANNOTATION`,
    /// `SUIDGEN_ADD_SERIALIZABLE` and `SUIDGEN_DEBUG`
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(mode) = lookup("SUIDGEN_INTERFACES") {
            self.interface_mode = mode.parse()?;
        }
        if let Some(value) = lookup("SUIDGEN_SERIAL_ANNOTATION") {
            self.serial_annotation = parse_bool("SUIDGEN_SERIAL_ANNOTATION", &value)?;
        }
        if let Some(value) = lookup("SUIDGEN_ADD_SERIALIZABLE") {
            self.add_serializable = parse_bool("SUIDGEN_ADD_SERIALIZABLE", &value)?;
        }
        if let Some(value) = lookup("SUIDGEN_DEBUG") {
            self.debug = parse_bool("SUIDGEN_DEBUG", &value)?;
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config_error(format!("{}: expected a boolean, found '{}'", key, other))),
    }
}
