//! Properties and their physical value types.

use smallvec::SmallVec;
use std::fmt;

/// Physical type of a property value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicalType {
    Number,
    String,
    Identifier,
    Flags,
}

impl PhysicalType {
    pub fn name(self) -> &'static str {
        match self {
            PhysicalType::Number => "number",
            PhysicalType::String => "string",
            PhysicalType::Identifier => "identifier",
            PhysicalType::Flags => "flags",
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An OR-chain of named flags with its numeric value.
///
/// The value is the literal that terminated the chain in the source. It is
/// kept verbatim and never recomputed from the names.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    names: SmallVec<[String; 4]>,
    value: i64,
}

impl Flags {
    pub fn new<I, S>(names: I, value: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Flags {
            names: names.into_iter().map(Into::into).collect(),
            value,
        }
    }

    /// Flag names in the order they appeared.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
        }
        if !self.names.is_empty() {
            f.write_str(" ")?;
        }
        write!(f, "{}", self.value)
    }
}

/// A property value, tagged with its physical type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    Number(i64),
    String(String),
    Identifier(String),
    Flags(Flags),
}

impl PropertyValue {
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            PropertyValue::Number(_) => PhysicalType::Number,
            PropertyValue::String(_) => PhysicalType::String,
            PropertyValue::Identifier(_) => PhysicalType::Identifier,
            PropertyValue::Flags(_) => PhysicalType::Flags,
        }
    }

    /// The numeric value of a number or flags property.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Flags(flags) => Some(flags.value()),
            _ => None,
        }
    }

    /// The text of a string or identifier property.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) | PropertyValue::Identifier(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&Flags> {
        match self {
            PropertyValue::Flags(flags) => Some(flags),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::String(s) | PropertyValue::Identifier(s) => f.write_str(s),
            PropertyValue::Flags(flags) => fmt::Display::fmt(flags, f),
        }
    }
}

/// A labelled property value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub label: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(label: impl Into<String>, value: PropertyValue) -> Self {
        Property {
            label: label.into(),
            value,
        }
    }

    pub fn physical_type(&self) -> PhysicalType {
        self.value.physical_type()
    }
}

/// Find the first property with `label` in a property list.
pub(crate) fn find<'a>(properties: &'a [Property], label: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.label == label)
}
