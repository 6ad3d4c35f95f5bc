//! Dialog resource model.
//!
//! A `DialogResource` is built incrementally by the parser and handed to the
//! caller whole. Controls are created by their declaration and filled in
//! later by their definition, keyed on `(id, occurrence)`.

use std::collections::BTreeMap;
use std::fmt;

use crate::property::find;
use crate::{Language, Locale, Property};

/// Resource id of a dialog or control: a symbolic name or a number.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceId {
    Name(String),
    Number(i64),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Name(name) => f.write_str(name),
            ResourceId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        ResourceId::Name(name.to_owned())
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Number(n)
    }
}

/// One UI element of a dialog.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    /// Type named by the declaration (`PushButton`, `EditBox`, ...).
    pub control_type: String,
    pub id: ResourceId,
    /// Zero-based index among the controls sharing `id`, in declaration order.
    pub occurrence: u32,
    pub positional: Vec<Property>,
    pub labeled: Vec<Property>,
    pub serialized: Vec<Property>,
    /// Set once the matching `begin_control_ex` block has been merged.
    pub defined: bool,
}

impl Control {
    pub fn new(control_type: impl Into<String>, id: ResourceId, occurrence: u32) -> Self {
        Control {
            control_type: control_type.into(),
            id,
            occurrence,
            positional: Vec::new(),
            labeled: Vec::new(),
            serialized: Vec::new(),
            defined: false,
        }
    }

    /// Look a property up by label: positional first, then labeled, then serialized.
    pub fn property(&self, label: &str) -> Option<&Property> {
        find(&self.positional, label)
            .or_else(|| find(&self.labeled, label))
            .or_else(|| find(&self.serialized, label))
    }

    /// The caption, whether given positionally or after a serialized block.
    pub fn caption(&self) -> Option<&Property> {
        find(&self.positional, "Caption").or_else(|| find(&self.serialized, "Caption"))
    }
}

/// A named number list from the inert layer metadata block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    pub name: String,
    pub values: Vec<i64>,
}

/// Where a redirect-only dialog file points.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Redirect {
    /// `#include "other.dlg"`
    Direct { target: String },
    /// `#ifdef LANGUAGE_X` / `#include "x.dlg"` / ...
    PerLanguage { condition: String, target: String },
}

impl Redirect {
    /// The first dialog file the redirect names.
    pub fn target(&self) -> &str {
        match self {
            Redirect::Direct { target } | Redirect::PerLanguage { target, .. } => target,
        }
    }
}

/// A parsed dialog definition.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogResource {
    pub locale: Locale,
    /// File named by the leading header include.
    pub header: String,
    /// Version from the `Version [x.y]` comment.
    pub version: Option<String>,
    /// String-table file per language.
    pub string_files: BTreeMap<Language, String>,
    /// Fixed-order positional properties of the dialog itself.
    pub properties: Vec<Property>,
    pub labeled: Vec<Property>,
    pub serialized: Vec<Property>,
    /// Controls in declaration order.
    pub controls: Vec<Control>,
    pub layers: Vec<Layer>,
}

impl DialogResource {
    pub fn new(locale: Locale) -> Self {
        DialogResource {
            locale,
            ..DialogResource::default()
        }
    }

    /// The dialog's own resource id (first positional property).
    pub fn id(&self) -> Option<&Property> {
        self.properties.first()
    }

    /// Look a dialog property up by label: positional, labeled, then serialized.
    pub fn property(&self, label: &str) -> Option<&Property> {
        find(&self.properties, label)
            .or_else(|| find(&self.labeled, label))
            .or_else(|| find(&self.serialized, label))
    }

    pub fn string_file(&self, language: Language) -> Option<&str> {
        self.string_files.get(&language).map(String::as_str)
    }

    /// The `occurrence`-th control declared with `id`.
    pub fn control(&self, id: &ResourceId, occurrence: u32) -> Option<&Control> {
        self.controls
            .iter()
            .find(|c| &c.id == id && c.occurrence == occurrence)
    }

    /// All controls declared with `id`, in occurrence order.
    pub fn controls_with_id<'a>(&'a self, id: &'a ResourceId) -> impl Iterator<Item = &'a Control> {
        self.controls.iter().filter(move |c| &c.id == id)
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}
