//! Selectable options.

use serde::{Deserialize, Serialize, Serializer};
use tuidom::Element;

/// Display label of an option.
///
/// Only text labels take part in the default filter; rich labels are
/// rendered as given and never match a query. A rich label serializes as
/// `null` and cannot be deserialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    #[serde(skip_deserializing)]
    Rich(Element),
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Rich(_) => serializer.serialize_none(),
        }
    }
}

impl Label {
    /// The label text, if this is a text label.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rich(_) => None,
        }
    }

    /// Render the label as an element.
    pub fn to_element(&self) -> Element {
        match self {
            Self::Text(text) => Element::text(text),
            Self::Rich(element) => element.clone(),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Label {
    fn from(element: Element) -> Self {
        Self::Rich(element)
    }
}

/// A selectable candidate with a stable identity.
///
/// Two options are equal when their ids are equal; labels and extra fields
/// are not compared.
///
/// # Example
///
/// ```ignore
/// let option = SelectOption::new("nl", "Netherlands").with_extra("region", "EU");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: Label,
    /// Arbitrary caller data carried along with the option.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Attach an extra field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SelectOption {}

/// Position of the option with `id` in `options`.
pub fn position_of(options: &[SelectOption], id: &str) -> Option<usize> {
    options.iter().position(|option| option.id == id)
}
