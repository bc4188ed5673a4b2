use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// The closed set of editable field types.
///
/// Wire names are the lowercase concatenated strings the form host keys its
/// dispatch on (`"percentagerange"`, `"findvaluealgorithm"`, ...).
pub enum FieldKind {
    /// On/off flag.
    Boolean,
    /// Plain number.
    Number,
    /// 0–1 fraction displayed as 0–100.
    Percentage,
    /// `{lower, upper}` interval.
    Range,
    /// `{x, y}` point.
    Point2d,
    /// Tagged `position` / `arc-path` value.
    Position,
    /// Color selection with bucket modes.
    ColorPicker,
    /// Percentage interval with per-endpoint canvas sides.
    PercentageRange,
    /// Bottom/top pair of ranges.
    DynamicRange,
    /// Plain JSON array.
    Array,
    /// Multi-choice selection over declared options.
    MultiSelect,
    /// Multi-step timeline definition.
    MultiStep,
    /// Selection over the divisors of 360.
    SparsityFactor,
    /// Selection over the engine's find-value algorithm names.
    FindValueAlgorithm,
    /// Structured object with no richer editor.
    Object,
    /// Free-text string.
    Text,
    /// Raw JSON editing.
    Json,
    /// Displayed, never committed.
    Readonly,
}

impl FieldKind {
    /// Parse a wire kind string, falling back to free text for anything
    /// unknown — an unrecognized type must still render an editor.
    pub fn from_wire(s: &str) -> Self {
        match serde_json::from_value(Value::String(s.to_string())) {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!(kind = s, "unknown field kind, editing as text");
                Self::Text
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Declared element type of an array field.
///
/// Authoritative when not [`ArrayElementKind::Mixed`]: bulk operations parse
/// every token per the declared type and fail atomically on a mismatch.
pub enum ArrayElementKind {
    /// Every element is numeric.
    Number,
    /// Every element is a string.
    String,
    /// Per-element type is auto-detected.
    #[default]
    Mixed,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Metadata describing one editable config property.
pub struct FieldDescriptor {
    /// Unique key into the config object; stable identity.
    pub name: String,
    /// Human label derived from `name`.
    pub label: String,
    /// Field type driving input dispatch.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Value used when the config has no entry for `name`.
    pub default: Value,
    /// Lower bound for numeric editors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound for numeric editors (slider policy, not validation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Entry step for numeric editors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Bucket the color picker draws from.
    #[serde(
        rename = "bucketType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bucket_type: Option<String>,
    /// Choices for multi-select style fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Declared element type for array fields.
    #[serde(
        rename = "arrayType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub array_type: Option<ArrayElementKind>,
    /// Warning text surfaced next to the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Whether the field is displayed without being editable.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
}

impl FieldDescriptor {
    /// Build a descriptor with the label derived from `name` and no
    /// constraints set.
    pub fn new(name: impl Into<String>, kind: FieldKind, default: Value) -> Self {
        let name = name.into();
        let label = crate::schema::generate::format_label(&name);
        Self {
            name,
            label,
            kind,
            default,
            min: None,
            max: None,
            step: None,
            bucket_type: None,
            options: None,
            array_type: None,
            warning: None,
            readonly: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered collection of field descriptors for one effect's configuration.
pub struct Schema {
    /// Descriptors in config-object order.
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Look up a descriptor by field name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of editable fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when introspection produced no editable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/field.rs"]
mod tests;
