use serde_json::Value;

/// A config object: one plain key→value mapping per effect attachment.
pub type ConfigObject = serde_json::Map<String, Value>;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A numeric interval `{lower, upper}`.
///
/// `lower <= upper` is a UI convention, not a model invariant: editors stay
/// permissive and callers that need an ordered interval sort on use.
pub struct Range {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Range {
    /// Build a range without ordering the bounds.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Signed width of the interval (`upper - lower`).
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A plain `{x, y}` point in canvas pixels.
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// Build a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Default arc radius when the serialized form omits it.
pub(crate) fn default_arc_radius() -> f64 {
    100.0
}

/// Default arc end angle when the serialized form omits it.
pub(crate) fn default_arc_end_angle() -> f64 {
    360.0
}

/// Default arc sweep direction when the serialized form omits it.
pub(crate) fn default_arc_direction() -> i8 {
    1
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "name")]
/// A position value as the engine serializes it, tagged by the `name` key.
///
/// Missing numeric fields deserialize to the engine defaults (`x`/`y` 0,
/// `radius` 100, `startAngle` 0, `endAngle` 360, `direction` 1).
pub enum PositionValue {
    /// A fixed point, wire name `position`.
    #[serde(rename = "position")]
    Point {
        /// Horizontal coordinate.
        #[serde(default)]
        x: f64,
        /// Vertical coordinate.
        #[serde(default)]
        y: f64,
    },
    /// A circular arc sweep, wire name `arc-path`.
    #[serde(rename = "arc-path", rename_all = "camelCase")]
    Arc {
        /// Arc center point.
        #[serde(default)]
        center: Point2D,
        /// Arc radius in pixels.
        #[serde(default = "default_arc_radius")]
        radius: f64,
        /// Sweep start angle in degrees.
        #[serde(default)]
        start_angle: f64,
        /// Sweep end angle in degrees.
        #[serde(default = "default_arc_end_angle")]
        end_angle: f64,
        /// Sweep direction: `1` clockwise, `-1` counter-clockwise.
        #[serde(default = "default_arc_direction")]
        direction: i8,
    },
}

impl Default for PositionValue {
    fn default() -> Self {
        Self::Point { x: 0.0, y: 0.0 }
    }
}

impl PositionValue {
    /// A centered default arc, used when the editor switches a field from
    /// `position` to `arc-path`.
    pub fn default_arc(center: Point2D) -> Self {
        Self::Arc {
            center,
            radius: default_arc_radius(),
            start_angle: 0.0,
            end_angle: default_arc_end_angle(),
            direction: default_arc_direction(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Which source a color field draws from.
pub enum ColorMode {
    /// Take a color from the project's color bucket.
    #[default]
    ColorBucket,
    /// Take a color from the project's neutral bucket.
    NeutralBucket,
    /// Use the explicit hex value carried alongside.
    Color,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A color field value: a mode plus the hex value used in `color` mode.
pub struct ColorSelection {
    /// Selected mode.
    #[serde(rename = "selectionType")]
    pub selection_type: ColorMode,
    /// Explicit `#rrggbb` / `#rgb` value; meaningful only in `color` mode
    /// but preserved across mode switches.
    #[serde(
        rename = "colorValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub color_value: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which canvas dimension a percentage is measured against.
pub enum PercentSide {
    /// Shortest canvas edge.
    #[default]
    Shortest,
    /// Longest canvas edge.
    Longest,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One endpoint of a [`PercentageRange`]: a 0–1 fraction of a canvas side.
pub struct PercentagePoint {
    /// Fraction in `[0, 1]`. Display layers show `percent * 100`.
    pub percent: f64,
    /// Canvas side the fraction is relative to.
    #[serde(default)]
    pub side: PercentSide,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A percentage interval with per-endpoint canvas sides.
pub struct PercentageRange {
    /// Lower endpoint.
    pub lower: PercentagePoint,
    /// Upper endpoint.
    pub upper: PercentagePoint,
}

impl Default for PercentageRange {
    fn default() -> Self {
        Self {
            lower: PercentagePoint {
                percent: 0.1,
                side: PercentSide::Shortest,
            },
            upper: PercentagePoint {
                percent: 0.9,
                side: PercentSide::Longest,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A pair of ranges bounding a value that itself varies over time.
pub struct DynamicRange {
    /// Range the value starts from.
    pub bottom: Range,
    /// Range the value may reach.
    pub top: Range,
}

impl Default for DynamicRange {
    fn default() -> Self {
        Self {
            bottom: Range::new(0.0, 0.5),
            top: Range::new(0.5, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One step of a multi-step timeline definition.
///
/// `min_percentage`/`max_percentage` partition a 0–100 timeline; consecutive
/// steps are expected to tile without gaps but this is not enforced here.
pub struct StepDefinition {
    /// Step start on the 0–100 timeline.
    pub min_percentage: f64,
    /// Step end on the 0–100 timeline.
    pub max_percentage: f64,
    /// Value range for the step.
    pub max: Range,
    /// Repetition range for the step.
    pub times: Range,
    /// Named animation algorithm applied during the step.
    #[serde(rename = "type")]
    pub algorithm: String,
}

impl StepDefinition {
    /// Timeline span covered by this step.
    pub fn duration(&self) -> f64 {
        self.max_percentage - self.min_percentage
    }
}

impl Default for StepDefinition {
    fn default() -> Self {
        Self {
            min_percentage: 0.0,
            max_percentage: 100.0,
            max: Range::new(0.0, 1.0),
            times: Range::new(1.0, 3.0),
            algorithm: "linear".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A config value lifted out of raw JSON into its structured type.
///
/// This is the sum type behind the crate's shape dispatch: one variant per
/// structured wire shape, produced by [`crate::classify_value`] following a
/// fixed precedence order. The raw JSON stays authoritative for write-back;
/// `FieldValue` is the computation view.
pub enum FieldValue {
    /// A boolean flag.
    Boolean(bool),
    /// A plain number.
    Number(f64),
    /// A free-text string.
    Text(String),
    /// A `{lower, upper}` interval.
    Range(Range),
    /// A `{x, y}` point.
    Point2d(Point2D),
    /// A tagged `position` / `arc-path` value.
    Position(PositionValue),
    /// A color selection.
    Color(ColorSelection),
    /// A percentage interval with sides.
    PercentageRange(PercentageRange),
    /// A bottom/top pair of ranges.
    DynamicRange(DynamicRange),
    /// A multi-step timeline definition.
    MultiStep(Vec<StepDefinition>),
    /// A plain JSON array.
    Array(Vec<Value>),
    /// Any other JSON object.
    Object(ConfigObject),
}

#[cfg(test)]
#[path = "../../tests/unit/value/model.rs"]
mod tests;
