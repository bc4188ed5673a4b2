//! Schema-driven effect configuration editing for generative art tools.
//!
//! An effect's configuration is a plain JSON object consumed by the render
//! engine. This crate owns everything between that object and a form UI:
//!
//! 1. **Introspect**: `config default -> Schema` (typed field descriptors)
//! 2. **Dispatch**: `FieldDescriptor -> InputKind` (which editor mounts)
//! 3. **Edit**: headless per-field models (buffers, normalization, commits)
//! 4. **Apply**: `ChangeEvent -> UpdateQueue -> ConfigStore` (serialized,
//!    latest-write-wins per field)
//! 5. **Serialize**: position values into engine wire form at the boundary
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail soft**: introspection and normalization degrade (empty schema,
//!   repaired defaults, fallback lists) instead of erroring; nothing here
//!   may crash the host shell.
//! - **Raw JSON stays authoritative**: edits spread-merge over the prior
//!   value, so unknown keys survive write-back verbatim.
//! - **Ordered shape detection**: value shapes overlap, so classification
//!   is a fixed precedence list, tested as such.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod capability;
mod config;
mod edit;
mod foundation;
mod schema;
mod value;

pub use capability::{
    AlgorithmCatalog, FALLBACK_FIND_VALUE_ALGORITHMS, FixedProjectState, ProjectState,
    ResolutionDimensions, load_find_value_algorithms,
};
pub use config::merge::{deep_clone_config, merge_configs_with_cloning};
pub use config::queue::{QueueMetrics, UpdateOptions, UpdateQueue};
pub use config::store::ConfigStore;
pub use edit::array::{ArrayEdit, DetectedItemKind, detect_item_kind};
pub use edit::color::ColorPickerEdit;
pub use edit::commit::{ChangeEvent, merge_subkey, spread_merge};
pub use edit::debounce::{DebounceClass, Debouncer};
pub use edit::multistep::MultiStepEdit;
pub use edit::number::NumberEdit;
pub use edit::percentage::{PercentageEdit, PercentageRangeEdit, RangeEndpoint};
pub use edit::point::{Point2DEdit, QUICK_POSITIONS, QuickPosition, dimension_error_placeholder};
pub use edit::position::PositionEdit;
pub use edit::range::{DynamicHalf, DynamicRangeEdit, RangeEdit};
pub use edit::select::{FindValueAlgorithmEdit, MultiSelectEdit, SparsityFactorEdit};
pub use edit::state::{EditBuffer, EditState};
pub use edit::text::{JsonEdit, TextEdit};
pub use edit::toggle::BooleanEdit;
pub use foundation::divisors::{
    DIVISORS_OF_360, is_divisor_of_360, nearest_divisor_of_360, remaining_divisors_of_360,
};
pub use foundation::error::{ConfigError, ConfigResult};
pub use foundation::number::{
    format_for_display, parse_from_string, should_use_decimal_formatting, step_for_value,
};
pub use schema::dispatch::{InputKind, NumberStyle, resolve_input};
pub use schema::field::{ArrayElementKind, FieldDescriptor, FieldKind, Schema};
pub use schema::generate::{
    analyze_property, format_label, generate_schema, guess_max_value, schema_from_default,
};
pub use value::color::{expand_hex_color, is_valid_hex_color};
pub use value::detect::classify_value;
pub use value::model::{
    ColorMode, ColorSelection, ConfigObject, DynamicRange, FieldValue, PercentSide,
    PercentagePoint, PercentageRange, Point2D, PositionValue, Range, StepDefinition,
};
pub use value::normalize::{
    normalize_color_selection, normalize_dynamic_range, normalize_percentage_range,
    normalize_range,
};
/// Position representation conversions; `position::serialize` is the
/// mandatory outbound transform at the engine boundary.
pub use value::position;
