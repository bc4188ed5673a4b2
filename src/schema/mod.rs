//! Field descriptors, schema generation, and input dispatch.
//!
//! A schema is the editable surface of one effect's configuration:
//! introspected from a config default, consumed by a form host that mounts
//! one input per field descriptor.

pub(crate) mod dispatch;
pub(crate) mod field;
pub(crate) mod generate;
