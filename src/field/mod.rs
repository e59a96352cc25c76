//! Custom field model: type tags, reference tokens, options, and schema.

pub mod kind;
pub mod option;
pub mod reference;
pub mod schema;

pub use kind::{ChoiceKind, FieldKind};
pub use option::{optional_scalar_string, scalar_string, scalar_text, FieldOption, OptionAttribute};
pub use reference::FieldReference;
pub use schema::{find_by_id, FieldDescriptor, FieldList};
