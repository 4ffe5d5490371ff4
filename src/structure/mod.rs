// Thu Oct 15 2026 - Alex

pub mod alignment;
pub mod builder;
pub mod cache;
pub mod catalog;
pub mod comparison;
pub mod error;
pub mod field;
pub mod layout;
pub mod policy;
pub mod registry;
pub mod schema;
pub mod serializer;
pub mod type_info;
pub mod validator;

pub use alignment::Alignment;
pub use builder::StructureBuilder;
pub use cache::StructureCache;
pub use comparison::{compare, Divergence, DivergenceScope, StructureComparator, StructureComparison};
pub use error::{StructureError, StructureResult};
pub use field::FieldSpec;
pub use layout::{compute_layout, FieldLayout, Padding, StructureLayout};
pub use policy::PackingPolicy;
pub use registry::SchemaRegistry;
pub use schema::StructSchema;
pub use serializer::{SerializableComparison, SerializableLayout};
pub use type_info::FieldType;
pub use validator::StructureValidator;

/// A computed layout; the value `compute_layout` returns.
pub type LayoutResult = StructureLayout;
