// Thu Oct 15 2026 - Alex

pub mod config;
pub mod output;
pub mod structure;
pub mod ui;

pub use config::Config;
pub use structure::{
    compare, compute_layout, Divergence, FieldType, LayoutResult, PackingPolicy, SchemaRegistry,
    StructSchema, StructureComparator, StructureError,
};
