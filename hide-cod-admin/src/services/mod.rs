// src/services/mod.rs

pub mod catalog; // built-in searchable city list
pub mod customization; // GraphQL documents + response decoding
pub mod settings; // allow-list editing and metafield (de)serialization

// Public API
pub use catalog::CityEntry;
pub use customization::{AdminError, CustomizationSummary, FunctionHandle, GraphqlRequest, UserError};
pub use settings::AllowList;
