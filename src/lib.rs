pub mod error;
pub mod indexing;
pub mod logging;
pub mod profiles;
pub mod registry;
pub mod validation;

// Re-export commonly used types for convenience.
pub use error::{RegistryError, RegistryResult};
pub use indexing::{IndexBuilder, IndexReport};
pub use profiles::{synthesize_profile, ProfileDocument, Submission};
pub use registry::{RegistryConfig, RegistryLayout, Tier};
pub use validation::{ProfileValidator, ValidationOutcome};
