pub mod model;
pub mod synthesize;

pub use model::{
    BusinessIdentifier, Contact, Description, Location, ProfileDocument, ProfileMetadata, Source,
    Verification, SCHEMA_VERSION,
};
pub use synthesize::{synthesize_profile, Submission};
