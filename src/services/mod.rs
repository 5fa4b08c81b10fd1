mod registry;

pub use registry::{RegistryService, SaveRequest, SaveResult};
