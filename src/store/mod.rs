pub mod ids;
pub mod record;
pub mod resource_store;
pub mod seed;
pub mod validation;

pub use ids::{IdGenerator, IdStrategy};
pub use record::{DisplayOrder, Record, ValidationLimits};
pub use resource_store::{ListResourceStore, StoreOptions};
pub use seed::SeedData;
pub use validation::ValidationErrors;
