pub mod athlete;
pub mod training;
pub mod user;

pub use athlete::{AthleteId, AthleteInput, AthleteRecord, AthleteStatus};
pub use training::TrainingSession;
pub use user::{Credential, Role, UserAccount};
