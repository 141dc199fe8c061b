pub use self::impact::{Impact, ImpactError};
pub use self::project::{Project, ProjectId};
pub use self::repository::{DatasetError, Projects};
pub use self::status::{Status, StatusError};

mod impact;
mod project;
mod reference;
mod repository;
mod status;
