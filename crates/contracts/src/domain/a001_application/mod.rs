pub mod aggregate;
pub mod status;
pub mod store;

pub use aggregate::ApplicationRecord;
pub use status::ApplicationStatus;
pub use store::{RecordStore, RecordStoreError};
