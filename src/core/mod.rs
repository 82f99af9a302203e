pub mod assembler;
pub mod clock;
pub mod decoder;
pub mod dedup;
pub mod encoder;
pub mod engine;
pub mod packager;
pub mod pipeline;
pub mod schema;
pub mod sequence;

pub use crate::domain::model::{CampaignArchive, ContactRecord, Table, TransformResult};
pub use crate::domain::ports::{Clock, Pipeline, Storage};
pub use crate::utils::error::Result;
