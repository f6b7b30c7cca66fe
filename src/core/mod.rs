pub mod encoder;
pub mod etl;

pub use crate::domain::model::{
    CanonicalEvent, CanonicalHomework, CanonicalMark, DateRange, RawRecord, RecordKind,
};
pub use crate::domain::ports::{ConfigProvider, LineNames, LineSink, Pipeline, SchoolSource};
pub use crate::utils::error::Result;
