mod id;

pub use id::{parse_id, RecordId};
