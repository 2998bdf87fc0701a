mod record;
pub(crate) mod storage;

pub use record::Record;
