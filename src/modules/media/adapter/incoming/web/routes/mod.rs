mod storage_status;

pub use storage_status::*;
