pub mod dedup;
pub mod entities;
