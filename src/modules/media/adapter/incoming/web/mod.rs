pub mod multipart;
pub mod routes;
