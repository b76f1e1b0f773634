pub mod domain;
pub mod ports;
pub mod service;
pub mod visualization_use_cases;
