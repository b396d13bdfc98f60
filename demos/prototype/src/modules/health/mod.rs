pub mod health_module;
pub mod health_report;
pub mod health_service;
pub mod ping_service;
pub mod storage;
