pub mod catalog_service;
pub mod chart_service;
pub mod nav_service;
pub mod performance_service;
