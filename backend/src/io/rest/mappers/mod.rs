pub mod dashboard_mapper;
pub mod match_mapper;
pub mod record_mapper;
