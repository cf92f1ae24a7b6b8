pub mod schema;
pub mod member_repo;
pub mod contract_repo;
pub mod fixtures;
