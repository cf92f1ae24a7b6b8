pub mod family_queries;
pub mod contract_queries;
