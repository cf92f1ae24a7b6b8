pub mod ids;
pub mod contract;
pub mod member;
pub mod directory;

// Re-exports for convenience
pub use ids::Id;
pub use contract::Contract;
pub use member::{Access, AccessType, FamilyMember, NewMember, Partition};
pub use directory::FamilyDirectory;
