pub mod builders;
pub mod mocks;
