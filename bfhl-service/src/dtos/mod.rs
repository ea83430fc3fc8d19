pub mod bfhl;

pub use bfhl::{BfhlError, BfhlResponse, HealthResponse, Operation, OperationData, PositiveIntegers};
