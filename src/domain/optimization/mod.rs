//! Optimization request/response contract.

mod mode;
mod request;
mod result;

pub use mode::OptimizationMode;
pub use request::{
    OPTIMIZE_TEMPERATURE, Operation, OptimizationRequest, REFINE_TEMPERATURE, response_schema,
};
pub use result::{OptimizedResult, ResultShapeError};
