mod optimizer;

pub use optimizer::Optimizer;
