pub mod compose;
pub mod optimize;
pub mod refine;
pub mod session;
