pub mod builder;
pub mod model;
