pub mod order;
pub mod project;
pub mod sink;
