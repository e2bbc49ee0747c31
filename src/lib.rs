pub mod extract;
pub mod load;
pub mod pipeline;
pub mod write;
