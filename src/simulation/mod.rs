pub mod boundary;
pub mod engine;

pub use boundary::BoundaryPolicy;
pub use engine::LangtonsAnt;
