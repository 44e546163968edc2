pub mod entity;
pub mod experts;
pub mod scores;
