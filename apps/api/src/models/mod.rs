pub mod clothing;
pub mod outfit;
pub mod user;
