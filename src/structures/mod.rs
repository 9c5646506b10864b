pub mod factorizer;
pub mod field;
pub mod generator;
pub mod poly;
pub mod zp;
