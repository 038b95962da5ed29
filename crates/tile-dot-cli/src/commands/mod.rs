pub mod eval;
pub mod parity;
pub mod ptx;
pub mod validate;
