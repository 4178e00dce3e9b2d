pub mod dot;
pub mod text;


pub use dot::{DotOptions, to_dot};
pub use text::{outline, sexp};
