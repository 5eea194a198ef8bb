pub mod cross;
pub mod gametes;
