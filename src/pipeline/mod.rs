pub mod best;
pub mod export;
pub mod score;
pub mod sort;
pub mod validate;
