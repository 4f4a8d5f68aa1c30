pub mod posts;
pub mod reference;
