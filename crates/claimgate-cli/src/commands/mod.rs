pub mod evaluate;
pub mod show;
pub mod validate;
