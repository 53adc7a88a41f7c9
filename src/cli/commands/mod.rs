pub mod sync;
pub mod template;
