//! Модели данных пайплайна

mod types;

pub use types::*;
