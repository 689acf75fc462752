//! Модуль отчётов
//!
//! Сводки по отзывам приложения и сравнение двух приложений.

mod compare;

pub use compare::{AppComparison, AppReport, ReportBuilder, ReportConfig};
