//! Ошибки библиотеки
//!
//! Таксономия:
//! - `Fetch` - сетевая ошибка или некорректный JSON фида
//! - `Schema` - в payload фида отсутствует обязательное поле
//! - `Config` - некорректная конфигурация pipeline (ошибка вызывающего кода)
//! - `NoVariance` - корреляция не определена для вектора с нулевой дисперсией
//!
//! Отсутствие токена в лексиконе ошибкой НЕ является:
//! такие токены дают нулевой вклад в оценку настроения.

use thiserror::Error;

/// Ошибки пайплайна анализа отзывов
#[derive(Debug, Error)]
pub enum Error {
    /// Сетевая/транспортная ошибка или некорректный JSON
    #[error("feed request failed for {endpoint}: {reason}")]
    Fetch {
        /// Запрошенный endpoint
        endpoint: String,
        /// Причина (текст ошибки транспорта или парсера)
        reason: String,
    },

    /// Payload фида не соответствует ожидаемой схеме
    #[error("feed schema violation at {endpoint}: missing field `{field}` (payload: {snippet})")]
    Schema {
        /// Запрошенный endpoint
        endpoint: String,
        /// Отсутствующее поле
        field: String,
        /// Фрагмент сырого payload для диагностики
        snippet: String,
    },

    /// Некорректная конфигурация pipeline
    #[error("invalid pipeline configuration: {0}")]
    Config(String),

    /// Корреляция не определена: нулевая дисперсия вектора частот
    #[error("correlation undefined for term `{term}`: zero variance across {n_docs} documents")]
    NoVariance {
        /// Терм с постоянным (или нулевым) вектором частот
        term: String,
        /// Количество документов в матрице
        n_docs: usize,
    },
}

/// Результат операций библиотеки
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Обрезать сырой payload до короткого фрагмента для сообщения об ошибке
    pub(crate) fn snippet(payload: &str) -> String {
        const MAX_LEN: usize = 160;
        if payload.len() <= MAX_LEN {
            payload.to_string()
        } else {
            let mut end = MAX_LEN;
            while !payload.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &payload[..end])
        }
    }
}
