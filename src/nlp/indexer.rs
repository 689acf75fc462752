//! Частотный индекс
//!
//! Построение матрицы терм-документ из нормализованных документов
//! и производные операции: агрегированные частоты, топ-N,
//! отбор по порогу, данные для облака слов.
//!
//! Счётчики - точные целые; сумма строки матрицы равна числу
//! токенов соответствующего документа.

use std::collections::{HashMap, HashSet};

use crate::models::Document;

/// Матрица терм-документ: (терм, документ) -> число вхождений
#[derive(Debug, Clone)]
pub struct TermDocumentMatrix {
    /// Идентификаторы документов (порядок входа)
    documents: Vec<String>,
    /// Словарь: терм -> индекс колонки
    vocabulary: HashMap<String, usize>,
    /// Термы в порядке первого появления в корпусе
    terms: Vec<String>,
    /// Частоты: counts[документ][терм]
    counts: Vec<Vec<u32>>,
}

impl TermDocumentMatrix {
    /// Построить матрицу из нормализованных документов
    ///
    /// Токенизация - разбиение по пробелам: на вход ожидается текст,
    /// уже прошедший pipeline нормализации. Словарь формируется в
    /// порядке первого появления терма, что даёт детерминированный
    /// порядок при стабильном порядке входа.
    pub fn build(documents: &[Document]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut terms: Vec<String> = Vec::new();

        for doc in documents {
            for token in doc.tokens() {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.to_string(), terms.len());
                    terms.push(token.to_string());
                }
            }
        }

        let mut counts = vec![vec![0u32; terms.len()]; documents.len()];
        for (doc_idx, doc) in documents.iter().enumerate() {
            for token in doc.tokens() {
                let term_idx = vocabulary[token];
                counts[doc_idx][term_idx] += 1;
            }
        }

        Self {
            documents: documents.iter().map(|d| d.source_id.clone()).collect(),
            vocabulary,
            terms,
            counts,
        }
    }

    /// Количество документов
    pub fn n_documents(&self) -> usize {
        self.documents.len()
    }

    /// Количество термов
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Идентификаторы документов
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Термы в порядке первого появления
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Число вхождений терма в документ
    pub fn count(&self, term: &str, doc_idx: usize) -> u32 {
        match self.vocabulary.get(term) {
            Some(&term_idx) => self.counts[doc_idx][term_idx],
            None => 0,
        }
    }

    /// Вектор частот терма по всем документам
    ///
    /// `None`, если терм не встречался в корпусе.
    pub fn term_vector(&self, term: &str) -> Option<Vec<u32>> {
        let &term_idx = self.vocabulary.get(term)?;
        Some(self.counts.iter().map(|row| row[term_idx]).collect())
    }

    /// Сумма частот по всем термам и документам
    pub fn total_tokens(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| c as u64)
            .sum()
    }

    /// Агрегированная таблица частот по всему корпусу
    ///
    /// Отсортирована по убыванию счётчика; при равенстве сохраняется
    /// порядок первого появления терма (стабильная сортировка).
    pub fn total_frequency(&self) -> TermFrequencyTable {
        let mut entries: Vec<(String, u32)> = self
            .terms
            .iter()
            .enumerate()
            .map(|(term_idx, term)| {
                let total = self.counts.iter().map(|row| row[term_idx]).sum();
                (term.clone(), total)
            })
            .collect();

        // sort_by стабилен: равные счётчики остаются в порядке появления
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        TermFrequencyTable::from_entries(entries)
    }
}

/// Таблица частот: терм -> агрегированный счётчик
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    /// Пары (терм, счётчик) по убыванию счётчика
    entries: Vec<(String, u32)>,
    /// Индекс для точечных запросов
    lookup: HashMap<String, u32>,
}

impl TermFrequencyTable {
    fn from_entries(entries: Vec<(String, u32)>) -> Self {
        let lookup = entries
            .iter()
            .map(|(term, count)| (term.clone(), *count))
            .collect();
        Self { entries, lookup }
    }

    /// Счётчик терма (0, если терм отсутствует)
    pub fn get(&self, term: &str) -> u32 {
        self.lookup.get(term).copied().unwrap_or(0)
    }

    /// Все пары (терм, счётчик) по убыванию
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// Количество различных термов
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Таблица пуста
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Сумма всех счётчиков (равна числу токенов корпуса)
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c as u64).sum()
    }

    /// Первые `n` термов по убыванию частоты
    pub fn top_n(&self, n: usize) -> Vec<(String, u32)> {
        self.entries.iter().take(n).cloned().collect()
    }

    /// Термы с агрегированным счётчиком не ниже порога
    pub fn terms_at_least(&self, min_count: u32) -> HashSet<String> {
        self.entries
            .iter()
            .filter(|(_, count)| *count >= min_count)
            .map(|(term, _)| term.clone())
            .collect()
    }

    /// Пары (терм, частота) для внешнего рендера облака слов
    ///
    /// Отбираются термы с частотой не ниже `min_count`, не больше
    /// `max_terms` штук, по убыванию частоты.
    pub fn word_cloud_data(&self, max_terms: usize, min_count: u32) -> Vec<(String, u32)> {
        self.entries
            .iter()
            .filter(|(_, count)| *count >= min_count)
            .take(max_terms)
            .cloned()
            .collect()
    }
}
