//! Корреляции термов
//!
//! Выборочная корреляция Пирсона между векторами частот термов
//! по документам. Используется для запросов вида "какие термы
//! встречаются в тех же отзывах, что и X".

use crate::error::{Error, Result};
use crate::nlp::indexer::TermDocumentMatrix;

/// Выборочная корреляция Пирсона двух векторов
///
/// `None`, если хотя бы один вектор имеет нулевую дисперсию
/// (корреляция не определена).
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.is_empty() {
        return None;
    }

    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(cov / (var_x * var_y).sqrt())
}

/// Термы, коррелирующие с заданным
///
/// Для каждого другого терма матрицы считается корреляция Пирсона
/// между векторами частот по документам; возвращаются пары
/// `(терм, r)` с `r >= min_corr`, по убыванию `r` (при равенстве -
/// порядок первого появления терма).
///
/// Нулевая дисперсия целевого терма (терм отсутствует или встречается
/// с одинаковой частотой в каждом документе) - `Error::NoVariance`,
/// а не 0 и не NaN. Прочие термы с нулевой дисперсией опускаются:
/// их корреляция не определена.
pub fn correlations(
    matrix: &TermDocumentMatrix,
    term: &str,
    min_corr: f64,
) -> Result<Vec<(String, f64)>> {
    let n_docs = matrix.n_documents();

    let target: Vec<f64> = matrix
        .term_vector(term)
        .ok_or_else(|| Error::NoVariance {
            term: term.to_string(),
            n_docs,
        })?
        .into_iter()
        .map(|c| c as f64)
        .collect();

    if !has_variance(&target) {
        return Err(Error::NoVariance {
            term: term.to_string(),
            n_docs,
        });
    }

    let mut results: Vec<(String, f64)> = Vec::new();
    for other in matrix.terms() {
        if other == term {
            continue;
        }
        let other_vec: Vec<f64> = matrix
            .term_vector(other)
            .unwrap_or_default()
            .into_iter()
            .map(|c| c as f64)
            .collect();

        if let Some(r) = pearson(&target, &other_vec) {
            if r >= min_corr {
                results.push((other.clone(), r));
            }
        }
    }

    results.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(results)
}

fn has_variance(values: &[f64]) -> bool {
    values.windows(2).any(|w| w[0] != w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    fn matrix(texts: &[&str]) -> TermDocumentMatrix {
        let docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc_{}", i), *t))
            .collect();
        TermDocumentMatrix::build(&docs)
    }

    #[test]
    fn test_perfect_correlation() {
        // "crash" и "bug" всегда встречаются вместе
        let m = matrix(&["crash bug", "crash bug", "fine", "fine"]);
        let result = correlations(&m, "crash", 0.9).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "bug");
        assert!((result[0].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_filters() {
        let m = matrix(&["a b", "a b", "a c", "c"]);
        let result = correlations(&m, "a", 0.99).unwrap();
        // "b" коррелирует с "a" положительно, но не идеально
        assert!(result.iter().all(|(_, r)| *r >= 0.99));
    }

    #[test]
    fn test_symmetry() {
        let m = matrix(&["x y z", "x y", "z z y", "x"]);
        let from_x = correlations(&m, "x", -1.0).unwrap();
        let from_y = correlations(&m, "y", -1.0).unwrap();

        let xy = from_x.iter().find(|(t, _)| t == "y").map(|(_, r)| *r);
        let yx = from_y.iter().find(|(t, _)| t == "x").map(|(_, r)| *r);
        let (xy, yx) = (xy.unwrap(), yx.unwrap());
        assert!((xy - yx).abs() < 1e-12);
    }

    #[test]
    fn test_constant_term_is_no_variance() {
        // "game" ровно один раз в каждом документе
        let m = matrix(&["game good", "game bad"]);
        let err = correlations(&m, "game", 0.0).unwrap_err();
        assert!(matches!(err, Error::NoVariance { .. }));
    }

    #[test]
    fn test_unknown_term_is_no_variance() {
        let m = matrix(&["a b", "b c"]);
        let err = correlations(&m, "missing", 0.0).unwrap_err();
        assert!(matches!(err, Error::NoVariance { .. }));
    }

    #[test]
    fn test_constant_partner_omitted() {
        // "c" константен - его корреляция с "a" не определена,
        // поэтому "c" отсутствует в результате даже при пороге -1
        let m = matrix(&["a a c", "a c", "c"]);
        let result = correlations(&m, "a", -1.0).unwrap();
        assert!(result.iter().all(|(t, _)| t != "c"));
    }

    #[test]
    fn test_sorted_descending() {
        let m = matrix(&["a b c", "a b", "a c c", "b"]);
        let result = correlations(&m, "a", -1.0).unwrap();
        for pair in result.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_pearson_basics() {
        assert!(pearson(&[1.0, 2.0], &[1.0]).is_none());
        assert!(pearson(&[], &[]).is_none());
        assert!(pearson(&[1.0, 1.0], &[1.0, 2.0]).is_none());

        let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }
}
