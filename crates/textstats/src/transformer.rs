//! Pipeline stage contract.
//!
//! A stage is configured by its own constructor, then driven through
//! [`Transformer::fit`], [`Transformer::transform`] and
//! [`Transformer::feature_names_out`]. Any type implementing the trait can be
//! run by [`crate::pipeline::run_stage`].

use ndarray::Array2;

/// A fit/transform stage producing a feature matrix from documents.
///
/// # Contract
///
/// - `transform` returns one row per document, in input order.
/// - `feature_names_out` names the columns of that matrix, in order.
/// - `fit` returns the stage itself so calls can be chained.
pub trait Transformer {
    type Error: std::error::Error + 'static;

    /// Learn whatever the stage needs from the training documents.
    fn fit<D: AsRef<str>>(
        &mut self,
        documents: &[D],
        labels: Option<&[f64]>,
    ) -> Result<&mut Self, Self::Error>;

    /// Map documents to a feature matrix.
    fn transform<D: AsRef<str>>(&self, documents: &[D]) -> Result<Array2<f64>, Self::Error>;

    /// Names of the output columns.
    fn feature_names_out(&self, input_features: Option<&[String]>) -> Vec<String>;

    /// Fit on `documents`, then transform them.
    fn fit_transform<D: AsRef<str>>(
        &mut self,
        documents: &[D],
        labels: Option<&[f64]>,
    ) -> Result<Array2<f64>, Self::Error> {
        self.fit(documents, labels)?.transform(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Counts characters; fit remembers how many documents it saw.
    #[derive(Default)]
    struct CharCount {
        seen: usize,
    }

    impl Transformer for CharCount {
        type Error = Infallible;

        fn fit<D: AsRef<str>>(
            &mut self,
            documents: &[D],
            _labels: Option<&[f64]>,
        ) -> Result<&mut Self, Infallible> {
            self.seen += documents.len();
            Ok(self)
        }

        fn transform<D: AsRef<str>>(&self, documents: &[D]) -> Result<Array2<f64>, Infallible> {
            let mut out = Array2::zeros((documents.len(), 1));
            for (i, doc) in documents.iter().enumerate() {
                out[[i, 0]] = doc.as_ref().chars().count() as f64;
            }
            Ok(out)
        }

        fn feature_names_out(&self, _input_features: Option<&[String]>) -> Vec<String> {
            vec!["char_count".to_string()]
        }
    }

    #[test]
    fn test_fit_transform_fits_first() {
        let mut stage = CharCount::default();
        let out = stage.fit_transform(&["abc", "de"], None).unwrap();

        assert_eq!(stage.seen, 2);
        assert_eq!(out.column(0).to_vec(), vec![3.0, 2.0]);
    }

    #[test]
    fn test_fit_chains() {
        let mut stage = CharCount::default();
        stage.fit(&["a"], None).unwrap().fit(&["b", "c"], None).unwrap();
        assert_eq!(stage.seen, 3);
    }
}
