use crate::matrix::InteractionMatrix;

/// Cosine similarity of two equal-length vectors. A zero vector is
/// orthogonal to everything, itself included.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Symmetric user × user cosine similarity over the rows of an
/// [`InteractionMatrix`]. Rows and columns follow the matrix's user order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSimilarity {
    user_ids: Vec<i64>,
    values: Vec<f64>,
}

impl UserSimilarity {
    pub fn compute(matrix: &InteractionMatrix) -> Self {
        let n = matrix.n_users();
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            for j in i..n {
                let sim = cosine_similarity(matrix.row(i), matrix.row(j));
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }

        Self {
            user_ids: matrix.user_ids().to_vec(),
            values,
        }
    }

    pub fn user_ids(&self) -> &[i64] {
        &self.user_ids
    }

    pub fn row(&self, index: usize) -> &[f64] {
        let n = self.user_ids.len();
        &self.values[index * n..(index + 1) * n]
    }

    pub fn get(&self, a: i64, b: i64) -> Option<f64> {
        let i = self.user_ids.binary_search(&a).ok()?;
        let j = self.user_ids.binary_search(&b).ok()?;
        Some(self.row(i)[j])
    }
}
