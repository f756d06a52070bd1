use crate::matrix::InteractionMatrix;
use crate::similarity::UserSimilarity;

/// Number of most similar users that contribute to a collaborative score.
pub const NEIGHBORHOOD_SIZE: usize = 3;

/// Score every recipe `user_id` has not rated by the similarity-weighted
/// mean rating of the user's nearest neighbours.
///
/// Returns `None` for a user absent from the matrix. Results are sorted by
/// descending score, ties by ascending recipe id.
pub fn rank_unrated(
    matrix: &InteractionMatrix,
    similarity: &UserSimilarity,
    user_id: i64,
) -> Option<Vec<(i64, f64)>> {
    let row_index = matrix.user_row_index(user_id)?;

    let mut neighbors: Vec<(usize, f64)> = similarity
        .row(row_index)
        .iter()
        .copied()
        .enumerate()
        .filter(|(i, _)| *i != row_index)
        .collect();
    neighbors.sort_by(|a, b| b.1.total_cmp(&a.1));
    neighbors.truncate(NEIGHBORHOOD_SIZE);

    let weight_sum: f64 = neighbors.iter().map(|(_, sim)| sim).sum();
    let own_ratings = matrix.row(row_index);

    let mut scored: Vec<(i64, f64)> = matrix
        .recipe_ids()
        .iter()
        .enumerate()
        .filter(|(col, _)| own_ratings[*col] == 0.0)
        .map(|(col, &recipe_id)| {
            let score = if weight_sum == 0.0 {
                0.0
            } else {
                neighbors
                    .iter()
                    .map(|&(k, sim)| sim * matrix.row(k)[col])
                    .sum::<f64>()
                    / weight_sum
            };
            (recipe_id, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    tracing::debug!(
        user_id,
        neighbors = neighbors.len(),
        candidates = scored.len(),
        "Collaborative candidates scored"
    );

    Some(scored)
}
