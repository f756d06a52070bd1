use crate::ingredients::normalize_token;
use crate::vector_space::IngredientVectorSpace;

/// Normalize ingredient tokens and join them into one query document.
pub fn query_document<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| normalize_token(token.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rank every recipe document against the ingredient query. Returns
/// `(document index, similarity)` sorted by descending similarity; equal
/// similarities keep catalog order.
pub fn rank_by_ingredients<S: AsRef<str>>(
    space: &IngredientVectorSpace,
    tokens: &[S],
) -> Vec<(usize, f64)> {
    let query = space.transform(&query_document(tokens));

    let mut ranked: Vec<(usize, f64)> = space
        .similarities(&query)
        .into_iter()
        .enumerate()
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
