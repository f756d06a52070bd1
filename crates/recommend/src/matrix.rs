use std::collections::{BTreeMap, BTreeSet, HashMap};

use smartrecipe_catalog::Rating;

/// Dense user × recipe rating matrix.
///
/// Rows are distinct user ids and columns distinct recipe ids, both in
/// ascending order. Absent ratings are `0.0`, which is indistinguishable
/// from a rating of zero. Duplicate (user, recipe) ratings collapse to
/// their mean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionMatrix {
    user_ids: Vec<i64>,
    recipe_ids: Vec<i64>,
    user_index: HashMap<i64, usize>,
    values: Vec<f64>,
}

impl InteractionMatrix {
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let user_ids: Vec<i64> = ratings
            .iter()
            .map(|r| r.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let recipe_ids: Vec<i64> = ratings
            .iter()
            .map(|r| r.recipe_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let user_index: HashMap<i64, usize> =
            user_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let recipe_index: HashMap<i64, usize> = recipe_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();

        let mut sums: BTreeMap<(usize, usize), (f64, usize)> = BTreeMap::new();
        for rating in ratings {
            let cell = (user_index[&rating.user_id], recipe_index[&rating.recipe_id]);
            let entry = sums.entry(cell).or_insert((0.0, 0));
            entry.0 += rating.rating;
            entry.1 += 1;
        }

        let n_cols = recipe_ids.len();
        let mut values = vec![0.0; user_ids.len() * n_cols];
        for ((row, col), (sum, count)) in sums {
            values[row * n_cols + col] = sum / count as f64;
        }

        Self {
            user_ids,
            recipe_ids,
            user_index,
            values,
        }
    }

    pub fn user_ids(&self) -> &[i64] {
        &self.user_ids
    }

    pub fn recipe_ids(&self) -> &[i64] {
        &self.recipe_ids
    }

    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    pub fn n_recipes(&self) -> usize {
        self.recipe_ids.len()
    }

    pub fn user_row_index(&self, user_id: i64) -> Option<usize> {
        self.user_index.get(&user_id).copied()
    }

    pub fn row(&self, index: usize) -> &[f64] {
        let n_cols = self.recipe_ids.len();
        &self.values[index * n_cols..(index + 1) * n_cols]
    }

    pub fn user_row(&self, user_id: i64) -> Option<&[f64]> {
        self.user_row_index(user_id).map(|i| self.row(i))
    }

    pub fn get(&self, user_id: i64, recipe_id: i64) -> Option<f64> {
        let row = self.user_row(user_id)?;
        let col = self.recipe_ids.binary_search(&recipe_id).ok()?;
        Some(row[col])
    }
}
