use std::collections::HashMap;

use smartrecipe_catalog::{Catalog, RecipeSummary};

use crate::collaborative::rank_unrated;
use crate::content::rank_by_ingredients;
use crate::error::RecommendResult;
use crate::hybrid::{HYBRID_SEED_COUNT, seed_tokens};
use crate::matrix::InteractionMatrix;
use crate::similarity::UserSimilarity;
use crate::vector_space::IngredientVectorSpace;
use crate::vocabulary::build_vocabulary;

/// Default number of recipes returned by a recommendation call.
pub const DEFAULT_RESULT_COUNT: usize = 5;

/// Everything derived from one catalog snapshot.
#[derive(Debug, Clone)]
struct Artifacts {
    catalog: Catalog,
    recipe_index: HashMap<i64, usize>,
    matrix: InteractionMatrix,
    similarity: UserSimilarity,
    vector_space: IngredientVectorSpace,
    vocabulary: Vec<String>,
}

impl Artifacts {
    fn build(catalog: Catalog) -> RecommendResult<Self> {
        let documents: Vec<&str> = catalog
            .recipes
            .iter()
            .map(|recipe| recipe.ingredients.as_str())
            .collect();
        let vector_space = IngredientVectorSpace::fit(&documents)?;

        let matrix = InteractionMatrix::from_ratings(&catalog.ratings);
        let similarity = UserSimilarity::compute(&matrix);
        let vocabulary = build_vocabulary(&catalog.recipes);

        let mut recipe_index = HashMap::with_capacity(catalog.recipes.len());
        for (i, recipe) in catalog.recipes.iter().enumerate() {
            recipe_index.entry(recipe.recipe_id).or_insert(i);
        }

        Ok(Self {
            catalog,
            recipe_index,
            matrix,
            similarity,
            vector_space,
            vocabulary,
        })
    }
}

/// Recommendation service owning the artifacts derived from a catalog.
///
/// The artifacts are built once and only replaced by [`rebuild`]; every
/// recommendation call reads them without mutation, so a shared engine
/// needs no locking.
///
/// [`rebuild`]: RecommendationEngine::rebuild
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    artifacts: Artifacts,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> RecommendResult<Self> {
        let artifacts = Artifacts::build(catalog)?;
        let engine = Self { artifacts };
        engine.log_sizes();
        Ok(engine)
    }

    /// Rebuild every artifact from a new catalog snapshot. On error the
    /// previous artifacts stay in place.
    pub fn rebuild(&mut self, catalog: Catalog) -> RecommendResult<()> {
        self.artifacts = Artifacts::build(catalog)?;
        self.log_sizes();
        Ok(())
    }

    fn log_sizes(&self) {
        let a = &self.artifacts;
        tracing::info!(
            users = a.matrix.n_users(),
            rated_recipes = a.matrix.n_recipes(),
            recipes = a.catalog.recipes.len(),
            terms = a.vector_space.n_terms(),
            vocabulary = a.vocabulary.len(),
            "Recommendation artifacts built"
        );
    }

    /// Recipes the user has not rated, scored by their three most similar
    /// users. Empty for an unknown user.
    #[tracing::instrument(skip(self))]
    pub fn recommend_cf(&self, user_id: i64, n: usize) -> Vec<RecipeSummary> {
        let a = &self.artifacts;
        let Some(ranked) = rank_unrated(&a.matrix, &a.similarity, user_id) else {
            tracing::debug!("Unknown user, no collaborative recommendation");
            return Vec::new();
        };

        ranked
            .into_iter()
            .filter_map(|(recipe_id, _)| self.summary_of(recipe_id))
            .take(n)
            .collect()
    }

    /// Recipes whose ingredient text is closest to the given tokens.
    #[tracing::instrument(skip(self, tokens), fields(n_tokens = tokens.len()))]
    pub fn recommend_content<S: AsRef<str>>(&self, tokens: &[S], n: usize) -> Vec<RecipeSummary> {
        let a = &self.artifacts;
        rank_by_ingredients(&a.vector_space, tokens)
            .into_iter()
            .take(n)
            .map(|(doc, _)| a.catalog.recipes[doc].summary())
            .collect()
    }

    /// Content-based search seeded with the ingredients of the user's top
    /// collaborative picks. Empty whenever the collaborative step is.
    #[tracing::instrument(skip(self))]
    pub fn recommend_hybrid(&self, user_id: i64, n: usize) -> Vec<RecipeSummary> {
        let seeds = self.recommend_cf(user_id, HYBRID_SEED_COUNT);
        if seeds.is_empty() {
            return Vec::new();
        }

        let tokens = seed_tokens(&seeds);
        self.recommend_content(tokens.as_slice(), n)
    }

    /// Sorted ingredient tokens for selection lists.
    pub fn vocabulary(&self) -> &[String] {
        &self.artifacts.vocabulary
    }

    /// Users known to the collaborative model, ascending.
    pub fn user_ids(&self) -> &[i64] {
        self.artifacts.matrix.user_ids()
    }

    pub fn matrix(&self) -> &InteractionMatrix {
        &self.artifacts.matrix
    }

    pub fn similarity(&self) -> &UserSimilarity {
        &self.artifacts.similarity
    }

    pub fn vector_space(&self) -> &IngredientVectorSpace {
        &self.artifacts.vector_space
    }

    pub fn catalog(&self) -> &Catalog {
        &self.artifacts.catalog
    }

    fn summary_of(&self, recipe_id: i64) -> Option<RecipeSummary> {
        let a = &self.artifacts;
        a.recipe_index
            .get(&recipe_id)
            .map(|&i| a.catalog.recipes[i].summary())
    }
}
