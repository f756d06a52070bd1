pub mod collaborative;
pub mod content;
pub mod engine;
pub mod error;
pub mod hybrid;
pub mod ingredients;
pub mod matrix;
pub mod similarity;
pub mod stop_words;
pub mod vector_space;
pub mod vocabulary;

pub use collaborative::NEIGHBORHOOD_SIZE;
pub use engine::{DEFAULT_RESULT_COUNT, RecommendationEngine};
pub use error::{RecommendError, RecommendResult};
pub use hybrid::HYBRID_SEED_COUNT;
pub use ingredients::{IngredientParse, normalize_token, parse_ingredients, split_ingredients};
pub use matrix::InteractionMatrix;
pub use similarity::{UserSimilarity, cosine_similarity};
pub use vector_space::{IngredientVectorSpace, SparseVector, tokenize};
pub use vocabulary::build_vocabulary;
