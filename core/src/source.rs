use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use serde::Deserialize;

use crate::*;

/// Identifier the trivia service assigns to a category.
pub type CategoryId = u64;

/// Entry of the `categories` listing, only the id is used.
#[derive(Clone, Debug, PartialEq, Deserialize)]
struct CategorySummary {
    id: CategoryId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClueDetail {
    pub question: String,
    pub answer: String,
}

/// Response of the `category` endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueDetail>,
}

/// Decode the body of `categories?count=<n>`
pub fn decode_category_ids(body: &str) -> Result<Vec<CategoryId>> {
    let summaries: Vec<CategorySummary> = serde_json::from_str(body)
        .map_err(|err| FetchError::DataShape(format!("category list: {}", err)))?;
    Ok(summaries.into_iter().map(|summary| summary.id).collect())
}

/// Decode the body of `category?id=<id>`
pub fn decode_category(body: &str) -> Result<CategoryDetail> {
    serde_json::from_str(body)
        .map_err(|err| FetchError::DataShape(format!("category detail: {}", err)))
}

/// Raw reads from a trivia service.
///
/// Implementations do no sampling, they return what the service sent.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Up to `count` category ids
    async fn category_ids(&self, count: usize) -> Result<Vec<CategoryId>>;

    /// Title and every clue of one category
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}

/// Request the id pool and sample `config.categories` distinct ids from it
pub async fn list_category_ids<S: TriviaSource>(
    source: &S,
    rng: &mut SmallRng,
    config: &BoardConfig,
) -> Result<Vec<CategoryId>> {
    let pool = source.category_ids(config.category_pool).await?;
    log::debug!("got {} category ids", pool.len());
    Ok(sample_distinct(pool, config.categories, rng))
}

/// Fetch one category and sample up to `clue_count` of its clues, all unrevealed
pub async fn fetch_category<S: TriviaSource>(
    source: &S,
    id: CategoryId,
    rng: &mut SmallRng,
    clue_count: usize,
) -> Result<Category> {
    let CategoryDetail { title, clues } = source.category(id).await?;
    log::debug!("category {} \"{}\" has {} clues", id, title, clues.len());
    let clues = sample_distinct(clues, clue_count, rng)
        .into_iter()
        .map(|ClueDetail { question, answer }| Clue::new(question, answer))
        .collect();
    Ok(Category::new(title, clues))
}

/// Build a whole board, category fetches are awaited one after the other
pub async fn setup_board<S: TriviaSource>(
    source: &S,
    rng: &mut SmallRng,
    config: &BoardConfig,
) -> Result<Board> {
    let ids = list_category_ids(source, rng, config).await?;
    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(fetch_category(source, id, rng, config.clues_per_category).await?);
    }
    log::debug!(
        "board ready: {:?}",
        categories
            .iter()
            .map(|category| category.title.to_string())
            .collect::<Vec<_>>()
    );
    Ok(Board::new(categories))
}
