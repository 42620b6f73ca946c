use gloo::net::http::Request;
use jeopardy_core as game;
use game::{CategoryDetail, CategoryId, FetchError};
use std::rc::Rc;

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io/api/";

/// Client for the jService trivia api.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JServiceClient {
    base_url: Rc<str>,
}

impl JServiceClient {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').into(),
        }
    }

    fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}/{}", self.base_url, path_and_query)
    }

    async fn get_text(&self, url: &str) -> game::Result<String> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !response.ok() {
            log::warn!("GET {} returned {}", url, response.status());
            return Err(FetchError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}

impl game::TriviaSource for JServiceClient {
    async fn category_ids(&self, count: usize) -> game::Result<Vec<CategoryId>> {
        let body = self
            .get_text(&self.endpoint(&format!("categories?count={}", count)))
            .await?;
        game::decode_category_ids(&body)
    }

    async fn category(&self, id: CategoryId) -> game::Result<CategoryDetail> {
        let body = self
            .get_text(&self.endpoint(&format!("category?id={}", id)))
            .await?;
        game::decode_category(&body)
    }
}
