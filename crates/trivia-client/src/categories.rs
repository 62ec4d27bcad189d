//! Category list endpoint.

use trivia_core::Category;

use crate::{
    TriviaClient,
    error::TriviaError,
    http::{check_response, read_json},
    normalize::decode_field,
};

const RESOURCE: &str = "categories";

#[derive(Debug, serde::Deserialize)]
struct CategoriesResponse {
    trivia_categories: Vec<RawCategory>,
}

#[derive(Debug, serde::Deserialize)]
struct RawCategory {
    id: u32,
    name: String,
}

impl RawCategory {
    fn decode(self) -> Result<Category, TriviaError> {
        Ok(Category {
            id: self.id,
            name: decode_field(&self.name)?,
        })
    }
}

impl TriviaClient {
    /// Fetch every category with its name decoded.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let url = self.endpoint("api_category.php?encode=url3986");
        tracing::debug!(%url, "fetching categories");

        let resp = check_response(self.http.get(&url).send().await?, RESOURCE)?;
        let data: CategoriesResponse = read_json(resp, RESOURCE).await?;
        decode_categories(data)
    }
}

fn decode_categories(data: CategoriesResponse) -> Result<Vec<Category>, TriviaError> {
    data.trivia_categories
        .into_iter()
        .map(RawCategory::decode)
        .collect::<Result<_, _>>()
        .map_err(|e| e.in_response(RESOURCE))
}
