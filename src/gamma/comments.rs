use crate::{
    endpoint::required_segment,
    types::{Comment, CommentsListParams},
    HttpClient, QueryParams, Result,
};

/// `/comments` resources.
#[derive(Clone, Copy, Debug)]
pub struct CommentsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CommentsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists comments on a market or event.
    pub async fn list(&self, params: &CommentsListParams) -> Result<Vec<Comment>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/comments", params).await
    }

    /// `GET /comments/{id}`.
    pub async fn get(&self, id: &str) -> Result<Comment> {
        let path = format!("/comments/{}", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }
}
