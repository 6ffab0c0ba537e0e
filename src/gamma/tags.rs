use crate::{
    endpoint::required_segment,
    types::{Tag, TagsListParams},
    HttpClient, QueryParams, Result,
};

/// `/tags` resources.
#[derive(Clone, Copy, Debug)]
pub struct TagsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> TagsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists tags, optionally paginated or narrowed by slug.
    pub async fn list(&self, params: &TagsListParams) -> Result<Vec<Tag>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/tags", params).await
    }

    /// `GET /tags/{id}`.
    pub async fn get(&self, id: &str) -> Result<Tag> {
        let path = format!("/tags/{}", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }

    /// `GET /tags/slug/{slug}`.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Tag> {
        let path = format!("/tags/slug/{}", required_segment("slug", slug)?);
        self.http.get_json(&path, ()).await
    }
}
