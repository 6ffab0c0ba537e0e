use crate::{
    endpoint::required_segment,
    types::{Event, EventsListParams, Tag},
    HttpClient, QueryParams, Result,
};

/// `/events` resources.
#[derive(Clone, Copy, Debug)]
pub struct EventsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> EventsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists events matching `params`. Unset filters are not sent.
    pub async fn list(&self, params: &EventsListParams) -> Result<Vec<Event>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/events", params).await
    }

    /// `GET /events/{id}`. A blank `id` fails before sending.
    pub async fn get(&self, id: &str) -> Result<Event> {
        let path = format!("/events/{}", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }

    /// `GET /events/slug/{slug}`. The slug is percent-encoded.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Event> {
        let path = format!("/events/slug/{}", required_segment("slug", slug)?);
        self.http.get_json(&path, ()).await
    }

    /// Tags attached to one event.
    pub async fn tags(&self, id: &str) -> Result<Vec<Tag>> {
        let path = format!("/events/{}/tags", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }
}
