use crate::{endpoint::required_segment, types::Profile, HttpClient, Result};

/// `/profiles` resources.
#[derive(Clone, Copy, Debug)]
pub struct ProfilesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProfilesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Public profile for a wallet address.
    pub async fn get(&self, address: &str) -> Result<Profile> {
        let path = format!("/profiles/{}", required_segment("address", address)?);
        self.http.get_json(&path, ()).await
    }
}
