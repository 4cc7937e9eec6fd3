use std::time::Duration;

use reqwest::blocking::Client;

use crate::models::types::PublicMatch;

const PUBLIC_MATCHES_URL: &str = "https://api.opendota.com/api/publicMatches";

// `less_than_match_id` asks for matches strictly older than the given id
// (the feed is sorted descending).
#[cfg_attr(test, mockall::automock)]
pub trait MatchSource {
    fn fetch_batch(&self, less_than_match_id: Option<u64>) -> Vec<PublicMatch>;
}

pub struct OpenDotaClient {
    client: Client,
}

impl OpenDotaClient {
    pub fn new() -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { client })
    }

    fn try_fetch(&self, less_than_match_id: Option<u64>) -> Result<Vec<PublicMatch>, String> {
        let mut request = self.client.get(PUBLIC_MATCHES_URL);
        if let Some(cursor) = less_than_match_id {
            request = request.query(&[("less_than_match_id", cursor)]);
        }

        let response = request.send().map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("request failed: {}", response.status()));
        }
        response.json().map_err(|e| e.to_string())
    }
}

impl MatchSource for OpenDotaClient {
    // Any failure degrades to an empty batch; the caller pauses and retries.
    fn fetch_batch(&self, less_than_match_id: Option<u64>) -> Vec<PublicMatch> {
        match self.try_fetch(less_than_match_id) {
            Ok(matches) => matches,
            Err(e) => {
                println!("Erreur lors de la requête: {}", e);
                Vec::new()
            }
        }
    }
}
