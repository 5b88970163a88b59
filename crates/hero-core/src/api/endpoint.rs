//! Endpoints of the hero API and URL construction.

use super::error::ApiError;
use super::types::HeroId;
use std::fmt;
use url::Url;

/// The four read-only GET endpoints consumed by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/api/v1/resources/heros/all`: array of `{id, name}`.
    All,
    /// `/api/v1/resources/heros/image?id=`: `{url}`.
    Image,
    /// `/api/v1/resources/heros/occupation?id=`: `{occupation}`.
    Occupation,
    /// `/api/v1/resources/heros/powerstats?id=`: the six ratings.
    PowerStats,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::All => "api/v1/resources/heros/all",
            Endpoint::Image => "api/v1/resources/heros/image",
            Endpoint::Occupation => "api/v1/resources/heros/occupation",
            Endpoint::PowerStats => "api/v1/resources/heros/powerstats",
        }
    }

    /// True for the per-hero endpoints that take an `id` query parameter.
    pub const fn takes_id(self) -> bool {
        !matches!(self, Endpoint::All)
    }

    /// Builds the request URL below `base`. The id is only appended for
    /// per-hero endpoints.
    pub fn url(self, base: &Url, id: Option<&HeroId>) -> Result<Url, ApiError> {
        let mut url = base.join(self.path())?;
        if self.takes_id() {
            if let Some(id) = id {
                url.query_pairs_mut().append_pair("id", id.as_str());
            }
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Parses a base URL, making sure its path ends with `/` so endpoint paths
/// are joined below it rather than replacing its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_has_no_query() {
        let base = parse_base_url("http://127.0.0.1:5000").unwrap();
        let url = Endpoint::All.url(&base, None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/v1/resources/heros/all");
    }

    #[test]
    fn per_hero_url_carries_id() {
        let base = parse_base_url("http://localhost:5000/").unwrap();
        let id = HeroId::new("70").unwrap();
        let url = Endpoint::PowerStats.url(&base, Some(&id)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/v1/resources/heros/powerstats?id=70"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let base = parse_base_url("https://example.com/heroes").unwrap();
        let id = HeroId::new("1").unwrap();
        let url = Endpoint::Image.url(&base, Some(&id)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/heroes/api/v1/resources/heros/image?id=1"
        );
    }

    #[test]
    fn id_is_query_encoded() {
        let base = parse_base_url("http://h/").unwrap();
        let id = HeroId::new("a b&c").unwrap();
        let url = Endpoint::Occupation.url(&base, Some(&id)).unwrap();
        assert_eq!(url.query(), Some("id=a+b%26c"));
    }

    #[test]
    fn invalid_base_is_error() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
