//! Media Asset Value Object

use serde::{Deserialize, Deserializer, Serialize};

/// Reference to a file hosted by the content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaAsset {
    pub url: String,
    pub imgix_url: String,
}

impl MediaAsset {
    /// Asset whose CDN and image-service URLs are the same
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            imgix_url: url.clone(),
            url,
        }
    }

    /// Preferred URL for display (image service first)
    pub fn display_url(&self) -> &str {
        if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        }
    }
}

// File metafields come back either as `{url, imgix_url}` or as a bare URL.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMedia {
    Url(String),
    Object {
        #[serde(default)]
        url: String,
        #[serde(default)]
        imgix_url: String,
    },
}

impl<'de> Deserialize<'de> for MediaAsset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawMedia::deserialize(deserializer)? {
            RawMedia::Url(url) => Ok(Self::from_url(url)),
            RawMedia::Object { url, imgix_url } => Ok(Self { url, imgix_url }),
        }
    }
}

/// Deserialize an optional media field, mapping `""` and `null` to `None`
pub(crate) fn optional_media<'de, D>(deserializer: D) -> Result<Option<MediaAsset>, D::Error>
where
    D: Deserializer<'de>,
{
    let media = Option::<MediaAsset>::deserialize(deserializer)?;
    Ok(media.filter(|m| !m.url.is_empty() || !m.imgix_url.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_form() {
        let media: MediaAsset = serde_json::from_str(
            r#"{"url": "https://cdn.example/a.png", "imgix_url": "https://img.example/a.png"}"#,
        )
        .unwrap();
        assert_eq!(media.url, "https://cdn.example/a.png");
        assert_eq!(media.display_url(), "https://img.example/a.png");
    }

    #[test]
    fn parses_bare_url() {
        let media: MediaAsset = serde_json::from_str(r#""/resume.pdf""#).unwrap();
        assert_eq!(media, MediaAsset::from_url("/resume.pdf"));
    }

    #[test]
    fn display_url_falls_back_to_cdn_url() {
        let media = MediaAsset {
            url: "https://cdn.example/a.png".to_string(),
            imgix_url: String::new(),
        };
        assert_eq!(media.display_url(), "https://cdn.example/a.png");
    }
}
