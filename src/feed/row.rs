use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One raw record of the help sheet.
///
/// Every column is optional. Missing keys, `null`, and empty strings all
/// become `None` (or an empty list for images) instead of a parse failure,
/// and numeric or boolean cells are kept in their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleRow {
    #[serde(rename = "Category", default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "Content", default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(rename = "Image Url", default, deserialize_with = "image_list")]
    pub image_urls: Vec<String>,
    #[serde(rename = "Video Url", default, deserialize_with = "lenient_string")]
    pub video_url: Option<String>,
    #[serde(rename = "Icon Url", default, deserialize_with = "lenient_string")]
    pub icon_url: Option<String>,
}

/// Split a comma-separated cell into trimmed, non-empty URLs.
///
/// ```
/// use helpdesk::feed::split_image_urls;
///
/// assert_eq!(split_image_urls("url1, url2 ,url3"), vec!["url1", "url2", "url3"]);
/// assert!(split_image_urls("").is_empty());
/// ```
pub fn split_image_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn coerce(value: Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce(Value::deserialize(deserializer)?))
}

fn image_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce(Value::deserialize(deserializer)?)
        .map(|raw| split_image_urls(&raw))
        .unwrap_or_default())
}
