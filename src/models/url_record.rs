// src/models/url_record.rs - Pure data structures
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

// Body of POST /shorten
#[derive(Debug, Serialize)]
pub struct ShortenUrlRequest {
    pub url: String,
}

// Only a JSON object is accepted; the derived impl would also take `["..."]`.
impl<'de> Deserialize<'de> for ShortenUrlRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = ShortenUrlRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with a string `url` field")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut url = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "url" {
                        // Last occurrence wins
                        url = Some(map.next_value::<String>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                let url = url.ok_or_else(|| <A::Error as de::Error>::missing_field("url"))?;
                Ok(ShortenUrlRequest { url })
            }
        }

        deserializer.deserialize_map(RequestVisitor)
    }
}

// Response of POST /shorten
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShortenUrlResponse {
    pub short_url: String,
}

/// A URL mapping held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The key the record is stored under
    pub id: String,

    /// The URL that was shortened
    pub original_url: String,

    /// The public short code, always equal to `id`
    pub short_url: String,

    /// When this record was (last) inserted
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Builds a record stamped with the current time
    pub fn new(id: String, original_url: String) -> Self {
        Self {
            short_url: id.clone(),
            id,
            original_url,
            created_at: Utc::now(),
        }
    }
}
