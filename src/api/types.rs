use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub sections: Vec<SearchSection>,
}

/// A typed group of hits ("song", "artist", "album", ...). Hits stay
/// untyped until the song section is picked; other sections vary in shape.
#[derive(Debug, Deserialize)]
pub struct SearchSection {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub hits: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub result: SongResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongResult {
    pub url: String,
    #[serde(default)]
    pub full_title: Option<String>,
}

impl SearchResponse {
    /// First hit of the first "song" section, if any.
    ///
    /// Fails only when that hit doesn't look like a song result.
    pub fn into_first_song(self) -> Result<Option<SongResult>, serde_json::Error> {
        let Some(hit) = self
            .response
            .sections
            .into_iter()
            .find(|section| section.kind == "song")
            .and_then(|section| section.hits.into_iter().next())
        else {
            return Ok(None);
        };

        let hit: SearchHit = serde_json::from_value(hit)?;
        Ok(Some(hit.result))
    }
}
