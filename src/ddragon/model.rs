//! Champion feed models
//!
//! Upstream payloads are only partially modeled: the fields enrichment
//! needs are typed, everything else rides through a flattened map so it
//! reaches the client exactly as the feed served it. Enriched values are
//! built fresh; the parsed upstream data is never edited in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wrapper around the roster payload (`champion.json`)
#[derive(Debug, Deserialize)]
pub struct ChampionListResponse {
    pub data: HashMap<String, ChampionRecord>,
}

/// Wrapper around a champion detail payload (`champion/{name}.json`)
#[derive(Debug, Deserialize)]
pub struct ChampionDetailResponse {
    pub data: HashMap<String, ChampionDetailRecord>,
}

/// One roster entry as served by the feed
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A champion detail payload as served by the feed
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDetailRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skins: Vec<SkinRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A skin entry as served by the feed
#[derive(Debug, Clone, Deserialize)]
pub struct SkinRecord {
    pub id: String,
    pub num: u32,
    pub name: String,
}

/// Computed image URLs for a champion
///
/// Splash and loading art live on an unversioned CDN path; only the icon
/// path embeds the resolved feed version.
#[derive(Debug, Clone, Serialize)]
pub struct ChampionImages {
    pub splash: String,
    pub icon: String,
    pub loading: String,
}

impl ChampionImages {
    pub fn new(base_url: &str, champion_id: &str, version: &str) -> Self {
        Self {
            splash: format!("{base_url}/cdn/img/champion/splash/{champion_id}_0.jpg"),
            icon: format!("{base_url}/cdn/{version}/img/champion/{champion_id}.png"),
            loading: format!("{base_url}/cdn/img/champion/loading/{champion_id}_0.jpg"),
        }
    }
}

/// A roster entry plus its computed image URLs
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedChampion {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub images: ChampionImages,
}

impl EnrichedChampion {
    pub fn new(record: ChampionRecord, base_url: &str, version: &str) -> Self {
        let images = ChampionImages::new(base_url, &record.id, version);
        Self {
            id: record.id,
            name: record.name,
            extra: record.extra,
            images,
        }
    }
}

/// A normalized skin: splash/loading URLs computed from the champion id
/// and the skin variant number, with the "default" skin relabeled to the
/// champion's display name
#[derive(Debug, Clone, Serialize)]
pub struct SkinView {
    pub id: String,
    pub name: String,
    pub splash: String,
    pub loading: String,
}

impl SkinView {
    pub fn new(skin: SkinRecord, champion_id: &str, champion_name: &str, base_url: &str) -> Self {
        let name = if skin.name == "default" {
            champion_name.to_string()
        } else {
            skin.name
        };
        Self {
            id: skin.id,
            name,
            splash: format!(
                "{base_url}/cdn/img/champion/splash/{champion_id}_{num}.jpg",
                num = skin.num
            ),
            loading: format!(
                "{base_url}/cdn/img/champion/loading/{champion_id}_{num}.jpg",
                num = skin.num
            ),
        }
    }
}

/// A champion detail plus computed images and normalized skins
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedChampionDetail {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub images: ChampionImages,
    pub skins: Vec<SkinView>,
}

impl EnrichedChampionDetail {
    pub fn new(record: ChampionDetailRecord, base_url: &str, version: &str) -> Self {
        let images = ChampionImages::new(base_url, &record.id, version);
        let skins = record
            .skins
            .into_iter()
            .map(|skin| SkinView::new(skin, &record.id, &record.name, base_url))
            .collect();
        Self {
            id: record.id,
            name: record.name,
            extra: record.extra,
            images,
            skins,
        }
    }
}
