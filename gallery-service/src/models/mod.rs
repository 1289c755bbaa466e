use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Form value that marks a painting as sold
pub const SOLD_MARKER: &str = "Sold";

/// A stored painting: the uploaded image plus its descriptive metadata.
///
/// `id` is `None` until the document store assigns one on insert; it is left
/// out of the inserted document entirely so the store generates `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Painting {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(with = "serde_bytes")]
    pub binary: Vec<u8>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub sold: bool,
}

impl Painting {
    /// Only the exact text `Sold` marks a painting as sold
    pub fn sold_from_form(value: Option<&str>) -> bool {
        value == Some(SOLD_MARKER)
    }
}

/// JSON representation served by the gallery listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintingView {
    pub id: Option<String>,
    /// Standard base64 (with padding) of the raw image bytes
    pub binary: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub size: String,
    pub sold: bool,
}

impl From<Painting> for PaintingView {
    fn from(painting: Painting) -> Self {
        Self {
            id: painting.id.map(|id| id.to_hex()),
            binary: BASE64.encode(&painting.binary),
            title: painting.title,
            artist: painting.artist,
            year: painting.year,
            size: painting.size,
            sold: painting.sold,
        }
    }
}
