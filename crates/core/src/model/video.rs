use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::draft::{require, Draft, DraftError};
use crate::model::ids::{SeriesId, VideoId};

/// A highlight or feature video hosted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub series_id: Option<SeriesId>,
}

impl Video {
    #[must_use]
    pub fn from_draft(id: VideoId, draft: &VideoDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            url: draft.url.trim().to_string(),
            series_id: draft.series_id,
        }
    }

    #[must_use]
    pub fn to_draft(&self) -> VideoDraft {
        VideoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            series_id: self.series_id,
        }
    }
}

/// Admin form payload for a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    pub series_id: Option<SeriesId>,
}

impl Draft for VideoDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require(&self.title, "title")?;
        require(&self.url, "URL")?;
        let url = Url::parse(self.url.trim()).map_err(|_| DraftError::InvalidUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DraftError::InvalidUrl);
        }
        Ok(())
    }
}
