use super::types::{PictureId, PictureKind};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: PictureId,
    pub title: String,
    pub phase: u8,
    pub release_date: NaiveDate,
}

impl Movie {
    pub fn new(
        id: impl Into<PictureId>,
        title: impl Into<String>,
        phase: u8,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            phase,
            release_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub title: String,
    pub episode_number: u16,
    pub release_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Season {
    pub season_number: u16,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvShow {
    pub id: PictureId,
    pub title: String,
    pub phase: u8,
    pub seasons: Vec<Season>,
}

impl TvShow {
    pub fn new(id: impl Into<PictureId>, title: impl Into<String>, phase: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            phase,
            seasons: Vec::new(),
        }
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.seasons.push(season);
        self
    }

    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}

/// A movie or a TV show. The variant is fixed when the record is built;
/// clones share the underlying record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Picture {
    Movie(Arc<Movie>),
    TvShow(Arc<TvShow>),
}

impl Picture {
    pub fn id(&self) -> &PictureId {
        match self {
            Picture::Movie(m) => &m.id,
            Picture::TvShow(t) => &t.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Picture::Movie(m) => &m.title,
            Picture::TvShow(t) => &t.title,
        }
    }

    pub fn phase(&self) -> u8 {
        match self {
            Picture::Movie(m) => m.phase,
            Picture::TvShow(t) => t.phase,
        }
    }

    pub fn is_same(&self, other: &Picture) -> bool {
        match (self, other) {
            (Picture::Movie(a), Picture::Movie(b)) => Arc::ptr_eq(a, b),
            (Picture::TvShow(a), Picture::TvShow(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn kind(&self) -> PictureKind {
        match self {
            Picture::Movie(_) => PictureKind::Movie,
            Picture::TvShow(_) => PictureKind::TvShow,
        }
    }
}

impl From<Movie> for Picture {
    fn from(movie: Movie) -> Self {
        Picture::Movie(Arc::new(movie))
    }
}

impl From<TvShow> for Picture {
    fn from(show: TvShow) -> Self {
        Picture::TvShow(Arc::new(show))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_follows_variant() {
        let movie: Picture = Movie::new("thor", "Thor", 1, date(2011, 5, 6)).into();
        let show: Picture = TvShow::new("wanda-vision", "WandaVision", 4).into();

        assert_eq!(movie.kind(), PictureKind::Movie);
        assert_eq!(show.kind(), PictureKind::TvShow);
    }

    #[test]
    fn test_empty_show_is_still_a_tv_show() {
        // no seasons does not make it a movie
        let show: Picture = TvShow::new("pilot", "Pilot", 5).into();
        assert_eq!(show.kind(), PictureKind::TvShow);
    }

    #[test]
    fn test_serialized_kind_tag() {
        let show: Picture = TvShow::new("wanda-vision", "WandaVision", 4).into();
        let json = serde_json::to_value(&show).unwrap();
        assert_eq!(json["kind"], "tv-show");
        assert_eq!(json["title"], "WandaVision");
    }
}
