use crate::{
    error::{McuError, Result},
    model::{Character, CharacterId, Movie, Picture, PictureId, PictureKind, TvShow},
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Read-only tables of characters, pictures and casts.
///
/// Records are held behind `Arc` so a character listed in several casts is
/// the same allocation everywhere it appears. Nothing is mutated after
/// [`CatalogBuilder::build`], so a `Catalog` can be shared across requests
/// without locking.
#[derive(Debug)]
pub struct Catalog {
    characters: Vec<Arc<Character>>,
    /// Movies first, then TV shows, each in authored order.
    pictures: Vec<Picture>,
    character_index: HashMap<CharacterId, usize>,
    picture_index: HashMap<PictureId, usize>,
    /// Cast per picture, in on-screen order.
    casts: HashMap<PictureId, Vec<Arc<Character>>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// All characters, in table order.
    pub fn characters(&self) -> &[Arc<Character>] {
        &self.characters
    }

    /// All movies followed by all TV shows.
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn movies(&self) -> impl Iterator<Item = &Picture> {
        self.pictures
            .iter()
            .filter(|p| p.kind() == PictureKind::Movie)
    }

    pub fn tv_shows(&self) -> impl Iterator<Item = &Picture> {
        self.pictures
            .iter()
            .filter(|p| p.kind() == PictureKind::TvShow)
    }

    pub fn character(&self, id: &CharacterId) -> Option<&Arc<Character>> {
        self.character_index.get(id).map(|&i| &self.characters[i])
    }

    pub fn picture(&self, id: &PictureId) -> Option<&Picture> {
        self.picture_index.get(id).map(|&i| &self.pictures[i])
    }

    /// Characters appearing in a picture, in on-screen order.
    ///
    /// Fails with [`McuError::NoCast`] when the picture has no cast entry,
    /// which includes ids that are not in the catalog at all.
    pub fn characters_of(&self, picture: &PictureId) -> Result<Vec<Arc<Character>>> {
        match self.casts.get(picture) {
            Some(cast) => {
                debug!(picture = %picture, count = cast.len(), "Resolved cast");
                Ok(cast.clone())
            }
            None => {
                warn!(picture = %picture, "No cast recorded");
                Err(McuError::NoCast(picture.to_string()))
            }
        }
    }

    /// Every picture whose cast includes the character. Movies come first,
    /// then TV shows; table order within each group.
    pub fn pictures_of(&self, character: &CharacterId) -> Vec<Picture> {
        let found: Vec<Picture> = self
            .pictures
            .iter()
            .filter(|p| {
                self.casts
                    .get(p.id())
                    .is_some_and(|cast| cast.iter().any(|c| &c.id == character))
            })
            .cloned()
            .collect();
        debug!(character = %character, count = found.len(), "Resolved pictures");
        found
    }
}

/// Collects records and casts, then validates them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    characters: Vec<Character>,
    movies: Vec<Movie>,
    tv_shows: Vec<TvShow>,
    casts: Vec<(PictureId, Vec<CharacterId>)>,
}

impl CatalogBuilder {
    pub fn character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    pub fn movie(mut self, movie: Movie) -> Self {
        self.movies.push(movie);
        self
    }

    pub fn tv_show(mut self, show: TvShow) -> Self {
        self.tv_shows.push(show);
        self
    }

    pub fn cast<I, C>(mut self, picture: impl Into<PictureId>, characters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CharacterId>,
    {
        self.casts.push((
            picture.into(),
            characters.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn build(self) -> Result<Catalog> {
        let mut character_index = HashMap::with_capacity(self.characters.len());
        let mut characters = Vec::with_capacity(self.characters.len());
        for character in self.characters {
            if character_index.contains_key(&character.id) {
                return Err(McuError::DuplicateId {
                    kind: "character",
                    id: character.id.to_string(),
                });
            }
            character_index.insert(character.id.clone(), characters.len());
            characters.push(Arc::new(character));
        }

        let mut picture_index = HashMap::new();
        let mut pictures = Vec::with_capacity(self.movies.len() + self.tv_shows.len());
        let all = self
            .movies
            .into_iter()
            .map(Picture::from)
            .chain(self.tv_shows.into_iter().map(Picture::from));
        for picture in all {
            if picture_index.contains_key(picture.id()) {
                return Err(McuError::DuplicateId {
                    kind: "picture",
                    id: picture.id().to_string(),
                });
            }
            picture_index.insert(picture.id().clone(), pictures.len());
            pictures.push(picture);
        }

        let mut casts = HashMap::with_capacity(self.casts.len());
        let mut seen = HashSet::new();
        for (picture, members) in self.casts {
            if !picture_index.contains_key(&picture) {
                return Err(McuError::PictureNotFound(picture.to_string()));
            }
            if !seen.insert(picture.clone()) {
                return Err(McuError::DuplicateId {
                    kind: "cast",
                    id: picture.to_string(),
                });
            }
            let cast = members
                .iter()
                .map(|id| {
                    character_index
                        .get(id)
                        .map(|&i| Arc::clone(&characters[i]))
                        .ok_or_else(|| McuError::CharacterNotFound(id.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            casts.insert(picture, cast);
        }

        debug!(
            characters = characters.len(),
            pictures = pictures.len(),
            casts = casts.len(),
            "Catalog built"
        );

        Ok(Catalog {
            characters,
            pictures,
            character_index,
            picture_index,
            casts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_catalog() -> Catalog {
        Catalog::builder()
            .character(Character::new("tony-stark", "Tony Stark").with_alias("Iron Man"))
            .character(Character::new("james-rhodes", "James Rhodes"))
            .character(Character::new("darcy-lewis", "Darcy Lewis"))
            .tv_show(TvShow::new("wanda-vision", "WandaVision", 4))
            .movie(Movie::new("iron-man", "Iron Man", 1, date(2008, 5, 2)))
            .movie(Movie::new("thor", "Thor", 1, date(2011, 5, 6)))
            .cast("iron-man", ["tony-stark", "james-rhodes"])
            .cast("thor", ["darcy-lewis"])
            .cast("wanda-vision", ["darcy-lewis"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_pictures_lists_movies_before_tv_shows() {
        let catalog = small_catalog();
        let titles: Vec<_> = catalog.pictures().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Iron Man", "Thor", "WandaVision"]);
    }

    #[test]
    fn test_characters_of_keeps_on_screen_order() {
        let catalog = small_catalog();
        let cast = catalog.characters_of(&"iron-man".into()).unwrap();
        let names: Vec<_> = cast.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tony Stark", "James Rhodes"]);
    }

    #[test]
    fn test_characters_of_unknown_picture_is_not_found() {
        let catalog = small_catalog();
        let err = catalog.characters_of(&"hulk".into()).unwrap_err();
        assert!(matches!(err, McuError::NoCast(ref id) if id == "hulk"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_uncast_picture_is_not_found() {
        let catalog = Catalog::builder()
            .movie(Movie::new("hulk", "The Incredible Hulk", 1, date(2008, 6, 13)))
            .build()
            .unwrap();
        assert!(catalog.picture(&"hulk".into()).is_some());
        assert!(catalog.characters_of(&"hulk".into()).is_err());
    }

    #[test]
    fn test_pictures_of_puts_movies_first() {
        let catalog = small_catalog();
        let pictures = catalog.pictures_of(&"darcy-lewis".into());
        let kinds: Vec<_> = pictures.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec![PictureKind::Movie, PictureKind::TvShow]);
    }

    #[test]
    fn test_pictures_of_uncast_character_is_empty() {
        let catalog = Catalog::builder()
            .character(Character::new("loki", "Loki"))
            .build()
            .unwrap();
        assert!(catalog.pictures_of(&"loki".into()).is_empty());
    }

    #[test]
    fn test_cast_members_share_one_record() {
        let catalog = small_catalog();
        let in_thor = catalog.characters_of(&"thor".into()).unwrap();
        let in_show = catalog.characters_of(&"wanda-vision".into()).unwrap();
        let table = catalog.character(&"darcy-lewis".into()).unwrap();

        assert!(Arc::ptr_eq(&in_thor[0], &in_show[0]));
        assert!(Arc::ptr_eq(&in_thor[0], table));
    }

    #[test]
    fn test_pictures_of_returns_table_records() {
        let catalog = small_catalog();
        let found = catalog.pictures_of(&"tony-stark".into());
        let table = catalog.picture(&"iron-man".into()).unwrap();

        assert_eq!(found.len(), 1);
        assert!(found[0].is_same(table));
    }

    #[test]
    fn test_build_rejects_duplicate_character() {
        let err = Catalog::builder()
            .character(Character::new("thor", "Thor"))
            .character(Character::new("thor", "Thor Odinson"))
            .build()
            .unwrap_err();
        assert!(matches!(err, McuError::DuplicateId { kind: "character", .. }));
    }

    #[test]
    fn test_build_rejects_picture_id_shared_by_movie_and_show() {
        let err = Catalog::builder()
            .movie(Movie::new("loki", "Loki", 4, date(2021, 6, 9)))
            .tv_show(TvShow::new("loki", "Loki", 4))
            .build()
            .unwrap_err();
        assert!(matches!(err, McuError::DuplicateId { kind: "picture", .. }));
    }

    #[test]
    fn test_build_rejects_unknown_cast_member() {
        let err = Catalog::builder()
            .movie(Movie::new("thor", "Thor", 1, date(2011, 5, 6)))
            .cast("thor", ["odin"])
            .build()
            .unwrap_err();
        assert!(matches!(err, McuError::CharacterNotFound(ref id) if id == "odin"));
    }

    #[test]
    fn test_build_rejects_cast_for_unknown_picture() {
        let err = Catalog::builder()
            .character(Character::new("thor", "Thor"))
            .cast("thor-2", ["thor"])
            .build()
            .unwrap_err();
        assert!(matches!(err, McuError::PictureNotFound(_)));
    }

    #[test]
    fn test_build_rejects_second_cast_for_same_picture() {
        let err = Catalog::builder()
            .character(Character::new("thor", "Thor"))
            .movie(Movie::new("thor", "Thor", 1, date(2011, 5, 6)))
            .cast("thor", ["thor"])
            .cast("thor", ["thor"])
            .build()
            .unwrap_err();
        assert!(matches!(err, McuError::DuplicateId { kind: "cast", .. }));
    }
}
