use std::sync::Arc;

use async_graphql::{
    Context, ErrorExtensions, ID, InputValueError, InputValueResult, Interface, Object, Result,
    Scalar, ScalarType, SimpleObject, Value,
};
use chrono::{DateTime, NaiveDate};

use crate::error::McuError;
use crate::model::{self, PictureId};
use crate::storage::Catalog;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a Catalog> {
    ctx.data::<Arc<Catalog>>().map(|c| c.as_ref())
}

/// Parse an ISO-8601 calendar date (`2008-05-02`) or an RFC 3339 timestamp,
/// keeping only its date part.
pub fn parse_date(s: &str) -> crate::error::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| McuError::InvalidDate(s.to_string()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ISO-8601 calendar date, e.g. `2008-05-02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[Scalar]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => parse_date(s).map(Date).map_err(InputValueError::custom),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(format_date(&self.0))
    }
}

#[derive(Clone)]
pub struct Character(Arc<model::Character>);

impl From<Arc<model::Character>> for Character {
    fn from(c: Arc<model::Character>) -> Self {
        Self(c)
    }
}

#[Object]
impl Character {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn alias(&self) -> Option<&str> {
        self.0.alias.as_deref()
    }

    /// Movies and TV shows this character appears in, movies first
    async fn pictures(&self, ctx: &Context<'_>) -> Result<Vec<Picture>> {
        let pictures = catalog(ctx)?.pictures_of(&self.0.id);
        Ok(pictures.into_iter().map(Picture::from).collect())
    }
}

/// Cast of a picture. A missing cast is reported at this field's path and
/// resolves to `null`, leaving the enclosing picture intact.
fn cast_of(ctx: &Context<'_>, picture: &PictureId) -> Result<Option<Vec<Character>>> {
    match catalog(ctx)?.characters_of(picture) {
        Ok(cast) => Ok(Some(cast.into_iter().map(Character::from).collect())),
        Err(e) => {
            let error = e.extend().into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            Ok(None)
        }
    }
}

#[derive(Interface)]
#[graphql(
    field(name = "id", ty = "ID"),
    field(name = "title", ty = "String"),
    field(name = "phase", ty = "i32"),
    field(name = "characters", ty = "Option<Vec<Character>>")
)]
pub enum Picture {
    Movie(Movie),
    TvShow(TvShow),
}

impl From<model::Picture> for Picture {
    fn from(p: model::Picture) -> Self {
        match p {
            model::Picture::Movie(m) => Picture::Movie(Movie(m)),
            model::Picture::TvShow(t) => Picture::TvShow(TvShow(t)),
        }
    }
}

pub struct Movie(Arc<model::Movie>);

#[Object]
impl Movie {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> String {
        self.0.title.clone()
    }

    async fn phase(&self) -> i32 {
        i32::from(self.0.phase)
    }

    async fn release_date(&self) -> Date {
        Date(self.0.release_date)
    }

    /// Characters in on-screen order
    async fn characters(&self, ctx: &Context<'_>) -> Result<Option<Vec<Character>>> {
        cast_of(ctx, &self.0.id)
    }
}

pub struct TvShow(Arc<model::TvShow>);

#[Object]
impl TvShow {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> String {
        self.0.title.clone()
    }

    async fn phase(&self) -> i32 {
        i32::from(self.0.phase)
    }

    async fn seasons(&self) -> Vec<Season> {
        self.0.seasons.iter().map(Season::from).collect()
    }

    /// Characters in on-screen order
    async fn characters(&self, ctx: &Context<'_>) -> Result<Option<Vec<Character>>> {
        cast_of(ctx, &self.0.id)
    }
}

#[derive(SimpleObject)]
pub struct Season {
    pub season_number: i32,
    pub episodes: Vec<Episode>,
}

impl From<&model::Season> for Season {
    fn from(s: &model::Season) -> Self {
        Self {
            season_number: i32::from(s.season_number),
            episodes: s.episodes.iter().map(Episode::from).collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Episode {
    pub title: String,
    pub episode_number: i32,
    pub release_date: Date,
}

impl From<&model::Episode> for Episode {
    fn from(e: &model::Episode) -> Self {
        Self {
            title: e.title.clone(),
            episode_number: i32::from(e.episode_number),
            release_date: Date(e.release_date),
        }
    }
}
