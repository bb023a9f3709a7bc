//! The built-in dataset served by default.

use super::catalog::{Catalog, CatalogBuilder};
use crate::error::{McuError, Result};
use crate::model::{Character, Episode, Movie, Season, TvShow};
use chrono::NaiveDate;

/// Build the catalog shipped with the binary.
pub fn builtin() -> Result<Catalog> {
    let builder = Catalog::builder();
    let builder = characters(builder);
    let builder = movies(builder)?;
    let builder = tv_shows(builder)?;
    casts(builder).build()
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| McuError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

fn characters(b: CatalogBuilder) -> CatalogBuilder {
    b.character(Character::new("tony-stark", "Tony Stark").with_alias("Iron Man"))
        .character(Character::new("james-rhodes", "James Rhodes").with_alias("War Machine"))
        .character(Character::new("phil-coulson", "Phil Coulson"))
        .character(Character::new("nick-fury", "Nick Fury"))
        .character(Character::new("bruce-banner", "Bruce Banner").with_alias("The Hulk"))
        .character(Character::new("natasha-romanoff", "Natasha Romanoff").with_alias("Black Widow"))
        .character(Character::new("thor", "Thor"))
        .character(Character::new("loki", "Loki"))
        .character(Character::new("clint-barton", "Clint Barton").with_alias("Hawkeye"))
        .character(Character::new("jane-foster", "Jane Foster"))
        .character(Character::new("darcy-lewis", "Darcy Lewis"))
        .character(Character::new("steve-rogers", "Steve Rogers").with_alias("Captain America"))
        .character(Character::new("peggy-carter", "Peggy Carter"))
        .character(Character::new("bucky-barnes", "Bucky Barnes").with_alias("The Winter Soldier"))
        .character(Character::new("wanda-maximoff", "Wanda Maximoff").with_alias("Scarlet Witch"))
        .character(Character::new("vision", "Vision"))
        .character(Character::new("monica-rambeau", "Monica Rambeau"))
        .character(Character::new("agatha-harkness", "Agatha Harkness"))
}

fn movies(b: CatalogBuilder) -> Result<CatalogBuilder> {
    Ok(b
        .movie(Movie::new("iron-man", "Iron Man", 1, date(2008, 5, 2)?))
        .movie(Movie::new(
            "the-incredible-hulk",
            "The Incredible Hulk",
            1,
            date(2008, 6, 13)?,
        ))
        .movie(Movie::new("iron-man-2", "Iron Man 2", 1, date(2010, 5, 7)?))
        .movie(Movie::new("thor", "Thor", 1, date(2011, 5, 6)?))
        .movie(Movie::new(
            "captain-america-the-first-avenger",
            "Captain America: The First Avenger",
            1,
            date(2008, 6, 22)?,
        ))
        .movie(Movie::new("the-avengers", "The Avengers", 1, date(2012, 5, 4)?)))
}

fn tv_shows(b: CatalogBuilder) -> Result<CatalogBuilder> {
    let episodes = [
        ("Filmed Before a Live Studio Audience", date(2021, 1, 15)?),
        ("Don't Touch That Dial", date(2021, 1, 15)?),
        ("Now in Color", date(2021, 1, 22)?),
        ("We Interrupt This Program", date(2021, 1, 29)?),
        ("On a Very Special Episode...", date(2021, 2, 5)?),
        ("All-New Halloween Spooktacular!", date(2021, 2, 12)?),
        ("Breaking the Fourth Wall", date(2021, 2, 19)?),
        ("Previously On", date(2021, 2, 26)?),
        ("The Series Finale", date(2021, 3, 5)?),
    ];
    let season = Season {
        season_number: 1,
        episodes: (1u16..)
            .zip(episodes)
            .map(|(episode_number, (title, release_date))| Episode {
                title: title.to_string(),
                episode_number,
                release_date,
            })
            .collect(),
    };

    Ok(b.tv_show(TvShow::new("wanda-vision", "WandaVision", 4).with_season(season)))
}

fn casts(b: CatalogBuilder) -> CatalogBuilder {
    b.cast(
        "iron-man",
        ["tony-stark", "james-rhodes", "nick-fury", "phil-coulson"],
    )
    .cast("the-incredible-hulk", ["bruce-banner", "tony-stark"])
    .cast(
        "iron-man-2",
        [
            "tony-stark",
            "james-rhodes",
            "nick-fury",
            "phil-coulson",
            "natasha-romanoff",
        ],
    )
    .cast(
        "thor",
        [
            "thor",
            "loki",
            "jane-foster",
            "darcy-lewis",
            "clint-barton",
            "phil-coulson",
            "nick-fury",
        ],
    )
    .cast(
        "captain-america-the-first-avenger",
        ["steve-rogers", "peggy-carter", "nick-fury", "bucky-barnes"],
    )
    .cast(
        "the-avengers",
        [
            "tony-stark",
            "steve-rogers",
            "thor",
            "bruce-banner",
            "natasha-romanoff",
            "clint-barton",
            "nick-fury",
            "phil-coulson",
            "loki",
        ],
    )
    .cast(
        "wanda-vision",
        [
            "wanda-maximoff",
            "vision",
            "darcy-lewis",
            "monica-rambeau",
            "agatha-harkness",
        ],
    )
}
