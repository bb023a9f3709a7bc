use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use crate::graphql::format_date;
use crate::model::{Character, Picture};

use super::CommandContext;

pub fn handle_characters(ctx: &CommandContext, json: bool) -> Result<()> {
    let characters = ctx.catalog.characters();

    if json {
        println!("{}", serde_json::to_string_pretty(characters)?);
        return Ok(());
    }

    for character in characters {
        let pictures = ctx.catalog.pictures_of(&character.id);
        println!(
            "{} {} {}",
            format_character(character),
            "-".dimmed(),
            format!("{} picture(s)", pictures.len()).dimmed()
        );
    }
    Ok(())
}

pub fn handle_pictures(ctx: &CommandContext, json: bool) -> Result<()> {
    let pictures = ctx.catalog.pictures();

    if json {
        println!("{}", serde_json::to_string_pretty(pictures)?);
        return Ok(());
    }

    for picture in pictures {
        println!("{}", format_picture(picture));
        let cast = ctx.catalog.characters_of(picture.id()).ok();
        println!("    {}", format_cast(cast.as_deref()).dimmed());
    }
    Ok(())
}

fn format_character(character: &Character) -> String {
    match &character.alias {
        Some(alias) => format!("{} ({})", character.name.bold(), alias.magenta()),
        None => character.name.bold().to_string(),
    }
}

fn format_cast(cast: Option<&[Arc<Character>]>) -> String {
    match cast {
        Some(cast) => cast
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        None => "(no cast recorded)".to_string(),
    }
}

fn format_picture(picture: &Picture) -> String {
    let kind = format!("[{}]", picture.kind()).blue();
    let phase = format!("phase {}", picture.phase());
    let detail = match picture {
        Picture::Movie(m) => format!("{}, {}", phase, format_date(&m.release_date)),
        Picture::TvShow(t) => format!(
            "{}, {} season(s), {} episode(s)",
            phase,
            t.seasons.len(),
            t.episode_count()
        ),
    };
    format!("{} {} {}", kind, picture.title().cyan(), detail.dimmed())
}
