use anyhow::{Context as _, Result};
use clap::Subcommand;
use serde::Serialize;
use std::{fs, io, path::PathBuf};
use wandery_application::prelude as flows;
use wandery_boundary as json;
use wandery_core::{entities::VisitStatus, usecases};
use wandery_db_memory::Store;

use crate::{config::Config, sample_data};

#[derive(Subcommand)]
pub enum Command {
    /// Print the catalog tiles and all user lists
    Overview,
    /// Print the derived catalog lists with their places
    Catalog,
    /// Print a list with its places
    List { id: String },
    /// Print a place with its address and status
    Place { id: String },
    /// Execute a JSON command script and print the resulting overview
    Apply { file: PathBuf },
    /// Print the visit statuses in menu order
    Statuses,
}

pub fn run(cfg: &Config, command: Command) -> Result<()> {
    let store = Store::new();
    if cfg.sample_data.enabled {
        sample_data::seed(&store)?;
    }
    match command {
        Command::Overview => print_json(&json::Overview::from(flows::overview(&store)?)),
        Command::Catalog => {
            let catalog = flows::derive_catalog(&store)?;
            let lists: Vec<_> = [
                catalog.all_places,
                catalog.to_visit,
                catalog.visited,
                catalog.favorites,
            ]
            .into_iter()
            .map(json::DerivedList::from)
            .collect();
            print_json(&lists)
        }
        Command::List { id } => {
            let detail = flows::place_list_detail(&store, &id, &cfg.viewport)?;
            print_json(&json::PlaceListDetail::from(detail))
        }
        Command::Place { id } => {
            let detail = flows::place_detail(&store, &id, &cfg.viewport)?;
            print_json(&json::PlaceDetail::from(detail))
        }
        Command::Apply { file } => {
            let script = fs::read_to_string(&file)
                .with_context(|| format!("Unable to read {}", file.display()))?;
            let commands: Vec<json::Command> = serde_json::from_str(&script)
                .with_context(|| format!("Invalid command script {}", file.display()))?;
            log::info!("Applying {} commands", commands.len());
            for (i, cmd) in commands.into_iter().enumerate() {
                apply(&store, cfg, cmd).with_context(|| format!("Command #{} failed", i + 1))?;
            }
            print_json(&json::Overview::from(flows::overview(&store)?))
        }
        Command::Statuses => print_json(&status_menu()),
    }
}

fn apply(store: &Store, cfg: &Config, cmd: json::Command) -> Result<()> {
    match cmd {
        json::Command::CreateList(new_list) => {
            let json::NewPlaceList {
                id,
                title,
                description,
                icon,
                color,
            } = new_list;
            let new_list = usecases::NewPlaceList {
                id: id.map(Into::into),
                title,
                description,
                icon: icon.unwrap_or_else(|| cfg.new_list.icon.clone()),
                color: color.map(Into::into).unwrap_or(cfg.new_list.color),
            };
            flows::create_place_list(store, new_list, cfg.validation)?;
        }
        json::Command::CreatePlace(mut new_place) => {
            if new_place.lat.is_none() && new_place.lng.is_none() {
                let center = cfg.viewport.fallback_center;
                new_place.lat = Some(center.lat());
                new_place.lng = Some(center.lng());
            }
            flows::create_place(store, new_place.try_into()?, cfg.validation)?;
        }
        json::Command::UpdatePlaceStatus { id, status } => {
            flows::update_place_status(store, &id, status.into())?;
        }
        json::Command::UpdatePlaceFields { id, fields } => {
            flows::update_place(store, &id, fields.try_into()?, cfg.validation)?;
        }
        json::Command::UpdateListMetadata { id, fields } => {
            flows::update_place_list(store, &id, fields.into(), cfg.validation)?;
        }
        json::Command::AddPlaceToList { list_id, place_id } => {
            flows::add_place_to_list(store, &list_id, &place_id)?;
        }
    }
    Ok(())
}

/// Status menu entries in display order.
fn status_menu() -> Vec<json::StatusMetadata> {
    VisitStatus::MENU
        .into_iter()
        .map(json::StatusMetadata::from)
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(io::stdout().lock(), value)?;
    println!();
    Ok(())
}
