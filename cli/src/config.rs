use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sweeper_core::{BoardConfig, CellCount, Coord, TILE_SIZE};

use crate::Args;

/// Contents of a `--config` file, every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) width: Option<Coord>,
    pub(crate) height: Option<Coord>,
    pub(crate) mines: Option<CellCount>,
    pub(crate) tile_size: Option<u32>,
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub(crate) board: BoardConfig,
    pub(crate) tile_size: u32,
}

impl Settings {
    /// Defaults, overridden by the config file, overridden by flags.
    pub(crate) fn resolve(args: &Args) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let flags = FileConfig {
            width: args.width,
            height: args.height,
            mines: args.mines,
            tile_size: args.tile_size,
        };
        Self::merge(file, flags)
    }

    fn merge(file: FileConfig, flags: FileConfig) -> anyhow::Result<Self> {
        let defaults = BoardConfig::default();
        let board = BoardConfig::new(
            flags.width.or(file.width).unwrap_or(defaults.width),
            flags.height.or(file.height).unwrap_or(defaults.height),
            flags.mines.or(file.mines).unwrap_or(defaults.mines),
        )
        .context("Board needs at least one tile without a mine")?;
        let tile_size = flags.tile_size.or(file.tile_size).unwrap_or(TILE_SIZE);

        log::debug!("Resolved {:?} with {}px tiles", board, tile_size);
        Ok(Self { board, tile_size })
    }
}
