use std::{env, path::PathBuf};

use anyhow::{anyhow, Context};
use steamlocate::SteamDir;

pub const HOST_DIR_VAR: &str = "NATIVE_CURSOR_HOST_DIR";
pub const STEAM_APP_ID_VAR: &str = "NATIVE_CURSOR_STEAM_APP_ID";

/// Install directory of the host game, from the environment or the Steam library.
pub fn get_host_dir() -> anyhow::Result<PathBuf> {
    match HostLocation::from_vars(env::var(HOST_DIR_VAR).ok(), env::var(STEAM_APP_ID_VAR).ok())? {
        HostLocation::Directory(dir) => Ok(dir),
        HostLocation::SteamApp(app_id) => {
            let mut steam_dir = SteamDir::locate().ok_or(anyhow!("could not locate a Steam installation"))?;

            let app = steam_dir.app(&app_id).ok_or(anyhow!("Steam app {app_id} is not installed"))?;

            Ok(app.path.clone())
        },
    }
}

#[derive(Debug, PartialEq, Eq)]
enum HostLocation {
    Directory(PathBuf),
    SteamApp(u32),
}

impl HostLocation {
    fn from_vars(dir: Option<String>, app_id: Option<String>) -> anyhow::Result<Self> {
        if let Some(dir) = dir {
            return Ok(HostLocation::Directory(PathBuf::from(dir)));
        }

        let app_id = app_id.ok_or(anyhow!("set {HOST_DIR_VAR} or {STEAM_APP_ID_VAR} to find the game"))?;

        let app_id = app_id.trim().parse().with_context(|| format!("{STEAM_APP_ID_VAR} is not an app id: {app_id:?}"))?;

        Ok(HostLocation::SteamApp(app_id))
    }
}
