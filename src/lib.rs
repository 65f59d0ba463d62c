pub mod host_path;

use std::{env, path::{Path, PathBuf}, time::Duration};

use anyhow::Context;

use clap::Parser;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref HOST_EXE: String = env::var("NATIVE_CURSOR_HOST_EXE").unwrap_or_else(|_| String::from("game.exe"));
    pub static ref HOST_PDB: String = env::var("NATIVE_CURSOR_HOST_PDB").unwrap_or_else(|_| pdb_name(&HOST_EXE));
}

pub fn pdb_name(exe: &str) -> String {
    Path::new(exe).with_extension("pdb").to_string_lossy().to_string()
}

#[derive(Debug, Parser)]
pub struct Arguments {
    /// Seconds to wait after launching the game before injecting.
    #[arg(long, short, default_value = "0.0")]
    pub delay: f32,
    pub dll_path: PathBuf,
    /// Arguments for the mod itself.
    #[arg(last(true))]
    pub additional_arguments: Option<Vec<String>>,
}

impl Arguments {
    pub fn delay(&self) -> anyhow::Result<Duration> {
        Duration::try_from_secs_f32(self.delay).with_context(|| format!("invalid --delay: {}", self.delay))
    }

    /// The mod's command line, with the library path standing in for the program name.
    pub fn mod_arguments(&self) -> String {
        let program = self.dll_path.to_string_lossy().to_string();

        let words = std::iter::once(program).chain(self.additional_arguments.iter().flatten().cloned());

        shell_words::join(words)
    }
}
