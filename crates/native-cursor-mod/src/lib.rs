pub mod bitmaps;
pub mod config;
pub mod graphic;
pub mod host;
pub mod native;
pub mod offsets;
pub mod registry;
pub mod selector;
pub mod session;

#[cfg(windows)]
pub mod hooks;
#[cfg(windows)]
pub mod win32;

use std::path::PathBuf;

use clap::Parser;
use host::HostSymbols;

#[derive(Debug, Parser)]
pub struct Arguments {
    /// TOML file mapping cursor slots to graphics.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub symbols: HostSymbols,
}

#[cfg(all(windows, not(test)))]
mod entry {
    use std::{env, net::TcpStream, sync::Mutex};

    use clap::Parser;
    use native_cursor_common::{ARGUMENTS_VAR, LOG_RELAY_ADDRESS};
    use tracing::{error, info, Level};

    use crate::{hooks, Arguments};

    #[ctor::ctor]
    fn ctor() {
        let Ok(stream) = TcpStream::connect(LOG_RELAY_ADDRESS) else {
            return;
        };

        tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_writer(Mutex::new(stream)).init();

        info!("Connected to launcher");

        if let Err(err) = fallible() {
            error!("Could not enable native cursor: {err:#}");

            if let Err(err) = hooks::disable() {
                error!("Could not roll back hooks: {err:#}");
            }
        }
    }

    #[ctor::dtor]
    fn dtor() {
        if let Err(err) = hooks::disable() {
            error!("Could not disable native cursor: {err:#}");
        }
    }

    fn fallible() -> anyhow::Result<()> {
        let arguments = env::var(ARGUMENTS_VAR)?;

        let words = shell_words::split(&arguments)?;

        let arguments = Arguments::try_parse_from(words)?;

        hooks::enable(arguments)
    }
}
