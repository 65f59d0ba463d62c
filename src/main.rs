use std::process::Command;

use clap::Parser;
use native_cursor::{host_path::get_host_dir, Arguments, HOST_EXE, HOST_PDB};
use native_cursor_common::{ARGUMENTS_VAR, PDB_VAR};
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let args = Arguments::parse();

    let host_dir = get_host_dir()?;
    let host_path = host_dir.join(&*HOST_EXE);

    info!("Host path: {host_path:?}");

    let mut host_command = Command::new(&host_path);

    host_command.current_dir(&host_dir);
    host_command.env(ARGUMENTS_VAR, args.mod_arguments());
    host_command.env(PDB_VAR, host_dir.join(&*HOST_PDB));

    launch(host_command, &args)
}

#[cfg(windows)]
fn launch(mut host_command: Command, args: &Arguments) -> anyhow::Result<()> {
    use std::thread::sleep;

    use dll_syringe::{process::{OwnedProcess, Process}, Syringe};

    let delay = args.delay()?;

    let host_process = host_command.spawn()?;

    info!("Launched host process: {}", host_process.id());

    let target_process = OwnedProcess::from(host_process);
    let syringe = Syringe::for_process(target_process);
    info!("Created syringe for host");

    sleep(delay);

    let result = inject(&syringe, &args.dll_path);

    syringe.process().kill()?;

    result
}

#[cfg(not(windows))]
fn launch(_host_command: Command, _args: &Arguments) -> anyhow::Result<()> {
    anyhow::bail!("injecting into the host is only supported on Windows")
}

#[cfg(windows)]
fn inject(syringe: &dll_syringe::Syringe, dll_path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
    use std::net::TcpListener;

    use native_cursor_common::LOG_RELAY_ADDRESS;

    let listener = TcpListener::bind(LOG_RELAY_ADDRESS)?;

    let _injected_payload = syringe.inject(&dll_path)?;
    info!("Injected successfully");

    let (mut stream, address) = listener.accept()?;
    info!("Connected to mod at: {address}");

    let mut stdout = std::io::stdout();
    std::io::copy(&mut stream, &mut stdout)?;

    Ok(())
}
