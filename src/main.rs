use mastermind::{
    app::App,
    assets::Textures,
    code::CodeMaker,
    config::Config,
    constants::graphics::{WINDOW_SIZE, WINDOW_TITLE},
    layout::Layout,
    Result,
};
use mastermind_iosys::backends::SoftbufferSystem;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn run() -> Result<()> {
    let config = Config::from_env();
    let layout = Layout::new(WINDOW_SIZE)?;
    let (mut sys, mut runner) = SoftbufferSystem::new(WINDOW_SIZE, WINDOW_TITLE)?;
    let textures = Textures::load(&config.assets)?;
    App::new(layout, textures, CodeMaker::from_clock()).run(&mut sys, &mut runner)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // every failure is fatal, but still a normal shutdown: log it and exit cleanly
    match run() {
        Ok(()) => info!("goodbye"),
        Err(e) => error!("{}", e),
    }
}
