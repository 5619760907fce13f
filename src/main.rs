mod config;
mod cycler;
mod display;
mod http;
mod log;
mod state;

use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
    sync::watch,
};

use config::{Config, DriverKind};
use cycler::{thread::run_thread, Cycler};
use display::{console::ConsoleDriver, DisplayDriver, TextRenderer};
use http::AppContext;
use state::MessageStore;

async fn wait_for_signal() {
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(e) => {
            println!("{} Could not listen for SIGTERM: {}", log::WARN, e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --------- CONFIG ---------
    let config = Config::from_env().map_err(|e| {
        println!("{} {}", log::ERROR, e);
        e
    })?;
    println!(
        "{} oled-status v. {} ({:?} {}x{})",
        log::THREAD,
        config.version,
        config.driver,
        config.width,
        config.height
    );

    // --------- DISPLAY SETUP ---------
    let driver: Box<dyn DisplayDriver + Send> = match config.driver {
        DriverKind::Ssd1306 => display::panel::open(
            &config.i2c_bus,
            config.i2c_address,
            config.width,
            config.height,
        )?,
        DriverKind::Console => Box::new(ConsoleDriver::new()),
    };

    let store = MessageStore::new();
    let mut cycler = Cycler::new(
        store.clone(),
        TextRenderer::new(config.size()),
        driver,
        config.version,
    );

    if let Err(e) = cycler.boot() {
        println!("{} Boot banner failed: {}", log::ERROR, e);
    }

    // --------- CYCLE THREAD ---------
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let cycle_handle = tokio::spawn(run_thread(
        cycler,
        config.period,
        shutdown_rx.clone(),
    ));

    tokio::spawn(async move {
        wait_for_signal().await;
        println!("{} Shutting down", log::THREAD);
        let _ = shutdown_tx.send(true);
    });

    // --------- HTTP SETUP ---------
    let listener = TcpListener::bind(config.bind).await?;
    http::serve(listener, AppContext::new(store), shutdown_rx).await?;

    cycle_handle.await?;

    Ok(())
}
