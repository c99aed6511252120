mod error;
mod exits;
mod logging;
mod pass;
mod session;
mod settings;
mod store;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::init();

    log::info!("passform {} starting", env!("CARGO_PKG_VERSION"));
    tui::run();
    log::info!("passform exiting");
}
