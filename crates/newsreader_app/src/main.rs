mod app;
mod commands;
mod config;
mod effects;
mod logging;
mod render;
mod routes;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    app::run()
}
