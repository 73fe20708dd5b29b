//! Apply-Track Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod i18n;
mod storage;
mod rounds;
mod onboarding;
mod scoring;
mod geocode;
mod markdown;
mod mock_data;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(AppConfig::from_env().log_level);
    mount_to_body(App);
}
