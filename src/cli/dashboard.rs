use crate::cli::{open_store, ClientArgs};
use crate::error::Result;
use crate::settings::Settings;
use crate::view::ViewController;

pub async fn run(settings: &Settings, args: &ClientArgs) -> Result<()> {
    let mut store = open_store(settings, args, ViewController::new(std::io::stdout()));
    store.load().await;
    Ok(())
}
