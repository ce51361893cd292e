use anyhow::Result;
use artsearch_client::{ReferenceCache, ReferenceLists};
use artsearch_core::Settings;
use artsearch_storage::FileStore;

use super::build_client;
use crate::render;

pub(crate) async fn load_lists(
    settings: &Settings,
    client: &artsearch_client::CatalogClient,
) -> ReferenceLists {
    let store = FileStore::new(&settings.cache_dir);
    ReferenceCache::new(client, store).init().await
}

pub(crate) async fn run_lists(settings: &Settings, json: bool) -> Result<()> {
    let client = build_client(settings, false)?;
    let lists = load_lists(settings, &client).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
    } else {
        print!("{}", render::reference_lists(&lists));
    }
    Ok(())
}
