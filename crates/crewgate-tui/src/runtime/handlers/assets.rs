use std::path::PathBuf;

use crewgate_core::assets::SourceImage;

use crate::backdrop::AssetSlot;
use crate::events::UiEvent;

/// Decodes an image on the blocking pool.
pub async fn asset_load(slot: AssetSlot, path: PathBuf) -> UiEvent {
    let result = match tokio::task::spawn_blocking(move || SourceImage::open(&path)).await {
        Ok(Ok(image)) => Ok(image),
        Ok(Err(err)) => Err(format!("{err:#}")),
        Err(err) => Err(format!("Image decode task failed: {err}")),
    };
    UiEvent::AssetLoaded { slot, result }
}
