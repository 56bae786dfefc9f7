use snafu::{OptionExt, Snafu};
use std::path::{Path, PathBuf};
use crate::gui::registry::{ComponentName, ComponentRegistry};
use crate::gui::widgets::MediaKind;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("unsupported media type: {}", path.display()))]
    UnsupportedMedia { path: PathBuf },
    #[snafu(display("no {} component is registered", name))]
    MissingSlot { name: ComponentName },
}

fn slot_names(kind: MediaKind) -> (ComponentName, ComponentName) {
    match kind {
        MediaKind::Image => (ComponentName::OutputImage, ComponentName::OutputVideo),
        MediaKind::Video => (ComponentName::OutputVideo, ComponentName::OutputImage),
    }
}

/// Shows `path` in the output slot matching its media type and hides the other
/// slot.
pub fn publish_result(registry: &ComponentRegistry, path: &Path) -> Result<MediaKind, Error> {
    let kind = MediaKind::from_path(path).context(UnsupportedMediaSnafu { path })?;
    let (target, other) = slot_names(kind);

    let slot = registry
        .get_ui_component(target)
        .context(MissingSlotSnafu { name: target })?;
    slot.borrow_mut().set_media(path);

    if let Some(other) = registry.get_ui_component(other) {
        other.borrow_mut().set_visible(false);
    }
    log::info!("Showing {} in {}", path.display(), target);
    Ok(kind)
}
