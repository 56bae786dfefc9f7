mod media_slot;
mod path_textbox;
mod searchable_dropdown;
mod status_display;

pub use media_slot::{MediaKind, MediaSlot, SharedSlot, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
pub use path_textbox::PathTextbox;
pub use searchable_dropdown::SearchableDropdown;
pub use status_display::StatusDisplay;
