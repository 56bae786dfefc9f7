use std::collections::HashMap;
use std::fmt;
use crate::gui::widgets::SharedSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentName {
    OutputImage,
    OutputVideo,
}

impl ComponentName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutputImage => "output_image",
            Self::OutputVideo => "output_video",
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widgets published by one panel for other panels to fill in.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<ComponentName, SharedSlot>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_ui_component(&mut self, name: ComponentName, component: SharedSlot) {
        if self.components.insert(name, component).is_some() {
            log::warn!("UI component {} registered twice, keeping the latest", name);
        } else {
            log::debug!("Registered UI component {}", name);
        }
    }

    pub fn get_ui_component(&self, name: ComponentName) -> Option<SharedSlot> {
        self.components.get(&name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::widgets::MediaSlot;
    use std::rc::Rc;

    #[test]
    fn test_registered_component_is_shared() {
        let mut registry = ComponentRegistry::new();
        let slot = MediaSlot::new("Output", true).into_shared();
        registry.register_ui_component(ComponentName::OutputVideo, Rc::clone(&slot));

        let looked_up = registry.get_ui_component(ComponentName::OutputVideo).unwrap();
        looked_up.borrow_mut().set_media("/out/result.mp4");
        assert!(slot.borrow().media().is_some());
        assert!(registry.get_ui_component(ComponentName::OutputImage).is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(ComponentName::OutputImage.to_string(), "output_image");
        assert_eq!(ComponentName::OutputVideo.as_str(), "output_video");
    }
}
