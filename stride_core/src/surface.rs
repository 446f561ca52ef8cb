//! Surface classification and contact reporting.
//!
//! The host reports collision-begin events by tag string through a
//! [`ContactPort`]; the controller reads them through a [`ContactBinding`].
//! Tags are resolved against a [`SurfaceMap`] at delivery time, so the
//! controller only ever sees [`Surface`] values. An unrecognized tag
//! classifies as [`Surface::Unknown`] rather than being discarded: the
//! character really is standing on that body, it just has no footstep bank.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Material category of a touched body, keyed by its collision tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Wood,
    Metal,
    /// Tag not present in the surface map. Tracked for grounding purposes but
    /// silent at footstep playback.
    Unknown,
}

/// Tag-to-surface lookup, built from configuration.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMap {
    tags: HashMap<String, Surface>,
}

impl SurfaceMap {
    pub fn new(tags: HashMap<String, Surface>) -> Self {
        Self { tags }
    }

    /// Classifies a collision tag. Misses resolve to [`Surface::Unknown`].
    pub fn resolve(&self, tag: &str) -> Surface {
        self.tags.get(tag).copied().unwrap_or(Surface::Unknown)
    }
}

/// One contact-begin report, as read by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactReport {
    /// Surface of the most recent contact since the last read.
    pub surface: Surface,
}

#[derive(Debug, Default)]
struct Shared {
    bound: Option<u64>,
    next_id: u64,
    pending: Option<Surface>,
}

/// Host-side endpoint: the delivery point for collision-begin tags.
pub struct ContactPort {
    shared: Arc<Mutex<Shared>>,
    map: SurfaceMap,
}

/// Controller-side endpoint. Detaches its port when dropped.
pub struct ContactBinding {
    shared: Arc<Mutex<Shared>>,
    id: u64,
}

impl ContactPort {
    pub fn new(map: SurfaceMap) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            map,
        }
    }

    /// Attaches a fresh binding with no pending contact.
    ///
    /// A port feeds at most one binding; binding again supersedes the
    /// previous guard, whose later drop is then inert.
    pub fn bind(&self) -> ContactBinding {
        let mut s = self.shared.lock().unwrap();
        let id = s.next_id;
        s.next_id += 1;
        s.bound = Some(id);
        s.pending = None;
        ContactBinding {
            shared: Arc::clone(&self.shared),
            id,
        }
    }

    /// Reports a contact-begin with the given collision tag.
    ///
    /// Returns false when no binding is live; the contact is dropped. When
    /// several contacts land between reads, the latest wins.
    pub fn deliver(&self, tag: &str) -> bool {
        let surface = self.map.resolve(tag);
        let mut s = self.shared.lock().unwrap();
        if s.bound.is_none() {
            debug!(tag, "contact dropped, no live binding");
            return false;
        }
        trace!(tag, ?surface, "contact-begin");
        s.pending = Some(surface);
        true
    }
}

impl ContactBinding {
    /// Takes the pending contact report, if any, clearing it.
    pub fn take(&self) -> Option<ContactReport> {
        let mut s = self.shared.lock().unwrap();
        s.pending.take().map(|surface| ContactReport { surface })
    }
}

impl Drop for ContactBinding {
    fn drop(&mut self) {
        if let Ok(mut s) = self.shared.lock() {
            if s.bound == Some(self.id) {
                s.bound = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_map() -> SurfaceMap {
        let mut tags = HashMap::new();
        tags.insert("WoodSound".to_string(), Surface::Wood);
        tags.insert("MetalSound".to_string(), Surface::Metal);
        SurfaceMap::new(tags)
    }

    #[test]
    fn resolve_known_and_unknown_tags() {
        let map = test_map();
        assert_eq!(map.resolve("WoodSound"), Surface::Wood);
        assert_eq!(map.resolve("MetalSound"), Surface::Metal);
        assert_eq!(map.resolve("GlassSound"), Surface::Unknown);
    }

    #[test]
    fn take_consumes_latest_contact() {
        let port = ContactPort::new(test_map());
        let binding = port.bind();

        assert!(port.deliver("WoodSound"));
        assert!(port.deliver("MetalSound"));

        let report = binding.take().unwrap();
        assert_eq!(report.surface, Surface::Metal);
        assert!(binding.take().is_none());
    }

    #[test]
    fn unrecognized_tag_classifies_as_unknown() {
        let port = ContactPort::new(test_map());
        let binding = port.bind();

        port.deliver("GlassSound");
        assert_eq!(binding.take().unwrap().surface, Surface::Unknown);
    }

    #[test]
    fn dropped_binding_detaches_port() {
        let port = ContactPort::new(test_map());
        let binding = port.bind();
        drop(binding);

        assert!(!port.deliver("WoodSound"));
    }
}
