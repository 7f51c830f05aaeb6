use super::layer::{Layer, LayerId};

struct Entry {
    id: LayerId,
    layer: Box<dyn Layer>,
}

/// Ordered set of layers: regular layers first, overlays after.
///
/// `regular` is the number of regular layers, i.e. the index where the next
/// regular layer goes. Everything at or after it is an overlay.
///
/// The stack never calls layer hooks; the owner attaches and detaches.
/// Dropping the stack drops every resident layer.
#[derive(Default)]
pub struct LayerStack {
    entries: Vec<Entry>,
    regular: usize,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a regular layer above all other regular layers and below every
    /// overlay.
    pub fn push_layer(&mut self, layer: Box<dyn Layer>) -> LayerId {
        let id = LayerId::next();
        self.insert_layer(id, layer);
        id
    }

    /// Appends an overlay above everything else.
    pub fn push_overlay(&mut self, overlay: Box<dyn Layer>) -> LayerId {
        let id = LayerId::next();
        self.insert_overlay(id, overlay);
        id
    }

    pub(crate) fn insert_layer(&mut self, id: LayerId, layer: Box<dyn Layer>) {
        self.entries.insert(self.regular, Entry { id, layer });
        self.regular += 1;
    }

    pub(crate) fn insert_overlay(&mut self, id: LayerId, overlay: Box<dyn Layer>) {
        self.entries.push(Entry { id, layer: overlay });
    }

    /// Removes a regular layer and hands it back.
    ///
    /// Only the regular partition is searched; an unknown id (or the id of an
    /// overlay) leaves the stack unchanged and returns `None`.
    pub fn pop_layer(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        let index = self.entries[..self.regular]
            .iter()
            .position(|e| e.id == id)?;

        self.regular -= 1;
        Some(self.entries.remove(index).layer)
    }

    /// Removes an overlay and hands it back. Unknown ids are ignored.
    pub fn pop_overlay(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        let index = self.entries[self.regular..]
            .iter()
            .position(|e| e.id == id)?;

        Some(self.entries.remove(self.regular + index).layer)
    }

    /// Removes every layer, topmost first.
    pub fn drain_top_down(&mut self) -> impl Iterator<Item = (LayerId, Box<dyn Layer>)> + '_ {
        self.regular = 0;
        self.entries.drain(..).rev().map(|e| (e.id, e.layer))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of regular (non-overlay) layers.
    pub fn layer_count(&self) -> usize {
        self.regular
    }

    pub fn overlay_count(&self) -> usize {
        self.entries.len() - self.regular
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn is_overlay(&self, id: LayerId) -> Option<bool> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .map(|index| index >= self.regular)
    }

    pub fn get(&self, id: LayerId) -> Option<&(dyn Layer + 'static)> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.layer.as_ref())
    }

    /// Ids in update order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = LayerId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Layer names in update order.
    pub fn names(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.layer.name())
    }

    /// Layers in update order: regular layers bottom-up, then overlays.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(dyn Layer + 'static)> + '_ {
        self.entries.iter().map(|e| e.layer.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut (dyn Layer + 'static)> + '_ {
        self.entries.iter_mut().map(|e| e.layer.as_mut())
    }

    /// Layers in propagation order: overlays top-down, then regular layers
    /// from most to least recently pushed.
    pub fn iter_rev_mut(&mut self) -> impl Iterator<Item = &mut (dyn Layer + 'static)> + '_ {
        self.iter_mut().rev()
    }
}
