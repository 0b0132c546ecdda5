use crate::types::ImageRecord;

/// What a renderer has to change after a store mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPatch {
    /// Redraw every card from the snapshot.
    Replace,
    /// Insert exactly these cards ahead of everything else, in this order.
    Prepend(Vec<ImageRecord>),
    /// Remove exactly the card with this id.
    Remove(String),
}

impl RenderPatch {
    /// Order in which to insert the new cards when the renderer puts one card
    /// at a time at the front. Reversed, so the batch keeps its order on screen.
    pub fn front_insertion_order(&self) -> impl Iterator<Item = &ImageRecord> {
        let records: &[ImageRecord] = match self {
            RenderPatch::Prepend(records) => records.as_slice(),
            _ => &[],
        };
        records.iter().rev()
    }
}

/// Ordered list of known images. Records are only removed after the server
/// confirmed the delete.
#[derive(Clone, Debug, Default)]
pub struct GalleryStore {
    records: Vec<ImageRecord>,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, records: Vec<ImageRecord>) -> RenderPatch {
        self.records = records;
        RenderPatch::Replace
    }

    /// No dedup by id; callers only pass freshly created records.
    pub fn prepend_many(&mut self, records: Vec<ImageRecord>) -> Option<RenderPatch> {
        if records.is_empty() {
            return None;
        }
        self.records.splice(0..0, records.iter().cloned());
        Some(RenderPatch::Prepend(records))
    }

    /// A miss is not an error: a racing duplicate delete lands here.
    pub fn remove_by_id(&mut self, id: &str) -> Option<RenderPatch> {
        let index = self.records.iter().position(|r| r.id == id)?;
        self.records.remove(index);
        Some(RenderPatch::Remove(id.to_string()))
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }
}
