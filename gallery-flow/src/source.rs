/// One entry of a drop event's data-transfer item list, classified by
/// whether it can yield a file.
#[derive(Clone, Debug, PartialEq)]
pub enum DropItem<F> {
    File(F),
    NonFile,
}

/// Where a batch of files came from.
#[derive(Clone, Debug, PartialEq)]
pub enum FileSource<F> {
    Picker(Vec<F>),
    DroppedFiles(Vec<F>),
    DroppedItems(Vec<DropItem<F>>),
}

impl<F> FileSource<F> {
    /// Drops carry both a native file list and an item list; the file list
    /// wins when it has anything in it.
    pub fn from_drop(files: Vec<F>, items: Vec<DropItem<F>>) -> Self {
        if files.is_empty() {
            FileSource::DroppedItems(items)
        } else {
            FileSource::DroppedFiles(files)
        }
    }

    pub fn resolve(self) -> PendingFileBatch<F> {
        let files = match self {
            FileSource::Picker(files) | FileSource::DroppedFiles(files) => files,
            FileSource::DroppedItems(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    DropItem::File(f) => Some(f),
                    DropItem::NonFile => None,
                })
                .collect(),
        };
        PendingFileBatch { files }
    }
}

/// Ordered files for a single upload action.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFileBatch<F> {
    files: Vec<F>,
}

impl<F> PendingFileBatch<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn into_files(self) -> Vec<F> {
        self.files
    }
}
