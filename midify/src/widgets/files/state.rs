use midify_ui_controls::{FileDescriptor, FileList};

/// File list widget state for one Browser page load.
#[derive(Debug, Default)]
pub(crate) struct FilesState {
    list: FileList,
    generation: u64,
}

impl FilesState {
    /// Start a new page load with an empty list.
    pub(crate) fn reset(&mut self) -> u64 {
        self.list = FileList::new();
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the rendered items with `files`.
    pub(crate) fn render(&mut self, files: Vec<FileDescriptor>) {
        self.list.render(files);
    }

    pub(crate) fn items(&self) -> &[String] {
        self.list.items()
    }
}
