/// Read-only view model for the Browser page file list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FilesViewModel<'a> {
    pub(crate) items: &'a [String],
}
