use midify_ui_controls::FileDescriptor;

/// Intent events handled by the file list widget.
#[derive(Debug, Clone)]
pub(crate) enum FilesIntent {
    /// The Browser page was loaded; clear the list and fetch it once.
    PageLoaded,
    /// Listing fetched successfully for page load `generation`.
    Loaded {
        generation: u64,
        files: Vec<FileDescriptor>,
    },
    /// Listing request or decoding failed for page load `generation`.
    LoadFailed { generation: u64, message: String },
    /// A rendered file item was clicked.
    FilePressed { name: String },
}

/// Effect events produced by the file list reducer.
#[derive(Debug, Clone)]
pub(crate) enum FilesEffect {
    /// Request the listing from the server for page load `generation`.
    FetchRequested { generation: u64 },
    /// Open the file content in the system handler.
    OpenFile { name: String },
}

/// File list event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum FilesEvent {
    Intent(FilesIntent),
    Effect(FilesEffect),
}
