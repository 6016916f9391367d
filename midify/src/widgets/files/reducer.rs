use iced::Task;

use super::event::{FilesEffect, FilesIntent};
use super::state::FilesState;

/// Reduce a file list intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut FilesState,
    intent: FilesIntent,
) -> Task<FilesEffect> {
    match intent {
        FilesIntent::PageLoaded => {
            let generation = state.reset();
            Task::done(FilesEffect::FetchRequested { generation })
        },
        FilesIntent::Loaded { generation, files } => {
            if generation != state.generation() {
                log::debug!("dropping listing from page load {generation}");
                return Task::none();
            }
            log::debug!("rendering {} files", files.len());
            state.render(files);
            Task::none()
        },
        FilesIntent::LoadFailed {
            generation,
            message,
        } => {
            if generation != state.generation() {
                log::debug!("dropping failure from page load {generation}");
                return Task::none();
            }
            log::error!("Error loading the files: {message}");
            Task::none()
        },
        FilesIntent::FilePressed { name } => {
            Task::done(FilesEffect::OpenFile { name })
        },
    }
}
