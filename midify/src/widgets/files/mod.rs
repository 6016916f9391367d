pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{FilesEffect, FilesEvent, FilesIntent};
use iced::Task;
use state::FilesState;

/// File list widget: the Browser page listing fetched from the server.
pub(crate) struct FilesWidget {
    state: FilesState,
}

impl FilesWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: FilesState::default(),
        }
    }

    /// Reduce an intent into state updates and effects.
    pub(crate) fn reduce(&mut self, intent: FilesIntent) -> Task<FilesEffect> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Page load the next listing response must belong to.
    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub(crate) fn vm(&self) -> model::FilesViewModel<'_> {
        model::FilesViewModel {
            items: self.state.items(),
        }
    }
}
