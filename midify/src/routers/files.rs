use iced::Task;
use midify_ui_controls::{FileDescriptor, FileListClient};

use crate::app::{App, AppEvent};
use crate::widgets::files::{FilesEffect, FilesEvent, FilesIntent};

/// Route a file list event to the widget reducer or to app-level tasks.
pub(crate) fn route_event(app: &mut App, event: FilesEvent) -> Task<AppEvent> {
    match event {
        FilesEvent::Intent(intent) => route_intent(app, intent),
        FilesEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a file list intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: FilesIntent,
) -> Task<AppEvent> {
    app.widgets
        .files
        .reduce(intent)
        .map(|effect| AppEvent::Files(FilesEvent::Effect(effect)))
}

fn route_effect(app: &App, effect: FilesEffect) -> Task<AppEvent> {
    match effect {
        FilesEffect::FetchRequested { generation } => {
            match app.files_client.clone() {
                Some(client) => fetch_listing(client, generation),
                None => Task::done(loaded_event(
                    generation,
                    Err(String::from("no usable server url configured")),
                )),
            }
        },
        FilesEffect::OpenFile { name } => {
            if let Some(client) = &app.files_client {
                open_file(client, &name);
            }
            Task::none()
        },
    }
}

/// Issue the single listing request for this page load.
fn fetch_listing(client: FileListClient, generation: u64) -> Task<AppEvent> {
    Task::perform(
        async move { client.fetch().await.map_err(|err| format!("{err}")) },
        move |result| loaded_event(generation, result),
    )
}

fn loaded_event(
    generation: u64,
    result: Result<Vec<FileDescriptor>, String>,
) -> AppEvent {
    let intent = match result {
        Ok(files) => FilesIntent::Loaded { generation, files },
        Err(message) => FilesIntent::LoadFailed {
            generation,
            message,
        },
    };
    AppEvent::Files(FilesEvent::Intent(intent))
}

fn open_file(client: &FileListClient, name: &str) {
    let url = match client.file_url(name) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("cannot open file '{name}': {err}");
            return;
        },
    };

    log::info!("opening {url}");
    if let Err(err) = open::that_detached(url.as_str()) {
        log::warn!("failed to open {url}: {err}");
    }
}
