// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, io, rc::Rc};

use launchdesk_client::ObjectKey;
use launchdesk_core::{MediaMatch, MediaSource, Section};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::picker_overlay::{PickerOverlay, PickerStoreLike};
use crate::tui::section_editor::SectionEditor;
use crate::tui::section_store::{PickerStore, SectionStore};

/// Opens the section editor; returns the edited section if the user saved.
pub async fn edit_section<M: MediaSource + ?Sized>(
    source: &M,
    section: Section,
    matcher: MediaMatch,
) -> Result<Option<Section>, Box<dyn Error>> {
    let editor = SectionEditor::new(&section);
    let store = SectionStore::new(section, matcher);
    let store = run_app(source, store, editor, false).await?;
    Ok(store.submit.then_some(store.section))
}

/// Opens the media picker on its own; returns the picked key.
pub async fn pick_media<M: MediaSource + ?Sized>(
    source: &M,
    matcher: MediaMatch,
    search: String,
) -> Result<Option<ObjectKey>, Box<dyn Error>> {
    let store = PickerStore::new(matcher, search);
    let store = run_app(source, store, PickerOverlay::new(), true).await?;
    Ok(store.picked)
}

trait AppStore: PickerStoreLike + Sized {
    fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher);

    /// Takes the pending media list request, if any.
    fn take_fetch(&mut self) -> bool;
}

impl AppStore for SectionStore {
    fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        SectionStore::register_to(that, dispatcher);
    }

    fn take_fetch(&mut self) -> bool {
        std::mem::take(&mut self.fetch)
    }
}

impl AppStore for PickerStore {
    fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        PickerStore::register_to(that, dispatcher);
    }

    fn take_fetch(&mut self) -> bool {
        std::mem::take(&mut self.fetch)
    }
}

async fn run_app<S, C, M>(
    source: &M,
    store: S,
    mut view: C,
    exit_when_closed: bool,
) -> Result<S, Box<dyn Error>>
where
    S: AppStore,
    C: Component<S>,
    M: MediaSource + ?Sized,
{
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let mut capturing = false;
    let result = async {
        let mut dispatcher = Dispatcher::new();
        S::register_to(store.clone(), &mut dispatcher);
        view.activate(&mut dispatcher, &store);

        loop {
            draw(&mut terminal, &view, &store)?;

            // The outside click listener lives exactly as long as the open overlay
            let listening = store.borrow().picker().overlay().is_listening();
            if listening != capturing {
                set_mouse_capture(listening)?;
                capturing = listening;
            }

            let fetch = store.borrow_mut().take_fetch();
            if fetch {
                let result = source.list_media().await;
                store.borrow_mut().picker_mut().apply_load(result);
                continue;
            }

            let msg = match event::read()? {
                Event::Key(e) if e.kind == KeyEventKind::Press => {
                    view.on_key(&mut dispatcher, &store, terminal.get_frame().area(), e)
                }
                Event::Mouse(e) => {
                    view.on_mouse(&mut dispatcher, &store, terminal.get_frame().area(), e)
                }
                _ => None,
            };

            if msg == Some(Message::Exit) {
                break;
            }
            if exit_when_closed && !store.borrow().picker().overlay().is_open() {
                break;
            }
        }
        Ok::<(), Box<dyn Error>>(())
    }
    .await; // release dispatcher here to avoid borrow conflicts

    teardown(capturing, ratatui::restore, || set_mouse_capture(false));
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

fn draw<S, C: Component<S>>(
    terminal: &mut DefaultTerminal,
    view: &C,
    store: &RefCell<S>,
) -> io::Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        view.render(store, area, frame.buffer_mut());
        if let Some(position) = view.get_cursor_position(store, area) {
            frame.set_cursor_position(position);
        }
    })?;
    Ok(())
}

/// Leaves raw mode first; a failure to release the mouse is only logged.
fn teardown(
    capturing: bool,
    restore: impl FnOnce(),
    release_mouse: impl FnOnce() -> io::Result<()>,
) {
    restore();
    if capturing && let Err(e) = release_mouse() {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
}

fn set_mouse_capture(enabled: bool) -> io::Result<()> {
    tracing::debug!(enabled, "toggling mouse capture");
    match enabled {
        true => execute!(io::stdout(), EnableMouseCapture),
        false => execute!(io::stdout(), DisableMouseCapture),
    }
}
