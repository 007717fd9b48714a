// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use launchdesk_core::{Bounds, MediaItem, MediaKind, MediaPicker, MediaSelected};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::truncate_to_width;

pub trait PickerStoreLike {
    fn picker(&self) -> &MediaPicker;
    fn picker_mut(&mut self) -> &mut MediaPicker;
}

/// Applies a picker action and returns the selection event if media was picked.
pub fn reduce_picker(picker: &mut MediaPicker, action: &Action) -> Option<MediaSelected> {
    match action {
        Action::SearchMedia(term) => picker.set_search(term.clone()),
        Action::PickMedia(key) => return picker.select(key),
        Action::PointerDown(x, y) => {
            picker.overlay_mut().pointer_down(*x, *y);
        }
        Action::ClosePicker => {
            tracing::info!("media picker closed");
            picker.overlay_mut().close();
        }
        _ => {}
    }
    None
}

/// The media picker popup, drawn over whatever is below it while open.
pub struct PickerOverlay<S: PickerStoreLike> {
    highlight: usize,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: PickerStoreLike> PickerOverlay<S> {
    pub fn new() -> Self {
        Self {
            highlight: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn is_open(store: &RefCell<S>) -> bool {
        store.borrow().picker().overlay().is_open()
    }

    fn popup_area(area: Rect) -> Rect {
        let width = (area.width * 7 / 10).max(area.width.min(40));
        let height = (area.height * 7 / 10).max(area.height.min(10));
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" Media ".bold()).centered())
            .title_bottom(
                Line::from(vec![
                    " Pick ".into(),
                    "<Enter>".blue().bold(),
                    " Close ".into(),
                    "<Esc> ".blue().bold(),
                ])
                .centered(),
            )
    }

    /// Search line, list and notice line of the popup.
    fn areas(area: Rect) -> [Rect; 3] {
        let inner = Self::block().inner(Self::popup_area(area));
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner)
    }

    fn first_row(&self, rows: u16) -> usize {
        (self.highlight + 1).saturating_sub(usize::from(rows).max(1))
    }

    fn visible_keys(store: &RefCell<S>) -> Vec<String> {
        store
            .borrow()
            .picker()
            .visible()
            .iter()
            .map(|item| item.key.to_string())
            .collect()
    }

    fn search_with(store: &RefCell<S>, edit: impl FnOnce(&mut String)) -> String {
        let mut term = store.borrow().picker().search().to_string();
        edit(&mut term);
        term
    }
}

impl<S: PickerStoreLike> Component<S> for PickerOverlay<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        {
            let mut s = store.borrow_mut();
            let overlay = s.picker_mut().overlay_mut();
            if !overlay.is_open() {
                return;
            }
            overlay.set_bounds(Bounds {
                x: popup.x,
                y: popup.y,
                width: popup.width,
                height: popup.height,
            });
        }

        let s = store.borrow();
        let picker = s.picker();
        Clear.render(popup, buf);
        Self::block().render(popup, buf);

        let [search_area, list_area, notice_area] = Self::areas(area);
        Paragraph::new(Line::from(vec![
            "Search: ".dark_gray(),
            picker.search().to_string().into(),
        ]))
        .render(search_area, buf);

        let visible = picker.visible();
        if visible.is_empty() {
            Paragraph::new("no media".dark_gray().italic()).render(list_area, buf);
        }

        let first = self.first_row(list_area.height);
        for ((i, item), row) in visible.iter().enumerate().skip(first).zip(list_area.rows()) {
            let selected = picker.selected() == Some(&item.key);
            let line = row_line(item, selected, usize::from(row.width));
            let line = if i == self.highlight {
                line.reversed()
            } else {
                line
            };
            line.render(row, buf);
        }

        if let Some(notice) = picker.notice() {
            Paragraph::new(notice.message().red()).render(notice_area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !Self::is_open(store) {
            return None;
        }

        let [search_area, _, _] = Self::areas(area);
        let width = store.borrow().picker().search().width() + "Search: ".len();
        let x = search_area.x + u16::try_from(width).unwrap_or(u16::MAX);
        Some((x.min(search_area.right().saturating_sub(1)), search_area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !Self::is_open(store) {
            return None;
        }

        match event.code {
            KeyCode::Esc => {
                dispatcher.dispatch(Action::ClosePicker);
                self.highlight = 0;
            }
            KeyCode::Up => self.highlight = self.highlight.saturating_sub(1),
            KeyCode::Down => {
                let len = Self::visible_keys(store).len();
                self.highlight = (self.highlight + 1).min(len.saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(key) = Self::visible_keys(store).into_iter().nth(self.highlight) {
                    dispatcher.dispatch(Action::PickMedia(key));
                    self.highlight = 0;
                }
            }
            KeyCode::Backspace => {
                let term = Self::search_with(store, |t| {
                    t.pop();
                });
                dispatcher.dispatch(Action::SearchMedia(term));
                self.highlight = 0;
            }
            KeyCode::Char(c) => {
                let term = Self::search_with(store, |t| t.push(c));
                dispatcher.dispatch(Action::SearchMedia(term));
                self.highlight = 0;
            }
            _ => {}
        }

        // The picker is modal while open
        Some(Message::Handled)
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        if !Self::is_open(store) {
            return None;
        }

        let [_, list_area, _] = Self::areas(area);
        let position = Position::new(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(_) if list_area.contains(position) => {
                let index = self.first_row(list_area.height) + usize::from(event.row - list_area.y);
                if let Some(key) = Self::visible_keys(store).into_iter().nth(index) {
                    dispatcher.dispatch(Action::PickMedia(key));
                    self.highlight = 0;
                }
            }
            MouseEventKind::Down(_) => {
                dispatcher.dispatch(Action::PointerDown(event.column, event.row));
                if !Self::is_open(store) {
                    self.highlight = 0;
                }
            }
            MouseEventKind::ScrollUp => self.highlight = self.highlight.saturating_sub(1),
            MouseEventKind::ScrollDown => {
                let len = Self::visible_keys(store).len();
                self.highlight = (self.highlight + 1).min(len.saturating_sub(1));
            }
            _ => return None,
        }
        Some(Message::Handled)
    }
}

fn row_line(item: &MediaItem, selected: bool, width: usize) -> Line<'static> {
    let kind = match item.kind() {
        MediaKind::Image => "IMG".green(),
        MediaKind::Video { .. } => "VID".cyan(),
        MediaKind::Unsupported { .. } => "???".dark_gray(),
    };
    let marker = if selected { "● " } else { "  " };
    let launch = item
        .launch_name
        .as_deref()
        .map(|name| format!("  {name}"))
        .unwrap_or_default();
    let key = truncate_to_width(item.key.as_str(), width.saturating_sub(6 + launch.width()));
    Line::from(vec![
        marker.into(),
        kind,
        " ".into(),
        key.into(),
        launch.dark_gray(),
    ])
}
