// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use launchdesk_core::{FieldKind, FieldSpec, Section};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input, MediaField};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher, FieldPath};
use crate::tui::picker_overlay::PickerOverlay;
use crate::tui::section_store::SectionStore;

type SectionForm = Form<SectionStore, Box<dyn FormItem<SectionStore>>>;

/// Editor of one section: its fields, one group of fields per list item, and
/// the media picker on top.
pub struct SectionEditor {
    page: SinglePage<SectionStore, SectionForm>,
    paths: Vec<FieldPath>,
    picker: PickerOverlay<SectionStore>,
}

impl SectionEditor {
    pub fn new(section: &Section) -> Self {
        let (form, paths) = build_form(section);
        let mut page = SinglePage::new(format!("{} Editor", section.kind()), form);
        if section.has_items() {
            page = page.with_instructions(vec![
                ("Prev", "<Up>"),
                ("Next", "<Down>"),
                ("Add", "<C-n>"),
                ("Remove", "<C-d>"),
                ("Save", "<Enter>"),
                ("Exit", "<Esc>"),
            ]);
        }

        Self {
            page,
            paths,
            picker: PickerOverlay::new(),
        }
    }

    fn areas(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
    }

    fn focused(&self) -> Option<FieldPath> {
        self.paths.get(self.page.inner().index()).copied()
    }

    /// Rebuilds the form after the list changed and focuses `index`.
    fn rebuild(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SectionStore>, index: usize) {
        self.page.deactivate(dispatcher, store);
        let (mut form, paths) = build_form(&store.borrow().section);
        form.set_index(index);
        *self.page.inner_mut() = form;
        self.paths = paths;
        self.page.activate(dispatcher, store);
    }

    fn add_item(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SectionStore>) {
        dispatcher.dispatch(Action::AddItem);
        let index = {
            let s = store.borrow();
            let per_item = s.section.item_fields().len();
            s.section.fields().len() + s.section.item_count().saturating_sub(1) * per_item
        };
        self.rebuild(dispatcher, store, index);
    }

    fn remove_item(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SectionStore>) {
        let Some(FieldPath::Item(item, _)) = self.focused() else {
            return;
        };

        dispatcher.dispatch(Action::RemoveItem(item));
        let index = {
            let s = store.borrow();
            s.section.fields().len() + item * s.section.item_fields().len()
        };
        self.rebuild(dispatcher, store, index);
    }
}

impl Component<SectionStore> for SectionEditor {
    fn render(&self, store: &RefCell<SectionStore>, area: Rect, buf: &mut Buffer) {
        let [main, footer] = Self::areas(area);
        self.page.render(store, main, buf);

        {
            let s = store.borrow();
            if let Some(advisory) = s.section.advisory() {
                let count = s.section.item_count();
                let line = Line::from(vec![
                    format!(" {count} items ").into(),
                    advisory.dark_gray().italic(),
                ]);
                Paragraph::new(line).render(footer, buf);
            }
        }

        self.picker.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<SectionStore>, area: Rect) -> Option<(u16, u16)> {
        if PickerOverlay::<SectionStore>::is_open(store) {
            return self.picker.get_cursor_position(store, area);
        }

        let [main, _] = Self::areas(area);
        self.page.get_cursor_position(store, main)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SectionStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if let Some(msg) = self.picker.on_key(dispatcher, store, area, event) {
            return Some(msg);
        }

        let has_items = store.borrow().section.has_items();
        if has_items && event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('n') => {
                    self.add_item(dispatcher, store);
                    return Some(Message::CursorUpdated);
                }
                KeyCode::Char('d') => {
                    self.remove_item(dispatcher, store);
                    return Some(Message::CursorUpdated);
                }
                _ => {}
            }
        }

        let [main, _] = Self::areas(area);
        self.page.on_key(dispatcher, store, main, event)
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SectionStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        self.picker.on_mouse(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SectionStore>) {
        self.page.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SectionStore>) {
        self.page.deactivate(dispatcher, store);
    }
}

struct PathAccess(FieldPath);

impl Access<SectionStore> for PathAccess {
    fn get(&self, store: &RefCell<SectionStore>) -> String {
        store.borrow().value(self.0)
    }

    fn set(&self, dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::SetField(self.0, value));
        true
    }
}

fn build_form(section: &Section) -> (SectionForm, Vec<FieldPath>) {
    let mut items = Vec::new();
    let mut paths = Vec::new();

    for spec in section.fields() {
        let path = FieldPath::Section(spec.name);
        items.push(field_item(spec.label.to_string(), spec, path));
        paths.push(path);
    }

    for index in 0..section.item_count() {
        for spec in section.item_fields() {
            let path = FieldPath::Item(index, spec.name);
            let title = format!("#{} {}", index + 1, spec.label);
            items.push(field_item(title, spec, path));
            paths.push(path);
        }
    }

    (Form::new(items), paths)
}

fn field_item(title: String, spec: &FieldSpec, path: FieldPath) -> Box<dyn FormItem<SectionStore>> {
    match spec.kind {
        FieldKind::Text => Box::new(Input::new(title, PathAccess(path))),
        FieldKind::Bounded(limit) => Box::new(Input::new(title, PathAccess(path)).with_limit(limit)),
        FieldKind::Media => Box::new(MediaField::new(title, PathAccess(path), path)),
    }
}
