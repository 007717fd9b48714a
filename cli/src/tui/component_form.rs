// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::ops::Range;

use launchdesk_core::BoundedText;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher, FieldPath};
use crate::util::{byte_range_of_char_at, truncate_to_width, unicode_width_of_slice};

/// Rows taken by one form item: title, value, rail.
const ITEM_HEIGHT: u16 = 3;

pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Index of the focused item.
    pub fn index(&self) -> usize {
        self.item_index
    }

    /// Moves the focus without activating; call before `activate`.
    pub fn set_index(&mut self, index: usize) {
        self.item_index = index.min(self.items.len().saturating_sub(1));
    }

    /// Items that fit into the area, scrolled so the focused one is shown.
    fn window(&self, area: Rect) -> Range<usize> {
        let per_page = usize::from(area.height.saturating_sub(2) / ITEM_HEIGHT).max(1);
        let start = (self.item_index + 1).saturating_sub(per_page);
        start..(start + per_page).min(self.items.len())
    }

    fn areas(&self, area: Rect) -> Vec<(usize, Rect)> {
        let window = self.window(area);
        let rects = Layout::vertical(window.clone().map(|_| Constraint::Length(ITEM_HEIGHT)))
            .margin(1)
            .split(area);
        window.zip(rects.iter().copied()).collect()
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }

        let len = self.items.len();
        self.item_index = match offset {
            o if o > 0 => (self.item_index + 1) % len,
            _ => (self.item_index + len - 1) % len,
        };

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let mut is_last = true;
        for (i, area) in self.areas(area).into_iter().rev() {
            // draw bottom-up so the rail of an item overlaps the next title cleanly
            if let Some(item) = self.items.get(i) {
                item_render(is_last, item, store, area, buf);
                item.render(store, item_inner(area), buf);
                is_last = false;
            }
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.areas(area)
            .into_iter()
            .find(|(i, _)| *i == self.item_index)
            .and_then(|(i, area)| self.items.get(i)?.get_cursor_position(store, area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let subarea = self
            .areas(area)
            .into_iter()
            .find(|(i, _)| *i == self.item_index)
            .map_or(area, |(_, a)| a);
        if let Some(item) = self.items.get_mut(self.item_index)
            && let Some(msg) = item.on_key(dispatcher, store, subarea, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab if self.item_index > 0 => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab if self.item_index + 1 < self.items.len() => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::SubmitChanges);
                Some(Message::Exit)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self, store: &RefCell<S>) -> &str;
    fn item_state(&self, store: &RefCell<S>) -> FormItemState;
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self, store: &RefCell<S>) -> &str {
        (**self).item_title(store)
    }

    fn item_state(&self, store: &RefCell<S>) -> FormItemState {
        (**self).item_state(store)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    /// The item is focused.
    Active,

    /// The item is not focused.
    Inactive,
}

/// Reads and writes one string value of a store.
pub trait Access<S> {
    fn get(&self, store: &RefCell<S>) -> String;
    fn set(&self, dispatcher: &mut Dispatcher, value: String) -> bool;
}

/// A single-line text input, optionally capped at a number of characters.
///
/// A capped input forwards at most `limit` characters and shows a counter; when
/// typing runs past the cap the counter turns red and the limit message shows.
#[derive(Debug)]
pub struct Input<S, A: Access<S>> {
    title: String,
    access: A,
    bounded: Option<BoundedText>,
    active: bool,
    character_index: usize,
    _phantom_s: std::marker::PhantomData<S>,
}

impl<S, A: Access<S>> Input<S, A> {
    pub fn new(title: impl ToString, access: A) -> Self {
        Self {
            title: title.to_string(),
            access,
            bounded: None,
            active: false,
            character_index: 0,
            _phantom_s: std::marker::PhantomData,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.bounded = Some(BoundedText::new(limit));
        self
    }

    /// Sends an edited value through the cap, if any, and returns what was forwarded.
    fn forward(&mut self, dispatcher: &mut Dispatcher, value: String) -> Option<String> {
        let value = match self.bounded.as_mut() {
            Some(field) => field.input(&value),
            None => value,
        };
        self.access
            .set(dispatcher, value.clone())
            .then_some(value)
    }

    fn counter(&self, value: &str) -> Option<(String, bool)> {
        let field = self.bounded.as_ref()?;
        let shown = BoundedText::with_value(field.limit(), value);
        match field.error().filter(|_| self.active) {
            Some(error) => Some((format!("{error} {}", shown.counter()), true)),
            None => Some((shown.counter(), false)),
        }
    }
}

impl<S, A: Access<S>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = self.access.get(store);
        let Some((counter, exceeded)) = self.counter(&v) else {
            Paragraph::new(v.as_str()).render(area, buf);
            return;
        };

        let counter_width = u16::try_from(counter.width()).unwrap_or(u16::MAX);
        let [value_area, counter_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(counter_width + 1)])
                .areas(area);
        let shown = truncate_to_width(&v, usize::from(value_area.width));
        Paragraph::new(shown).render(value_area, buf);

        let style = if exceeded {
            Style::new().red()
        } else {
            Style::new().dark_gray()
        };
        Paragraph::new(counter)
            .style(style)
            .alignment(Alignment::Right)
            .render(counter_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = self.access.get(store);
        let width = unicode_width_of_slice(v.as_str(), self.character_index);
        let x = area.x + u16::try_from(width).unwrap_or(u16::MAX) + 2; // rail 1 + padding 1
        let y = area.y + 1; // title line: 1
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active || !matches!(event.code, Left | Right | Backspace | Char(_)) {
            return None;
        }

        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < self.access.get(store).chars().count() => {
                self.character_index += 1;
            }
            Backspace if self.character_index > 0 => {
                let mut v = self.access.get(store);
                if let Some(range) = byte_range_of_char_at(&v, self.character_index - 1) {
                    v.replace_range(range, "");
                    if self.forward(dispatcher, v).is_some() {
                        self.character_index -= 1;
                    }
                }
            }
            Char(c) => {
                let mut v = self.access.get(store);
                let byte_index = v
                    .char_indices()
                    .nth(self.character_index)
                    .map_or(v.len(), |(i, _)| i);
                v.insert(byte_index, c);
                if let Some(forwarded) = self.forward(dispatcher, v) {
                    let len = forwarded.chars().count();
                    self.character_index = (self.character_index + 1).min(len);
                }
            }
            _ => {}
        }

        // Always update the cursor position for simplicity
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        let v = self.access.get(store);
        self.character_index = v.chars().count();
        if let Some(field) = self.bounded.as_mut() {
            *field = BoundedText::with_value(field.limit(), &v);
        }
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.character_index = 0;
    }
}

impl<S, A: Access<S>> FormItem<S> for Input<S, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        if self.active {
            FormItemState::Active
        } else {
            FormItemState::Inactive
        }
    }
}

/// A media key field. Enter opens the media picker, Delete clears the value.
#[derive(Debug)]
pub struct MediaField<S, A: Access<S>> {
    title: String,
    access: A,
    path: FieldPath,
    active: bool,
    _phantom_s: std::marker::PhantomData<S>,
}

impl<S, A: Access<S>> MediaField<S, A> {
    pub fn new(title: impl ToString, access: A, path: FieldPath) -> Self {
        Self {
            title: title.to_string(),
            access,
            path,
            active: false,
            _phantom_s: std::marker::PhantomData,
        }
    }
}

impl<S, A: Access<S>> Component<S> for MediaField<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = self.access.get(store);
        let mut spans = vec![if v.is_empty() {
            "no media selected".dark_gray().italic()
        } else {
            Span::raw(v)
        }];
        if self.active {
            spans.extend(["  ".into(), "<Enter>".blue().bold(), " choose".into()]);
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        match event.code {
            KeyCode::Enter => {
                dispatcher.dispatch(Action::OpenPicker(self.path));
                Some(Message::Handled)
            }
            KeyCode::Delete | KeyCode::Backspace => {
                self.access.set(dispatcher, String::new());
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = true;
    }

    fn deactivate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S, A: Access<S>> FormItem<S> for MediaField<S, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        if self.active {
            FormItemState::Active
        } else {
            FormItemState::Inactive
        }
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";

const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(
    is_last: bool,
    item: &impl FormItem<S>,
    store: &RefCell<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    let state = item.item_state(store);
    let color = match state {
        FormItemState::Active => Color::Blue,
        FormItemState::Inactive => Color::Gray,
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title(store))
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        let symbol = match state {
            FormItemState::Active => S_STEP_ACTIVE,
            FormItemState::Inactive => S_STEP_INACTIVE,
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height.saturating_sub(1) {
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(S_SIDER_CONNECTOR);
            c.set_fg(color);
        }
    }

    if let Some(c) = buf.cell_mut((area.x, area.y + area.height.saturating_sub(1))) {
        let symbol = if is_last {
            S_SIDER_BOTTOM
        } else {
            S_SIDER_CONNECTOR
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    #[derive(Debug, Default)]
    struct Store {
        value: String,
        submitted: bool,
    }

    struct ValueAccess;

    impl Access<Store> for ValueAccess {
        fn get(&self, store: &RefCell<Store>) -> String {
            store.borrow().value.clone()
        }

        fn set(&self, dispatcher: &mut Dispatcher, value: String) -> bool {
            dispatcher.dispatch(Action::SetField(FieldPath::Section("value"), value));
            true
        }
    }

    fn setup() -> (Rc<RefCell<Store>>, Dispatcher) {
        let store = Rc::new(RefCell::new(Store::default()));
        let mut dispatcher = Dispatcher::new();
        let that = store.clone();
        dispatcher.register(Rc::new(RefCell::new(move |action: &Action| {
            let mut s = that.borrow_mut();
            match action {
                Action::SetField(_, v) => s.value.clone_from(v),
                Action::SubmitChanges => s.submitted = true,
                _ => {}
            }
        })));
        (store, dispatcher)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str<S, A: Access<S>>(
        input: &mut Input<S, A>,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        s: &str,
    ) {
        for c in s.chars() {
            input.on_key(dispatcher, store, Rect::default(), key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_bounded_input_forwards_prefix() {
        let (store, mut dispatcher) = setup();
        let mut input = Input::new("Text", ValueAccess).with_limit(3);
        input.activate(&mut dispatcher, &store);

        type_str(&mut input, &mut dispatcher, &store, "abcd");

        assert_eq!(store.borrow().value, "abc");
        let (counter, exceeded) = input.counter("abc").unwrap();
        assert!(exceeded);
        assert!(counter.ends_with("3/3"));
    }

    #[test]
    fn test_bounded_input_clears_error_after_backspace() {
        let (store, mut dispatcher) = setup();
        let mut input = Input::new("Text", ValueAccess).with_limit(3);
        input.activate(&mut dispatcher, &store);

        type_str(&mut input, &mut dispatcher, &store, "abcd");
        input.on_key(&mut dispatcher, &store, Rect::default(), key(KeyCode::Backspace));

        assert_eq!(store.borrow().value, "ab");
        assert_eq!(input.counter("ab"), Some(("2/3".to_string(), false)));
    }

    #[test]
    fn test_backspace_removes_last_char_after_combining_mark() {
        let (store, mut dispatcher) = setup();
        let mut input = Input::new("Text", ValueAccess);
        input.activate(&mut dispatcher, &store);

        type_str(&mut input, &mut dispatcher, &store, "e\u{301}b");
        input.on_key(&mut dispatcher, &store, Rect::default(), key(KeyCode::Backspace));
        assert_eq!(store.borrow().value, "e\u{301}");

        input.on_key(&mut dispatcher, &store, Rect::default(), key(KeyCode::Backspace));
        assert_eq!(store.borrow().value, "e");
    }

    #[test]
    fn test_inactive_input_ignores_keys() {
        let (store, mut dispatcher) = setup();
        let mut input = Input::new("Text", ValueAccess);

        let msg = input.on_key(&mut dispatcher, &store, Rect::default(), key(KeyCode::Char('x')));

        assert_eq!(msg, None);
        assert_eq!(store.borrow().value, "");
    }

    #[test]
    fn test_form_enter_submits() {
        let (store, mut dispatcher) = setup();
        let mut form = Form::new(vec![Input::new("Text", ValueAccess)]);
        form.activate(&mut dispatcher, &store);

        let msg = form.on_key(&mut dispatcher, &store, Rect::new(0, 0, 40, 10), key(KeyCode::Enter));

        assert_eq!(msg, Some(Message::Exit));
        assert!(store.borrow().submitted);
    }

    #[test]
    fn test_form_window_follows_focus() {
        let items = (0..10).map(|i| Input::new(i, ValueAccess)).collect();
        let mut form: Form<Store, Input<Store, ValueAccess>> = Form::new(items);
        let area = Rect::new(0, 0, 40, 11); // room for three items
        assert_eq!(form.window(area), 0..3);

        form.set_index(7);
        assert_eq!(form.window(area), 5..8);

        form.set_index(42);
        assert_eq!(form.index(), 9);
    }
}
