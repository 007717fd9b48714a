// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use launchdesk_client::ObjectKey;
use launchdesk_core::{ListCommand, MediaMatch, MediaPicker, Section};

use crate::tui::dispatcher::{Action, Dispatcher, FieldPath};
use crate::tui::picker_overlay::{PickerStoreLike, reduce_picker};

#[derive(Debug)]
pub struct SectionStore {
    pub section: Section,
    pub picker: MediaPicker,

    /// The media field the open picker writes into
    pub target: Option<FieldPath>,

    /// Whether the picker is waiting for its media list
    pub fetch: bool,

    /// Whether the user submit the changes
    pub submit: bool,

    matcher: MediaMatch,
}

impl SectionStore {
    pub fn new(section: Section, matcher: MediaMatch) -> Self {
        Self {
            section,
            picker: MediaPicker::new(matcher),
            target: None,
            fetch: false,
            submit: false,
            matcher,
        }
    }

    pub fn value(&self, path: FieldPath) -> String {
        let value = match path {
            FieldPath::Section(field) => self.section.get(field),
            FieldPath::Item(index, field) => self.section.item_value(index, field),
        };
        value.unwrap_or_default().to_string()
    }

    fn write(&mut self, path: FieldPath, value: String) {
        match path {
            FieldPath::Section(field) => {
                if self.section.set(field, &value).is_none() {
                    tracing::warn!(field, "unknown section field");
                }
            }
            FieldPath::Item(index, field) => match self.section.item_ref(index) {
                Some(item) => {
                    self.section.apply(ListCommand::Update(item, field, value));
                }
                None => tracing::warn!(index, "no list item at index"),
            },
        }
    }

    /// Each media field gets a fresh picker that loads its own list.
    fn open_picker(&mut self, path: FieldPath) {
        let current = self.value(path);
        let selected = (!current.is_empty()).then(|| ObjectKey::from(current));
        self.picker = MediaPicker::new(self.matcher).with_selected(selected);
        self.picker.overlay_mut().open();
        self.target = Some(path);
        self.fetch = true;
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::SetField(path, v) => that.write(*path, v.clone()),
                Action::AddItem => {
                    that.section.apply(ListCommand::Add);
                }
                Action::RemoveItem(index) => {
                    if let Some(item) = that.section.item_ref(*index) {
                        that.section.apply(ListCommand::Remove(item));
                    }
                }
                Action::OpenPicker(path) => that.open_picker(*path),
                Action::SubmitChanges => that.submit = true,
                _ => {
                    if let Some(picked) = reduce_picker(&mut that.picker, action)
                        && let Some(target) = that.target.take()
                    {
                        that.write(target, picked.key.to_string());
                    }
                }
            }
        }));
        dispatcher.register(callback);
    }
}

impl PickerStoreLike for SectionStore {
    fn picker(&self) -> &MediaPicker {
        &self.picker
    }

    fn picker_mut(&mut self) -> &mut MediaPicker {
        &mut self.picker
    }
}

/// Store of the standalone media picker.
#[derive(Debug)]
pub struct PickerStore {
    pub picker: MediaPicker,
    pub picked: Option<ObjectKey>,

    /// Whether the picker is waiting for its media list
    pub fetch: bool,
}

impl PickerStore {
    pub fn new(matcher: MediaMatch, search: String) -> Self {
        let mut picker = MediaPicker::new(matcher);
        picker.set_search(search);
        picker.overlay_mut().open();
        Self {
            picker,
            picked: None,
            fetch: true,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            if let Some(picked) = reduce_picker(&mut that.picker, action) {
                that.picked = Some(picked.key);
            }
        }));
        dispatcher.register(callback);
    }
}

impl PickerStoreLike for PickerStore {
    fn picker(&self) -> &MediaPicker {
        &self.picker
    }

    fn picker_mut(&mut self) -> &mut MediaPicker {
        &mut self.picker
    }
}
