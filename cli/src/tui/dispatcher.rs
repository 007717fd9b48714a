// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching action");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

/// Where an edited value lives in a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// A top-level field of the section.
    Section(&'static str),

    /// A field of the list item at the given position.
    Item(usize, &'static str),
}

#[derive(Debug, Clone)]
pub enum Action {
    SetField(FieldPath, String),
    AddItem,
    RemoveItem(usize),
    OpenPicker(FieldPath),
    SearchMedia(String),
    PickMedia(String),
    PointerDown(u16, u16),
    ClosePicker,
    SubmitChanges,
}
