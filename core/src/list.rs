// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Ordered, user-editable lists of section items.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::{FieldKind, FieldSet, FieldSpec, set_field};
use crate::text::ACCORDION_SUBTITLE;

/// Advisory label on the reels slider editor. It is not enforced.
pub const REELS_MINIMUM_ADVISORY: &str = "at least 4 cards required";

/// Reference to an item of an [`OrderedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    /// Position in the list.
    Index(usize),

    /// Stable identifier assigned on creation.
    Id(u32),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Index(i) => write!(f, "#{i}"),
            ItemRef::Id(id) => write!(f, "id {id}"),
        }
    }
}

/// An edit to an [`OrderedList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    /// Append a blank item.
    Add,

    /// Remove an item.
    Remove(ItemRef),

    /// Set one field of an item.
    Update(ItemRef, &'static str, String),
}

/// What a [`ListCommand`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A blank item was appended, reachable through the reference.
    Added(ItemRef),

    /// The item was removed.
    Removed,

    /// The field was set; `clamped` tells if the value was cut to its limit.
    Updated {
        /// Whether the value was cut to the field limit.
        clamped: bool,
    },

    /// The item or the field does not exist.
    Missing,
}

/// An item that can live in an [`OrderedList`].
pub trait ListItem: FieldSet + Default + Clone {
    /// Whether items are addressed by a stable id instead of their index.
    const KEYED_BY_ID: bool = false;

    /// Advisory label for the list editor.
    const ADVISORY: Option<&'static str> = None;

    /// The stable id of a keyed item.
    fn id(&self) -> Option<u32> {
        None
    }

    /// Assigns the stable id of a keyed item.
    fn assign_id(&mut self, _id: u32) {}
}

/// Items edited in place, in insertion order.
///
/// The list is the single owner of its items; every change goes through
/// [`OrderedList::apply`]. Ids of keyed items come from a counter that never
/// goes backwards, so an id is never reused within one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(serialize = "T: ListItem + Serialize", deserialize = "T: ListItem + Deserialize<'de>"))]
pub struct OrderedList<T: ListItem> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: ListItem> Default for OrderedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: ListItem> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        let next_id = items
            .iter()
            .filter_map(T::id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { items, next_id }
    }
}

impl<T: ListItem> From<OrderedList<T>> for Vec<T> {
    fn from(list: OrderedList<T>) -> Self {
        list.items
    }
}

impl<T: ListItem> OrderedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The reference under which the item at `index` is addressed.
    #[must_use]
    pub fn item_ref(&self, index: usize) -> Option<ItemRef> {
        let item = self.items.get(index)?;
        match item.id() {
            Some(id) if T::KEYED_BY_ID => Some(ItemRef::Id(id)),
            _ => Some(ItemRef::Index(index)),
        }
    }

    /// Applies one command.
    pub fn apply(&mut self, command: ListCommand) -> Applied {
        match command {
            ListCommand::Add => {
                let mut item = T::default();
                let item_ref = if T::KEYED_BY_ID {
                    let id = self.next_id;
                    self.next_id = self.next_id.saturating_add(1);
                    item.assign_id(id);
                    ItemRef::Id(id)
                } else {
                    ItemRef::Index(self.items.len())
                };
                self.items.push(item);
                tracing::debug!(%item_ref, "list item added");
                Applied::Added(item_ref)
            }

            ListCommand::Remove(item_ref) => match self.position(item_ref) {
                Some(i) => {
                    self.items.remove(i);
                    tracing::debug!(%item_ref, "list item removed");
                    Applied::Removed
                }
                None => {
                    tracing::debug!(%item_ref, "remove target not found");
                    Applied::Missing
                }
            },

            ListCommand::Update(item_ref, field, value) => {
                let outcome = self
                    .position(item_ref)
                    .and_then(|i| self.items.get_mut(i))
                    .and_then(|item| set_field(item, field, &value));
                match outcome {
                    Some(clamped) => Applied::Updated { clamped },
                    None => {
                        tracing::debug!(%item_ref, field, "update target not found");
                        Applied::Missing
                    }
                }
            }
        }
    }

    fn position(&self, item_ref: ItemRef) -> Option<usize> {
        match item_ref {
            ItemRef::Index(i) => (i < self.items.len()).then_some(i),
            ItemRef::Id(id) => self.items.iter().position(|item| item.id() == Some(id)),
        }
    }
}

/// One entry of an accordion, addressed by index.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItem {
    /// Heading shown on the collapsed entry.
    #[serde(default)]
    pub title: String,

    /// Body text, at most [`ACCORDION_SUBTITLE`] characters.
    #[serde(default)]
    pub sub_title: String,
}

impl ListItem for AccordionItem {}

impl FieldSet for AccordionItem {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("subTitle", "Subtitle", FieldKind::Bounded(ACCORDION_SUBTITLE)),
    ];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "subTitle" => Some(&self.sub_title),
            _ => None,
        }
    }

    fn get_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "title" => Some(&mut self.title),
            "subTitle" => Some(&mut self.sub_title),
            _ => None,
        }
    }
}

/// One card of the reels slider, addressed by its stable id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelCard {
    /// Stable identifier.
    #[serde(default)]
    pub id: u32,

    /// Storage key of the card media.
    #[serde(default)]
    pub media: String,

    /// Card title.
    #[serde(default)]
    pub title: String,

    /// Card subtitle.
    #[serde(default)]
    pub sub_title: String,
}

impl ListItem for ReelCard {
    const KEYED_BY_ID: bool = true;
    const ADVISORY: Option<&'static str> = Some(REELS_MINIMUM_ADVISORY);

    fn id(&self) -> Option<u32> {
        Some(self.id)
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl FieldSet for ReelCard {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("media", "Media", FieldKind::Media),
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("subTitle", "Subtitle", FieldKind::Text),
    ];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            "media" => Some(&self.media),
            "title" => Some(&self.title),
            "subTitle" => Some(&self.sub_title),
            _ => None,
        }
    }

    fn get_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "media" => Some(&mut self.media),
            "title" => Some(&mut self.title),
            "subTitle" => Some(&mut self.sub_title),
            _ => None,
        }
    }
}
