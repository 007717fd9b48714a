// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Landing-page sections and their editable fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::list::{AccordionItem, Applied, ItemRef, ListCommand, ListItem, OrderedList, ReelCard};
use crate::media::MediaMatch;
use crate::text::{self, FULL_TEXT, SIDE_CARD_TEXT};

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,

    /// Text capped at the given number of characters.
    Bounded(usize),

    /// Storage key of a media object, chosen with the media picker.
    Media,
}

/// Describes one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,

    /// Label shown in editors.
    pub label: &'static str,

    /// Kind of value.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a field description.
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }

    /// The character limit of a bounded field.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        match self.kind {
            FieldKind::Bounded(limit) => Some(limit),
            FieldKind::Text | FieldKind::Media => None,
        }
    }
}

/// A value whose string fields can be read and written by name.
pub trait FieldSet {
    /// The editable fields.
    const FIELDS: &'static [FieldSpec];

    /// Reads a field by name.
    fn get(&self, field: &str) -> Option<&str>;

    /// Mutable access to a field by name.
    fn get_mut(&mut self, field: &str) -> Option<&mut String>;
}

/// Writes a field, clamping bounded fields to their limit.
///
/// Returns `None` for an unknown field, otherwise whether the value was cut.
pub fn set_field<F: FieldSet + ?Sized>(target: &mut F, field: &str, value: &str) -> Option<bool> {
    let spec = F::FIELDS.iter().find(|f| f.name == field)?;
    let slot = target.get_mut(field)?;
    let (kept, clamped) = match spec.limit() {
        Some(limit) => text::clamp(value, limit),
        None => (value, false),
    };
    *slot = kept.to_string();
    Some(clamped)
}

/// Clamps every bounded field of a freshly loaded value.
fn clamp_all<F: FieldSet>(target: &mut F) {
    for spec in F::FIELDS {
        let Some(limit) = spec.limit() else { continue };
        if let Some(slot) = target.get_mut(spec.name) {
            let (kept, clamped) = text::clamp(slot, limit);
            if clamped {
                tracing::warn!(field = spec.name, limit, "loaded text exceeds limit, truncated");
                *slot = kept.to_string();
            }
        }
    }
}

/// Implements [`FieldSet`] for a struct of `String` fields.
macro_rules! field_set {
    ($ty:ty { $($field:ident => $name:literal, $label:literal, $kind:expr;)* }) => {
        impl FieldSet for $ty {
            const FIELDS: &'static [FieldSpec] = &[
                $(FieldSpec::new($name, $label, $kind),)*
            ];

            fn get(&self, field: &str) -> Option<&str> {
                match field {
                    $($name => Some(&self.$field),)*
                    _ => None,
                }
            }

            fn get_mut(&mut self, field: &str) -> Option<&mut String> {
                match field {
                    $($name => Some(&mut self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

/// Page header with a title and a logo.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderSection {
    /// Page title.
    pub title: String,
    /// Storage key of the logo.
    pub logo_media: String,
}

field_set!(HeaderSection {
    title => "title", "Title", FieldKind::Text;
    logo_media => "logoMedia", "Logo", FieldKind::Media;
});

/// Full-width text block.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FullTextSection {
    /// Block text.
    pub text: String,
}

field_set!(FullTextSection {
    text => "text", "Text", FieldKind::Bounded(FULL_TEXT);
});

/// Card with media on one side and text on the other.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextCardSection {
    /// Storage key of the card media.
    pub media: String,
    /// Card text.
    pub text: String,
}

field_set!(TextCardSection {
    media => "media", "Media", FieldKind::Media;
    text => "text", "Text", FieldKind::Bounded(SIDE_CARD_TEXT);
});

/// Media next to an accordion of titled entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionSection {
    /// Storage key of the side media.
    pub media: String,
    /// Accordion entries.
    #[serde(rename = "accordian", alias = "accordion")]
    pub items: OrderedList<AccordionItem>,
}

field_set!(AccordionSection {
    media => "media", "Media", FieldKind::Media;
});

/// Horizontal slider of reel cards.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReelsSection {
    /// Slider cards.
    pub items: OrderedList<ReelCard>,
}

field_set!(ReelsSection {});

/// Large card with media on both faces.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlipCardSection {
    /// Storage key of the front face.
    pub front_media: String,
    /// Storage key of the back face.
    pub back_media: String,
}

field_set!(FlipCardSection {
    front_media => "frontMedia", "Front media", FieldKind::Media;
    back_media => "backMedia", "Back media", FieldKind::Media;
});

/// Two hero cards side by side, each with a title and a call to action.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct TwinHeroSection {
    pub left_media: String,
    pub left_title: String,
    pub left_sub_title: String,
    pub left_button_text: String,
    pub left_button_url: String,
    pub right_media: String,
    pub right_title: String,
    pub right_sub_title: String,
    pub right_button_text: String,
    pub right_button_url: String,
}

field_set!(TwinHeroSection {
    left_media => "leftMedia", "Left media", FieldKind::Media;
    left_title => "leftTitle", "Left title", FieldKind::Text;
    left_sub_title => "leftSubTitle", "Left subtitle", FieldKind::Text;
    left_button_text => "leftButtonText", "Left button text", FieldKind::Text;
    left_button_url => "leftButtonUrl", "Left button URL", FieldKind::Text;
    right_media => "rightMedia", "Right media", FieldKind::Media;
    right_title => "rightTitle", "Right title", FieldKind::Text;
    right_sub_title => "rightSubTitle", "Right subtitle", FieldKind::Text;
    right_button_text => "rightButtonText", "Right button text", FieldKind::Text;
    right_button_url => "rightButtonUrl", "Right button URL", FieldKind::Text;
});

/// Kinds of sections that can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SectionKind {
    /// Page header.
    Header,
    /// Full-width text block.
    FullText,
    /// Text card with media on the left.
    LeftTextCard,
    /// Text card with media on the right.
    RightTextCard,
    /// Media with an accordion.
    Accordion,
    /// Reels card slider.
    Reels,
    /// Large flip card.
    FlipCard,
    /// Twin hero cards.
    TwinHero,
}

impl SectionKind {
    /// How the media picker of this section matches its search term.
    ///
    /// Header, side text cards and reels also find media by launch name.
    #[must_use]
    pub const fn default_match(self) -> MediaMatch {
        match self {
            SectionKind::Header
            | SectionKind::LeftTextCard
            | SectionKind::RightTextCard
            | SectionKind::Reels => MediaMatch::KeyOrLaunchName,
            SectionKind::FullText
            | SectionKind::Accordion
            | SectionKind::FlipCard
            | SectionKind::TwinHero => MediaMatch::Key,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Header => "Header",
            SectionKind::FullText => "Full text",
            SectionKind::LeftTextCard => "Left text card",
            SectionKind::RightTextCard => "Right text card",
            SectionKind::Accordion => "Accordion",
            SectionKind::Reels => "Reels slider",
            SectionKind::FlipCard => "Flip card",
            SectionKind::TwinHero => "Twin hero cards",
        };
        f.write_str(name)
    }
}

/// A section being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Section {
    Header(HeaderSection),
    FullText(FullTextSection),
    LeftTextCard(TextCardSection),
    RightTextCard(TextCardSection),
    Accordion(AccordionSection),
    Reels(ReelsSection),
    FlipCard(FlipCardSection),
    TwinHero(TwinHeroSection),
}

/// Dispatches an expression over the section payload.
macro_rules! with_section {
    ($section:expr, $inner:ident => $body:expr) => {
        match $section {
            Section::Header($inner) => $body,
            Section::FullText($inner) => $body,
            Section::LeftTextCard($inner) | Section::RightTextCard($inner) => $body,
            Section::Accordion($inner) => $body,
            Section::Reels($inner) => $body,
            Section::FlipCard($inner) => $body,
            Section::TwinHero($inner) => $body,
        }
    };
}

impl Section {
    /// Creates an empty section of the given kind.
    #[must_use]
    pub fn blank(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Header => Section::Header(HeaderSection::default()),
            SectionKind::FullText => Section::FullText(FullTextSection::default()),
            SectionKind::LeftTextCard => Section::LeftTextCard(TextCardSection::default()),
            SectionKind::RightTextCard => Section::RightTextCard(TextCardSection::default()),
            SectionKind::Accordion => Section::Accordion(AccordionSection::default()),
            SectionKind::Reels => Section::Reels(ReelsSection::default()),
            SectionKind::FlipCard => Section::FlipCard(FlipCardSection::default()),
            SectionKind::TwinHero => Section::TwinHero(TwinHeroSection::default()),
        }
    }

    /// Parses a section of the given kind from its JSON form.
    ///
    /// Bounded fields that are too long are truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a section of that kind.
    pub fn from_json(kind: SectionKind, json: &str) -> Result<Self, serde_json::Error> {
        fn parse<T: FieldSet + serde::de::DeserializeOwned>(
            json: &str,
        ) -> Result<T, serde_json::Error> {
            let mut value: T = serde_json::from_str(json)?;
            clamp_all(&mut value);
            Ok(value)
        }

        let mut section = match kind {
            SectionKind::Header => Section::Header(parse(json)?),
            SectionKind::FullText => Section::FullText(parse(json)?),
            SectionKind::LeftTextCard => Section::LeftTextCard(parse(json)?),
            SectionKind::RightTextCard => Section::RightTextCard(parse(json)?),
            SectionKind::Accordion => Section::Accordion(parse(json)?),
            SectionKind::Reels => Section::Reels(parse(json)?),
            SectionKind::FlipCard => Section::FlipCard(parse(json)?),
            SectionKind::TwinHero => Section::TwinHero(parse(json)?),
        };

        if let Section::Accordion(accordion) = &mut section {
            let items: Vec<AccordionItem> = std::mem::take(&mut accordion.items).into();
            let items: Vec<_> = items
                .into_iter()
                .map(|mut item| {
                    clamp_all(&mut item);
                    item
                })
                .collect();
            accordion.items = OrderedList::from(items);
        }
        Ok(section)
    }

    /// Serializes the section payload as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        with_section!(self, inner => serde_json::to_string_pretty(inner))
    }

    /// The kind of this section.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        match self {
            Section::Header(_) => SectionKind::Header,
            Section::FullText(_) => SectionKind::FullText,
            Section::LeftTextCard(_) => SectionKind::LeftTextCard,
            Section::RightTextCard(_) => SectionKind::RightTextCard,
            Section::Accordion(_) => SectionKind::Accordion,
            Section::Reels(_) => SectionKind::Reels,
            Section::FlipCard(_) => SectionKind::FlipCard,
            Section::TwinHero(_) => SectionKind::TwinHero,
        }
    }

    /// The scalar fields of the section.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        fn fields_of<T: FieldSet>(_: &T) -> &'static [FieldSpec] {
            T::FIELDS
        }
        with_section!(self, inner => fields_of(inner))
    }

    /// Reads a scalar field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        with_section!(self, inner => inner.get(field))
    }

    /// Writes a scalar field, clamping bounded fields.
    ///
    /// Returns `None` for an unknown field, otherwise whether the value was cut.
    pub fn set(&mut self, field: &str, value: &str) -> Option<bool> {
        with_section!(self, inner => set_field(inner, field, value))
    }

    /// The fields of the section's list items; empty for sections without a list.
    #[must_use]
    pub fn item_fields(&self) -> &'static [FieldSpec] {
        match self {
            Section::Accordion(_) => AccordionItem::FIELDS,
            Section::Reels(_) => ReelCard::FIELDS,
            _ => &[],
        }
    }

    /// Whether the section carries an editable list.
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.item_fields().is_empty()
    }

    /// The advisory label of the section's list editor.
    #[must_use]
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Section::Accordion(_) => AccordionItem::ADVISORY,
            Section::Reels(_) => ReelCard::ADVISORY,
            _ => None,
        }
    }

    /// Number of list items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Section::Accordion(s) => s.items.len(),
            Section::Reels(s) => s.items.len(),
            _ => 0,
        }
    }

    /// The reference of the list item at `index`.
    #[must_use]
    pub fn item_ref(&self, index: usize) -> Option<ItemRef> {
        match self {
            Section::Accordion(s) => s.items.item_ref(index),
            Section::Reels(s) => s.items.item_ref(index),
            _ => None,
        }
    }

    /// Reads a field of the list item at `index`.
    #[must_use]
    pub fn item_value(&self, index: usize, field: &str) -> Option<&str> {
        match self {
            Section::Accordion(s) => s.items.items().get(index)?.get(field),
            Section::Reels(s) => s.items.items().get(index)?.get(field),
            _ => None,
        }
    }

    /// Applies a list command to the section's list.
    pub fn apply(&mut self, command: ListCommand) -> Applied {
        match self {
            Section::Accordion(s) => s.items.apply(command),
            Section::Reels(s) => s.items.apply(command),
            _ => {
                tracing::debug!(kind = %self.kind(), "section has no list");
                Applied::Missing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_match_depends_on_kind() {
        for kind in [
            SectionKind::Header,
            SectionKind::LeftTextCard,
            SectionKind::RightTextCard,
            SectionKind::Reels,
        ] {
            assert_eq!(kind.default_match(), MediaMatch::KeyOrLaunchName, "{kind}");
        }
        for kind in [
            SectionKind::FullText,
            SectionKind::Accordion,
            SectionKind::FlipCard,
            SectionKind::TwinHero,
        ] {
            assert_eq!(kind.default_match(), MediaMatch::Key, "{kind}");
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut section = Section::blank(SectionKind::Header);
        section.set("title", "Spring").unwrap();
        section.set("logoMedia", "logo.svg").unwrap();

        let json: serde_json::Value = serde_json::from_str(&section.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Spring", "logoMedia": "logo.svg" })
        );
    }

    #[test]
    fn set_clamps_bounded_fields() {
        let mut section = Section::blank(SectionKind::LeftTextCard);
        assert_eq!(section.set("text", &"a".repeat(400)), Some(true));
        assert_eq!(section.get("text").map(str::len), Some(SIDE_CARD_TEXT));
        assert_eq!(section.set("media", "a.png"), Some(false));
        assert_eq!(section.set("nope", "x"), None);
    }

    #[test]
    fn from_json_truncates_long_text() {
        let json = format!(r#"{{ "text": "{}" }}"#, "b".repeat(500));
        let section = Section::from_json(SectionKind::FullText, &json).unwrap();
        assert_eq!(section.get("text").map(str::len), Some(FULL_TEXT));
    }

    #[test]
    fn accordion_reads_misspelled_list_name() {
        let json = format!(
            r#"{{ "media": "side.png", "accordian": [{{ "title": "Q", "subTitle": "{}" }}] }}"#,
            "c".repeat(210)
        );
        let section = Section::from_json(SectionKind::Accordion, &json).unwrap();
        assert_eq!(section.item_count(), 1);
        assert_eq!(section.item_value(0, "title"), Some("Q"));
        assert_eq!(
            section.item_value(0, "subTitle").map(str::len),
            Some(text::ACCORDION_SUBTITLE)
        );

        let out: serde_json::Value = serde_json::from_str(&section.to_json().unwrap()).unwrap();
        assert!(out.get("accordian").is_some());
    }

    #[test]
    fn list_commands_reach_the_section_list() {
        let mut section = Section::blank(SectionKind::Reels);
        assert_eq!(section.apply(ListCommand::Add), Applied::Added(ItemRef::Id(1)));
        section.apply(ListCommand::Update(ItemRef::Id(1), "media", "r.mp4".into()));
        assert_eq!(section.item_value(0, "media"), Some("r.mp4"));
        assert_eq!(section.advisory(), Some(crate::list::REELS_MINIMUM_ADVISORY));

        let mut header = Section::blank(SectionKind::Header);
        assert_eq!(header.apply(ListCommand::Add), Applied::Missing);
        assert!(!header.has_items());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(Section::from_json(SectionKind::Reels, r#"{ "items": 3 }"#).is_err());
    }
}
