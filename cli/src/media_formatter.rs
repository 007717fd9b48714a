// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use launchdesk_core::GalleryRow;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct MediaFormatter {
    columns: Vec<MediaColumn>,
    format: OutputFormat,
}

impl MediaFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                MediaColumn::Ordinal,
                MediaColumn::Name,
                MediaColumn::FileType,
                MediaColumn::Date,
                MediaColumn::Key,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [GalleryRow]) -> impl fmt::Display + 'a {
        Table::new(&self.columns, rows, &()).with_output_format(self.format)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MediaColumn {
    Ordinal,
    Name,
    FileType,
    Date,
    Key,
}

impl Column<GalleryRow, ()> for MediaColumn {
    fn name(&self) -> &'static str {
        match self {
            MediaColumn::Ordinal => "id",
            MediaColumn::Name => "name",
            MediaColumn::FileType => "type",
            MediaColumn::Date => "date",
            MediaColumn::Key => "key",
        }
    }

    fn format<'a>(&self, _prior: &(), row: &'a GalleryRow) -> Cow<'a, str> {
        match self {
            MediaColumn::Ordinal => Cow::Borrowed(&row.ordinal),
            MediaColumn::Name => Cow::Borrowed(&row.name),
            MediaColumn::FileType => Cow::Borrowed(&row.file_type),
            MediaColumn::Date => row
                .date
                .map_or(Cow::Borrowed(""), |d| d.strftime("%d.%m.%Y").to_string().into()),
            MediaColumn::Key => Cow::Borrowed(row.key.as_str()),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            MediaColumn::Ordinal => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _prior: &(), row: &GalleryRow) -> Option<Color> {
        match self {
            MediaColumn::FileType if row.selected => Some(Color::Yellow),
            MediaColumn::Key => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
