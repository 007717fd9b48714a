// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use jiff::civil::Date;
use launchdesk_core::{LaunchCard, LaunchPhase};

use crate::table::{Column, Table};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct LaunchFormatter {
    columns: Vec<LaunchColumn>,
    today: Date,
    format: OutputFormat,
}

impl LaunchFormatter {
    pub fn new(today: Date) -> Self {
        Self {
            columns: vec![
                LaunchColumn::Id,
                LaunchColumn::Phase,
                LaunchColumn::Start,
                LaunchColumn::End,
                LaunchColumn::Name,
                LaunchColumn::Title,
            ],
            today,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, cards: &'a [LaunchCard<'a>]) -> impl fmt::Display + 'a {
        Table::new(&self.columns, cards, &self.today).with_output_format(self.format)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LaunchColumn {
    Id,
    Phase,
    Start,
    End,
    Name,
    Title,
}

impl<'c> Column<LaunchCard<'c>, Date> for LaunchColumn {
    fn name(&self) -> &'static str {
        match self {
            LaunchColumn::Id => "id",
            LaunchColumn::Phase => "phase",
            LaunchColumn::Start => "launch_date",
            LaunchColumn::End => "end_date",
            LaunchColumn::Name => "name",
            LaunchColumn::Title => "title",
        }
    }

    fn format<'a>(&self, today: &Date, card: &'a LaunchCard<'c>) -> Cow<'a, str> {
        match self {
            LaunchColumn::Id => Cow::Borrowed(&card.launch.id),
            LaunchColumn::Phase => card.launch.window.classify(*today).to_string().into(),
            LaunchColumn::Start => card.launch.window.launch.to_string().into(),
            LaunchColumn::End => card.launch.window.end.to_string().into(),
            LaunchColumn::Name => Cow::Borrowed(&card.launch.name),
            LaunchColumn::Title => card
                .seo
                .map_or(Cow::Borrowed(""), |seo| Cow::Borrowed(&seo.title)),
        }
    }

    fn get_color(&self, today: &Date, card: &LaunchCard<'c>) -> Option<Color> {
        match self {
            LaunchColumn::Phase => match card.launch.window.classify(*today) {
                LaunchPhase::Ongoing => Some(Color::Green),
                LaunchPhase::Upcoming => Some(Color::Yellow),
                LaunchPhase::Finished => Some(Color::BrightBlack),
            },
            _ => None,
        }
    }
}
