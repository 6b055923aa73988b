// SPDX-License-Identifier: MPL-2.0
//! View rendering: the course page with toasts and the dialog layered above.

use super::courses::{Catalog, Course};
use super::Message;
use crate::ui::confirm::{Controller, Dialog};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Manager, Position, Toast};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub notifications: &'a Manager,
    pub dialog: &'a Controller,
    pub position: Position,
    pub now: Instant,
}

/// Renders the page and stacks the feedback overlays on top of it.
///
/// Layers, bottom to top: page, dialog (opaque backdrop), toasts. Toasts stay
/// visible and closable while a dialog is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(courses_page(ctx.catalog));

    if let Some(dialog) = Dialog::view_overlay(ctx.dialog, ctx.now) {
        layers = layers.push(dialog.map(Message::Confirm));
    }

    let toasts = Toast::view_overlay(ctx.notifications, ctx.position, ctx.now);
    layers.push(toasts.map(Message::Notification)).into()
}

fn courses_page(catalog: &Catalog) -> Element<'_, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Courses").size(typography::TITLE_LG))
        .push(
            Text::new(format!("{} courses in the catalog", catalog.len()))
                .size(typography::CAPTION),
        );

    let toolbar = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("Sync catalog").size(typography::BODY))
                .style(styles::button::neutral)
                .on_press(Message::SyncCatalog),
        )
        .push(
            button(Text::new("Simulate API error").size(typography::BODY))
                .style(styles::button::neutral)
                .on_press(Message::SimulateFailure),
        )
        .push(
            button(Text::new("Maintenance notice").size(typography::BODY))
                .style(styles::button::neutral)
                .on_press(Message::RaiseWarning),
        );

    let rows = if catalog.is_empty() {
        Column::new().push(Text::new("No courses left.").size(typography::BODY))
    } else {
        catalog
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, course| {
                column.push(course_row(course))
            })
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(header)
        .push(toolbar)
        .push(rows);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn course_row(course: &Course) -> Element<'_, Message> {
    let status = if course.published {
        "Published"
    } else {
        "Draft"
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(course.name.as_str()).size(typography::BODY_LG))
        .push(
            text(format!(
                "{} · {} sessions · {status}",
                course.instructor, course.sessions
            ))
            .size(typography::CAPTION),
        );

    let toggle_label = if course.published {
        "Unpublish"
    } else {
        "Publish"
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(toggle_label).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::secondary)
                .on_press(Message::UpdateCourse(course.id)),
        )
        .push(
            button(Text::new("Delete").size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::danger)
                .on_press(Message::DeleteCourse(course.id)),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(details)
            .push(actions),
    )
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}
