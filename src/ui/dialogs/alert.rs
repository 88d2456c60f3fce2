//! The fake system alert: a modal box over a dimmed backdrop.
//!
//! Layout, top to bottom:
//! - title bar in the icon's color, with a small glyph, the title, and a
//!   window-style close button in the top-right corner
//! - white body with the large glyph and the message (line breaks kept, long
//!   lines wrapped)
//! - gray footer with a centered OK button
//!
//! The dialog is always drawn in the fixed light alert palette, whatever the
//! page theme is. While an `AlertDialog` exists, page scrolling is suspended.

use eframe::egui::{
    self, pos2, vec2, Align, Color32, CornerRadius, Galley, Id, Layout, Margin, Rect, RichText,
    Sense, Stroke, UiBuilder, WidgetInfo, WidgetType,
};
use std::sync::Arc;

use super::{CloseReason, DialogAction};
use crate::icon::{style_for, StyleBundle};
use crate::page::{ScrollLock, SharedPage};
use crate::state::DialogContent;
use crate::ui::theme::colors::{
    ALERT_BODY, ALERT_BORDER, ALERT_CHROME, ALERT_SEPARATOR, ALERT_TEXT, BACKDROP, CLOSE_HOVER,
    CLOSE_PRESSED, OK_BORDER, OK_BORDER_HOVER, OK_FILL, OK_FILL_HOVER, OK_FILL_PRESSED,
};
use crate::ui::theme::{alert_font, paint_glyph, render_glyph};

pub const DIALOG_WIDTH: f32 = 420.0;
const SCREEN_MARGIN: f32 = 16.0;
const TITLE_BAR_HEIGHT: f32 = 30.0;
const CLOSE_BUTTON_WIDTH: f32 = 40.0;
const TITLE_ICON_SIZE: f32 = 14.0;
const BODY_ICON_SIZE: f32 = 32.0;
const MESSAGE_FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 13.0;

pub const CLOSE_BUTTON_LABEL: &str = "Fermer la boîte de dialogue";

/// Screen rects of the dialog's parts from the most recent frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogLayout {
    pub dialog: Rect,
    pub close_button: Rect,
    pub message: Rect,
    pub ok_button: Rect,
}

impl Default for DialogLayout {
    fn default() -> Self {
        Self {
            dialog: Rect::NOTHING,
            close_button: Rect::NOTHING,
            message: Rect::NOTHING,
            ok_button: Rect::NOTHING,
        }
    }
}

/// An open alert. Dropping it closes the alert and releases the page scroll lock.
pub struct AlertDialog {
    _scroll_lock: ScrollLock,
    layout: DialogLayout,
}

impl AlertDialog {
    pub fn new(page: &SharedPage) -> Self {
        Self {
            _scroll_lock: ScrollLock::acquire(page),
            layout: DialogLayout::default(),
        }
    }

    pub fn layout(&self) -> DialogLayout {
        self.layout
    }

    /// Render the alert for `content`.
    /// Returns `Some(DialogAction::CloseAlert)` if the user dismissed it this frame.
    pub fn render(&mut self, ctx: &egui::Context, content: &DialogContent) -> Option<DialogAction> {
        let style = style_for(content.icon);
        let width = (ctx.screen_rect().width() - 2.0 * SCREEN_MARGIN).clamp(1.0, DIALOG_WIDTH);

        let modal = egui::Modal::new(Id::new("alert_dialog"))
            .backdrop_color(BACKDROP)
            .frame(
                egui::Frame::new()
                    .fill(ALERT_CHROME)
                    .stroke(Stroke::new(1.0, ALERT_BORDER))
                    .corner_radius(CornerRadius::same(1))
                    .shadow(ctx.style().visuals.popup_shadow),
            )
            .show(ctx, |ui| {
                ui.set_width(width);
                ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

                let (title_closed, title_id) = self.title_bar(ui, content, &style);
                let message_id = self.body(ui, content, &style);
                let ok_clicked = self.footer(ui);
                self.layout.dialog = ui.min_rect();

                let reason = if title_closed {
                    Some(CloseReason::TitleBar)
                } else if ok_clicked {
                    Some(CloseReason::OkButton)
                } else {
                    None
                };
                (reason, title_id, message_id)
            });

        // Announced as an alert: named by the title, described by the message
        let (reason, title_id, message_id) = modal.inner;
        let dialog = modal.response.labelled_by(title_id);
        ctx.accesskit_node_builder(dialog.id, |node| {
            node.set_role(egui::accesskit::Role::AlertDialog);
            node.push_described_by(egui::accesskit::NodeId::from(message_id.value()));
        });

        reason
            .or_else(|| modal.backdrop_response.clicked().then_some(CloseReason::Backdrop))
            .map(DialogAction::CloseAlert)
    }

    /// Returns whether the close button was clicked, and the title label's id.
    fn title_bar(&mut self, ui: &mut egui::Ui, content: &DialogContent, style: &StyleBundle) -> (bool, Id) {
        let (bar, _) = ui.allocate_exact_size(vec2(ui.available_width(), TITLE_BAR_HEIGHT), Sense::hover());
        ui.painter().rect_filled(bar, 0.0, style.title_bar_bg);

        let icon_rect = Rect::from_center_size(
            pos2(bar.left() + 8.0 + TITLE_ICON_SIZE / 2.0, bar.center().y),
            vec2(TITLE_ICON_SIZE, TITLE_ICON_SIZE),
        );
        paint_glyph(ui.painter(), icon_rect, style.title_bar_icon, style.title_bar_icon_color);

        let close_rect = Rect::from_min_max(pos2(bar.right() - CLOSE_BUTTON_WIDTH, bar.top()), bar.max);
        let close = ui.interact(close_rect, ui.id().with("alert_close"), Sense::click());
        close.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, CLOSE_BUTTON_LABEL));
        let close_fill = if close.is_pointer_button_down_on() {
            CLOSE_PRESSED
        } else if close.hovered() || close.has_focus() {
            CLOSE_HOVER
        } else {
            Color32::TRANSPARENT
        };
        ui.painter().rect_filled(close_rect, 0.0, close_fill);
        paint_close_cross(ui.painter(), close_rect.center());
        self.layout.close_button = close_rect;

        let text_rect = Rect::from_min_max(
            pos2(icon_rect.right() + 6.0, bar.top()),
            pos2(close_rect.left() - 4.0, bar.bottom()),
        );
        let title = ui
            .scope_builder(
                UiBuilder::new()
                    .max_rect(text_rect)
                    .layout(Layout::left_to_right(Align::Center)),
                |ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new(&content.title)
                                .font(alert_font(TITLE_FONT_SIZE))
                                .color(Color32::WHITE),
                        )
                        .truncate()
                        .selectable(false),
                    )
                },
            )
            .inner;

        (close.clicked(), title.id)
    }

    /// Returns the message label's id.
    fn body(&mut self, ui: &mut egui::Ui, content: &DialogContent, style: &StyleBundle) -> Id {
        egui::Frame::new()
            .fill(ALERT_BODY)
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.add_space(4.0);
                        render_glyph(ui, style.body_icon, BODY_ICON_SIZE, style.body_icon_color);
                    });
                    ui.add_space(16.0);
                    ui.vertical(|ui| {
                        ui.set_min_height(40.0);
                        ui.add_space(4.0);
                        let galley = layout_message(ui, &content.message, ui.available_width());
                        let message = ui.add(egui::Label::new(galley));
                        self.layout.message = message.rect;
                        message.id
                    })
                    .inner
                })
                .inner
            })
            .inner
    }

    /// Returns whether OK was clicked.
    fn footer(&mut self, ui: &mut egui::Ui) -> bool {
        let (separator, _) = ui.allocate_exact_size(vec2(ui.available_width(), 1.0), Sense::hover());
        ui.painter().rect_filled(separator, 0.0, ALERT_SEPARATOR);

        egui::Frame::new()
            .fill(ALERT_CHROME)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let widgets = &mut ui.visuals_mut().widgets;
                    widgets.inactive.weak_bg_fill = OK_FILL;
                    widgets.inactive.bg_stroke = Stroke::new(1.0, OK_BORDER);
                    widgets.hovered.weak_bg_fill = OK_FILL_HOVER;
                    widgets.hovered.bg_stroke = Stroke::new(1.0, OK_BORDER_HOVER);
                    widgets.active.weak_bg_fill = OK_FILL_PRESSED;
                    widgets.active.bg_stroke = Stroke::new(1.0, OK_BORDER_HOVER);
                    for state in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
                        state.corner_radius = CornerRadius::same(1);
                        state.expansion = 0.0;
                    }

                    let ok = ui.add(
                        egui::Button::new(
                            RichText::new("OK")
                                .font(alert_font(MESSAGE_FONT_SIZE))
                                .color(ALERT_TEXT),
                        )
                        .min_size(vec2(90.0, 24.0)),
                    );
                    self.layout.ok_button = ok.rect;
                    ok.clicked()
                })
                .inner
            })
            .inner
    }
}

/// Lay out the alert message. Embedded `\n` start new rows; long lines wrap at `wrap_width`.
pub fn layout_message(ui: &egui::Ui, message: &str, wrap_width: f32) -> Arc<Galley> {
    ui.fonts(|fonts| {
        fonts.layout(
            message.to_owned(),
            alert_font(MESSAGE_FONT_SIZE),
            ALERT_TEXT,
            wrap_width,
        )
    })
}

/// The 10x10 "X" of a window close button.
fn paint_close_cross(painter: &egui::Painter, center: egui::Pos2) {
    let stroke = Stroke::new(1.2, Color32::WHITE);
    let half = 5.0;
    painter.line_segment([center + vec2(-half, -half), center + vec2(half, half)], stroke);
    painter.line_segment([center + vec2(half, -half), center + vec2(-half, half)], stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContext;

    #[test]
    fn test_new_dialog_suspends_scrolling() {
        let page = PageContext::shared();
        let dialog = AlertDialog::new(&page);
        assert!(!page.borrow().scroll_enabled());
        drop(dialog);
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_layout_starts_empty() {
        let page = PageContext::shared();
        let layout = AlertDialog::new(&page).layout();
        assert_eq!(layout, DialogLayout::default());
        assert!(!layout.dialog.is_positive());
        assert!(!layout.ok_button.contains(egui::Pos2::ZERO));
    }

    #[test]
    fn test_layout_message_keeps_line_breaks() {
        let ctx = egui::Context::default();
        let mut rows = (0, 0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rows.0 = layout_message(ui, "Première ligne", 1000.0).rows.len();
                rows.1 = layout_message(ui, "Première ligne\nDeuxième\n\nCode: 42", 1000.0)
                    .rows
                    .len();
            });
        });
        assert_eq!(rows.0, 1);
        assert_eq!(rows.1, 4);
    }

    #[test]
    fn test_layout_message_wraps_long_lines() {
        let ctx = egui::Context::default();
        let mut rows = 0;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let long = "mot ".repeat(200);
                rows = layout_message(ui, &long, 200.0).rows.len();
            });
        });
        assert!(rows > 1);
    }
}
