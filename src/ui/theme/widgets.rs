//! Painted alert glyphs.
//!
//! The glyphs are drawn with the painter rather than taken from a font, so
//! they look the same regardless of which fonts egui has loaded.

use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Rect, Sense, Shape, Stroke};

use crate::icon::IconGlyph;

/// Allocate a square of `size` and paint `glyph` into it.
pub fn render_glyph(ui: &mut egui::Ui, glyph: IconGlyph, size: f32, color: Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Other, true, glyph.name()));
    if ui.is_rect_visible(rect) {
        paint_glyph(ui.painter(), rect, glyph, color);
    }
    response
}

/// Paint `glyph` filling `rect`, using `color` as the main fill.
pub fn paint_glyph(painter: &egui::Painter, rect: Rect, glyph: IconGlyph, color: Color32) {
    let size = rect.width().min(rect.height());
    let center = rect.center();
    let radius = size / 2.0;

    match glyph {
        IconGlyph::CrossCircle => {
            painter.circle_filled(center, radius, color);
            let arm = radius * 0.42;
            let stroke = Stroke::new((size * 0.1).max(1.5), Color32::WHITE);
            painter.line_segment([center + vec2(-arm, -arm), center + vec2(arm, arm)], stroke);
            painter.line_segment([center + vec2(arm, -arm), center + vec2(-arm, arm)], stroke);
        }
        IconGlyph::Triangle => {
            let points = vec![
                pos2(center.x, rect.top() + size * 0.04),
                pos2(rect.right() - size * 0.02, rect.bottom() - size * 0.06),
                pos2(rect.left() + size * 0.02, rect.bottom() - size * 0.06),
            ];
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
            let mark = Color32::from_rgb(0x1F, 0x1F, 0x1F);
            let stroke = Stroke::new((size * 0.1).max(1.5), mark);
            painter.line_segment(
                [pos2(center.x, center.y - size * 0.14), pos2(center.x, center.y + size * 0.14)],
                stroke,
            );
            painter.circle_filled(pos2(center.x, center.y + size * 0.28), size * 0.055, mark);
        }
        IconGlyph::InfoCircle => {
            painter.circle_filled(center, radius, color);
            letter(painter, center, "i", size, Color32::WHITE);
        }
        IconGlyph::QuestionCircle => {
            painter.circle_filled(center, radius, color);
            letter(painter, center, "?", size, Color32::WHITE);
        }
        IconGlyph::Shield => {
            let w = size * 0.8;
            let left = center.x - w / 2.0;
            let right = center.x + w / 2.0;
            let points = vec![
                pos2(center.x, rect.top()),
                pos2(right, rect.top() + size * 0.18),
                pos2(right, center.y + size * 0.05),
                pos2(center.x, rect.bottom()),
                pos2(left, center.y + size * 0.05),
                pos2(left, rect.top() + size * 0.18),
            ];
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        }
    }
}

fn letter(painter: &egui::Painter, center: egui::Pos2, text: &str, size: f32, color: Color32) {
    painter.text(
        center,
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(size * 0.7),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_paints_shapes() {
        let ctx = egui::Context::default();
        for glyph in [
            IconGlyph::Shield,
            IconGlyph::CrossCircle,
            IconGlyph::Triangle,
            IconGlyph::InfoCircle,
            IconGlyph::QuestionCircle,
        ] {
            let output = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_glyph(ui, glyph, 32.0, Color32::RED);
                });
            });
            assert!(!output.shapes.is_empty(), "{glyph:?} painted nothing");
        }
    }

    #[test]
    fn test_glyph_is_named_for_assistive_tech() {
        let ctx = egui::Context::default();
        ctx.enable_accesskit();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_glyph(ui, IconGlyph::CrossCircle, 32.0, Color32::RED);
            });
        });

        let update = output
            .platform_output
            .accesskit_update
            .expect("accesskit tree update");
        assert!(update
            .nodes
            .iter()
            .any(|(_, node)| node.label() == Some(IconGlyph::CrossCircle.name())));
    }
}
