//! Toast notifications for submit outcomes
//!
//! Transient, fire-and-forget: a save result is shown for a few seconds in
//! the window corner and fades out. Nothing is tracked beyond display.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use super::app::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_PRIMARY};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    kind: ToastKind,
    message: String,
}

/// Queue of pending toasts; one is displayed at a time
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
    current: Option<(Toast, Instant)>,
}

impl ToastQueue {
    /// Enqueue a toast for display
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.pending.push_back(Toast {
            kind,
            message: message.into(),
        });
    }

    /// Render the current toast, promoting the next pending one when the
    /// previous toast expired
    pub fn render(&mut self, ctx: &egui::Context) {
        if self.current.is_none() {
            if let Some(toast) = self.pending.pop_front() {
                self.current = Some((toast, Instant::now()));
            }
        }

        let Some((toast, start_time)) = &self.current else {
            return;
        };

        let elapsed = start_time.elapsed();
        if elapsed > TOAST_DURATION {
            self.current = None;
            ctx.request_repaint(); // Check for next toast
            return;
        }

        // Fade in at the start, out at the end
        let progress = elapsed.as_secs_f32();
        let alpha = if progress < FADE_DURATION {
            progress / FADE_DURATION
        } else if progress > TOAST_DURATION.as_secs_f32() - FADE_DURATION {
            (TOAST_DURATION.as_secs_f32() - progress) / FADE_DURATION
        } else {
            1.0
        };

        let animated_alpha = ctx.animate_value_with_time(Id::new("toast_alpha"), alpha, 0.1);
        let toast = toast.clone();

        egui::Area::new(Id::new("submit_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let bg_color = Color32::from_rgba_unmultiplied(
                    BG_SECONDARY.r(),
                    BG_SECONDARY.g(),
                    BG_SECONDARY.b(),
                    (animated_alpha * 240.0) as u8,
                );

                egui::Frame::NONE
                    .fill(bg_color)
                    .stroke(egui::Stroke::new(
                        1.0,
                        Color32::from_rgba_unmultiplied(
                            100,
                            100,
                            100,
                            (animated_alpha * 150.0) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_min_width(240.0);
                        render_toast_content(ui, &toast, animated_alpha);
                    });
            });

        // Keep repainting for animation
        ctx.request_repaint();
    }
}

fn render_toast_content(ui: &mut egui::Ui, toast: &Toast, alpha: f32) {
    let (icon, accent) = match toast.kind {
        ToastKind::Success => ("✔", ACCENT_GREEN),
        ToastKind::Error => ("✖", ACCENT_RED),
    };

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(icon)
                .color(apply_alpha(accent, alpha))
                .size(18.0),
        );
        ui.label(
            RichText::new(&toast.message)
                .color(apply_alpha(TEXT_PRIMARY, alpha))
                .size(13.0),
        );
    });
}

/// Apply alpha to a color
fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}
