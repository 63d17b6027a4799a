//! Repaint gating for the squared app.
//!
//! egui is immediate mode: every frame redraws everything, and egui only
//! wakes on input by itself. The demo is entirely event-driven (initial show,
//! resize, slider change), so [`RepaintController`] tracks *why* a frame is
//! running and schedules exactly one extra frame when the app marks its
//! geometry dirty, so layout changes are always painted with fresh numbers
//! while an idle app schedules nothing.
//!
//! Apps call [`RepaintController::mark_needs_repaint`] when state changed
//! outside of a direct input event (e.g. the computed geometry was
//! invalidated mid-frame).

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame, always painted.
    Init,
    /// User input (mouse move, key press, scroll, resize).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
}

/// Drop this into your app struct and call [`begin_frame`](Self::begin_frame)
/// at the top of `update()` and [`end_frame`](Self::end_frame) at the bottom.
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Frame counter (0 = first frame).
    frame: u64,
    /// Why the current frame is being painted (set by begin_frame).
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Why the current frame is being painted.
    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of `update()`. Classifies the frame and consumes
    /// any pending one-shot request.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.any_click()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // Frame was triggered by something we can't classify (e.g. the
            // host resized us); treat it as input-driven.
            RepaintReason::Input
        };

        self.needs_repaint = false;
    }

    /// Call at the **end** of `update()`. Schedules one repaint if the app
    /// marked itself dirty during this frame; otherwise egui sleeps until
    /// the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_init() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.begin_frame(&ctx);
        assert_eq!(rc.reason(), RepaintReason::Init);
        rc.end_frame(&ctx);
        assert_eq!(rc.frame(), 1);
    }

    #[test]
    fn test_mark_is_consumed_as_state_change() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.begin_frame(&ctx);
        rc.end_frame(&ctx);

        rc.mark_needs_repaint();
        rc.begin_frame(&ctx);
        assert_eq!(rc.reason(), RepaintReason::StateChange);

        // Flag was consumed; an idle follow-up frame is input-classified.
        rc.begin_frame(&ctx);
        assert_ne!(rc.reason(), RepaintReason::StateChange);
    }
}
