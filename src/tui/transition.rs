//! # Slide entrance animation
//!
//! The slide is rendered normally, then its area of the frame buffer is
//! re-composited for the current animation progress `t` (0 → 1): offset
//! styles shift the rendered cells, reveal styles mask them to a growing
//! window, and fade dims them. Cells that fall outside are blanked.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::core::deck::Transition;

/// An in-flight entrance animation.
#[derive(Debug, Clone, Copy)]
pub struct SlideAnimation {
    pub transition: Transition,
    started: Instant,
    duration: Duration,
}

impl SlideAnimation {
    pub fn new(transition: Transition, started: Instant, duration: Duration) -> Self {
        Self {
            transition,
            started,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Overshoots past 1 before settling.
fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

/// Content offset `(dx, dy)` in cells for offset-style transitions.
fn offset(transition: Transition, area: Rect, t: f32) -> (i32, i32) {
    let w = f32::from(area.width);
    let h = f32::from(area.height);
    let remaining = 1.0 - ease_out_cubic(t);
    match transition {
        Transition::SlideLeft => ((remaining * w).round() as i32, 0),
        Transition::SlideRight => (-(remaining * w).round() as i32, 0),
        Transition::Diagonal => (
            (remaining * w / 2.0).round() as i32,
            (remaining * h / 2.0).round() as i32,
        ),
        Transition::Bounce => (0, ((1.0 - ease_out_back(t)) * h).round() as i32),
        _ => (0, 0),
    }
}

/// Visible window for reveal-style transitions.
fn reveal(transition: Transition, area: Rect, t: f32) -> Rect {
    let e = ease_out_cubic(t);
    let scaled = |len: u16| ((f32::from(len) * e).round() as u16).clamp(1, len.max(1));
    let (width, height) = match transition {
        Transition::Zoom => (scaled(area.width), scaled(area.height)),
        Transition::Flip => (area.width, scaled(area.height)),
        Transition::Rotate => (scaled(area.width), area.height),
        _ => return area,
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Re-composite `area` of `buf` as it should look at progress `t`.
pub fn apply(transition: Transition, t: f32, area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    if t >= 1.0 || area.is_empty() {
        return;
    }

    let mut rendered = Buffer::empty(area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(src), Some(dst)) = (buf.cell((x, y)), rendered.cell_mut((x, y))) {
                *dst = src.clone();
            }
        }
    }

    let (dx, dy) = offset(transition, area, t);
    let window = reveal(transition, area, t);
    let dim = transition == Transition::Fade && t < 0.5;

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let src_x = i32::from(x) - dx;
            let src_y = i32::from(y) - dy;
            let inside_window = window.contains((x, y).into());
            let source = if inside_window {
                u16::try_from(src_x)
                    .ok()
                    .zip(u16::try_from(src_y).ok())
                    .and_then(|pos| rendered.cell(pos))
            } else {
                None
            };
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            match source {
                Some(src) => {
                    *cell = src.clone();
                    if dim {
                        cell.set_style(Style::default().add_modifier(Modifier::DIM));
                    }
                }
                None => {
                    cell.reset();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_progress_clamps_and_handles_zero_duration() {
        let start = Instant::now();
        let anim = SlideAnimation::new(Transition::Fade, start, Duration::from_millis(300));
        assert_eq!(anim.progress(start), 0.0);
        assert!((anim.progress(start + Duration::from_millis(150)) - 0.5).abs() < 1e-3);
        assert_eq!(anim.progress(start + Duration::from_secs(5)), 1.0);
        assert!(anim.is_done(start + Duration::from_millis(300)));

        let instant = SlideAnimation::new(Transition::Zoom, start, Duration::ZERO);
        assert!(instant.is_done(start));
    }

    #[test]
    fn test_finished_animation_leaves_buffer_untouched() {
        let mut buf = Buffer::with_lines(["abcd", "efgh"]);
        let before = buf.clone();
        apply(Transition::SlideLeft, 1.0, buf.area, &mut buf);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_slide_left_starts_off_to_the_right() {
        let mut buf = Buffer::with_lines(["abcdefgh"]);
        apply(Transition::SlideLeft, 0.0, buf.area, &mut buf);
        assert_eq!(row(&buf, 0), "        ");

        let mut buf = Buffer::with_lines(["abcdefgh"]);
        // ease_out_cubic(0.5) = 0.875, so 1 of 8 columns remains offset
        apply(Transition::SlideLeft, 0.5, buf.area, &mut buf);
        assert_eq!(row(&buf, 0), " abcdefg");
    }

    #[test]
    fn test_slide_right_enters_from_the_left() {
        let mut buf = Buffer::with_lines(["abcdefgh"]);
        apply(Transition::SlideRight, 0.5, buf.area, &mut buf);
        assert_eq!(row(&buf, 0), "bcdefgh ");
    }

    #[test]
    fn test_zoom_reveals_a_centered_window() {
        let mut buf = Buffer::with_lines(["abcdefgh", "ijklmnop", "qrstuvwx", "yz012345"]);
        let window = reveal(Transition::Zoom, buf.area, 0.2);
        assert!(window.width < 8 && window.height < 4);
        apply(Transition::Zoom, 0.2, buf.area, &mut buf);
        // Corners are outside the window
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(7, 3)].symbol(), " ");
        // The center keeps its content in place
        assert_eq!(buf[(4, 2)].symbol(), "u");
    }

    #[test]
    fn test_flip_and_rotate_grow_along_one_axis() {
        let area = Rect::new(0, 0, 20, 10);
        let flip = reveal(Transition::Flip, area, 0.3);
        assert_eq!(flip.width, 20);
        assert!(flip.height < 10);

        let rotate = reveal(Transition::Rotate, area, 0.3);
        assert_eq!(rotate.height, 10);
        assert!(rotate.width < 20);
    }

    #[test]
    fn test_fade_dims_early_frames() {
        let mut buf = Buffer::with_lines(["ab"]);
        apply(Transition::Fade, 0.1, buf.area, &mut buf);
        assert_eq!(row(&buf, 0), "ab");
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));

        let mut buf = Buffer::with_lines(["ab"]);
        apply(Transition::Fade, 0.8, buf.area, &mut buf);
        assert!(!buf[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_bounce_starts_below_and_overshoots() {
        let area = Rect::new(0, 0, 10, 20);
        assert_eq!(offset(Transition::Bounce, area, 0.0), (0, 20));
        // Past the midpoint the curve overshoots, putting content above its rest position
        assert!(offset(Transition::Bounce, area, 0.8).1 <= 0);
        assert_eq!(offset(Transition::Bounce, area, 1.0), (0, 0));
    }

    #[test]
    fn test_diagonal_moves_on_both_axes() {
        let (dx, dy) = offset(Transition::Diagonal, Rect::new(0, 0, 40, 20), 0.0);
        assert_eq!((dx, dy), (20, 10));
    }
}
