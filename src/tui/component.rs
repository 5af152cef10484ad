use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable piece of the presenter screen.
///
/// Components receive everything they draw as props (struct fields) built
/// fresh each frame from `App` and `TuiState`, and render into a `Rect`.
///
/// `render` takes `&mut self` so a component can record what it laid out
/// (hit-test rectangles for the navigation bar and the widget explorer)
/// for the event loop to read after the frame.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
