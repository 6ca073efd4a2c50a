// Anchored delete-confirmation popup.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::anchor::CellMetrics;
use crate::messages::{Catalog, MessageKey};
use crate::placement::ArrowEdge;
use crate::prompt::PromptView;
use crate::ui::popup_center;

/// Screen rectangles of the last drawn popup, for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptHitAreas {
    pub popup: Rect,
    pub confirm: Rect,
    pub cancel: Rect,
}

/// What a click at (column, row) means while the popup is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptHit {
    Confirm,
    Cancel,
    Inside,
    Outside,
}

impl PromptHitAreas {
    pub fn hit(&self, column: u16, row: u16) -> PromptHit {
        let p = Position::new(column, row);
        if self.confirm.contains(p) {
            PromptHit::Confirm
        } else if self.cancel.contains(p) {
            PromptHit::Cancel
        } else if self.popup.contains(p) {
            PromptHit::Inside
        } else {
            PromptHit::Outside
        }
    }
}

pub fn render_prompt(
    frame: &mut Frame,
    area: Rect,
    view: &PromptView,
    catalog: &Catalog,
    metrics: &CellMetrics,
) -> PromptHitAreas {
    let width = metrics.popup_width_cells().min(area.width).max(8.min(area.width));
    let question = catalog.text(view.message);
    let rtl = view.direction.is_right_to_left();
    let align = if rtl { Alignment::Right } else { Alignment::Left };
    let para = Paragraph::new(question).alignment(align).wrap(Wrap { trim: true });

    // borders + question + spacer + button row
    let lines = para.line_count(width.saturating_sub(2)).max(1);
    let height = u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(4).min(area.height);
    let popup = popup_rect(area, view, metrics, width, height);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", catalog.text(MessageKey::DeleteHeading)))
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    // Frame too small for any content: the border alone stands in for the popup.
    if inner.is_empty() {
        let none = Rect::default();
        return PromptHitAreas { popup, confirm: none, cancel: none };
    }

    let msg_area = Rect { height: inner.height.saturating_sub(2), ..inner };
    if !msg_area.is_empty() {
        frame.render_widget(para, msg_area);
    }

    let row = Rect { y: inner.bottom() - 1, height: 1, ..inner };
    let (confirm, cancel) = render_buttons(frame, row, catalog, rtl);

    render_arrow(frame, popup, view.arrow);

    PromptHitAreas { popup, confirm, cancel }
}

/// Resolved position converted to cells and kept inside `area`; centred
/// when there is no anchored position.
pub fn popup_rect(
    area: Rect,
    view: &PromptView,
    metrics: &CellMetrics,
    width: u16,
    height: u16,
) -> Rect {
    let Some(pos) = view.position else {
        return popup_center(area, width, height);
    };
    let (x, y) = metrics.position_to_cell(pos);
    let max_x = i32::from(area.right()) - i32::from(width);
    let max_y = i32::from(area.bottom()) - i32::from(height);
    let x = x.min(max_x).max(i32::from(area.x));
    let y = y.min(max_y).max(i32::from(area.y));
    Rect::new(x as u16, y as u16, width, height)
}

// Confirm then cancel, mirrored for right-to-left.
fn render_buttons(frame: &mut Frame, row: Rect, catalog: &Catalog, rtl: bool) -> (Rect, Rect) {
    let yes = Span::styled(
        format!("[✕ {}]", catalog.text(MessageKey::ConfirmOption)),
        Style::default().fg(Color::Red).bold(),
    );
    let no = Span::styled(
        format!("[↺ {}]", catalog.text(MessageKey::CancelOption)),
        Style::default().fg(Color::Green).bold(),
    );
    let yes_w = u16::try_from(yes.width()).unwrap_or(u16::MAX);
    let no_w = u16::try_from(no.width()).unwrap_or(u16::MAX);
    let gap = 2;

    let (first_w, second_w) = if rtl { (no_w, yes_w) } else { (yes_w, no_w) };
    let total = first_w.saturating_add(gap).saturating_add(second_w);
    let start = if rtl { row.right().saturating_sub(total).max(row.x) } else { row.x };
    let second_x = start.saturating_add(first_w).saturating_add(gap);
    let first = Rect::new(start, row.y, first_w, 1).intersection(row);
    let second = Rect::new(second_x, row.y, second_w, 1).intersection(row);
    let (confirm, cancel) = if rtl { (second, first) } else { (first, second) };

    for (span, rect) in [(yes, confirm), (no, cancel)] {
        if !rect.is_empty() {
            frame.render_widget(Paragraph::new(span), rect);
        }
    }
    (confirm, cancel)
}

fn render_arrow(frame: &mut Frame, popup: Rect, edge: ArrowEdge) {
    if popup.width < 2 || popup.height < 3 {
        return;
    }
    let y = popup.y + popup.height / 2;
    let (x, symbol) = match edge {
        ArrowEdge::Left => (popup.x, "◀"),
        ArrowEdge::Right => (popup.right() - 1, "▶"),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(symbol, Style::default().fg(Color::Red))),
        Rect::new(x, y, 1, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prompt::{Direction, EntityType, PopupPosition};
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::HashMap;

    const AT: Option<PopupPosition> = Some(PopupPosition { top: 80.0, left: 175.0 });

    fn view(position: Option<PopupPosition>, direction: Direction) -> PromptView {
        PromptView {
            entity_type: EntityType::Costume,
            position,
            message: MessageKey::AskDeleteCostume,
            direction,
            arrow: crate::placement::arrow_edge(direction),
        }
    }

    fn draw(v: PromptView) -> (PromptHitAreas, Terminal<TestBackend>) {
        draw_on(v, &Catalog::default(), 80, 24)
    }

    fn draw_on(
        v: PromptView,
        catalog: &Catalog,
        width: u16,
        height: u16,
    ) -> (PromptHitAreas, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                hits = Some(render_prompt(frame, area, &v, catalog, &CellMetrics::default()));
            })
            .unwrap();
        (hits.unwrap(), terminal)
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn anchored_popup_lands_on_resolved_cell() {
        let (hits, terminal) = draw(view(AT, Direction::Ltr));
        assert_eq!(hits.popup, Rect::new(18, 4, 30, 6));
        assert!(row_text(&terminal, 4).contains("Confirm Asset Deletion"));
        assert!(row_text(&terminal, 5).contains("Are you sure you want to"));
        assert!(row_text(&terminal, 6).contains("delete this costume?"));
        assert!(row_text(&terminal, 8).contains("[✕ yes]  [↺ no]"));
        assert_eq!(hits.confirm, Rect::new(19, 8, 7, 1));
        assert_eq!(hits.cancel, Rect::new(28, 8, 6, 1));
        assert_eq!(terminal.backend().buffer()[(47, 7)].symbol(), "▶");
    }

    #[test]
    fn missing_position_is_centred() {
        let (hits, _) = draw(view(None, Direction::Ltr));
        assert_eq!(hits.popup, Rect::new(25, 9, 30, 6));
    }

    #[test]
    fn offscreen_position_is_clamped() {
        let above = Some(PopupPosition { top: -200.0, left: -275.0 });
        let (hits, _) = draw(view(above, Direction::Ltr));
        assert_eq!((hits.popup.x, hits.popup.y), (0, 0));

        let below = Some(PopupPosition { top: 9000.0, left: 9000.0 });
        let (hits, _) = draw(view(below, Direction::Ltr));
        assert_eq!((hits.popup.x, hits.popup.y), (50, 18));
    }

    #[test]
    fn rtl_mirrors_buttons_and_arrow() {
        let (hits, terminal) = draw(view(AT, Direction::Rtl));
        assert!(hits.cancel.x < hits.confirm.x);
        assert_eq!(hits.confirm.right(), hits.popup.right() - 1);
        assert_eq!(terminal.backend().buffer()[(18, 7)].symbol(), "◀");
    }

    #[test]
    fn hit_testing() {
        let (hits, _) = draw(view(AT, Direction::Ltr));
        assert_eq!(hits.hit(20, 8), PromptHit::Confirm);
        assert_eq!(hits.hit(30, 8), PromptHit::Cancel);
        assert_eq!(hits.hit(20, 5), PromptHit::Inside);
        assert_eq!(hits.hit(0, 0), PromptHit::Outside);
    }

    #[test]
    fn wide_characters_wrap_by_display_width() {
        let overrides = HashMap::from([(
            "gui.gui.shouldDeleteCostume".to_string(),
            "你确定要删除这个造型吗请再次确认一下好吗".to_string(),
        )]);
        let catalog = Catalog::with_overrides(&overrides);
        let (hits, terminal) = draw_on(view(AT, Direction::Ltr), &catalog, 80, 24);

        // 20 glyphs, two columns each, in 28 columns: 14 + 6
        assert_eq!(hits.popup, Rect::new(18, 4, 30, 6));
        let buf = terminal.backend().buffer();
        let inner_text = |y: u16| -> String {
            (19..47)
                .map(|x| buf[(x, y)].symbol().to_string())
                .filter(|s| !s.trim().is_empty())
                .collect()
        };
        assert_eq!(inner_text(5), "你确定要删除这个造型吗请再次");
        assert_eq!(inner_text(6), "确认一下好吗");
        assert_eq!(hits.confirm, Rect::new(19, 8, 7, 1));
    }

    #[test]
    fn tiny_frames_do_not_panic() {
        let sizes = [(1, 1), (2, 2), (80, 1), (80, 2), (10, 3), (12, 5)];
        for direction in [Direction::Ltr, Direction::Rtl] {
            for at in [None, AT] {
                for (w, h) in sizes {
                    let (hits, _) = draw_on(view(at, direction), &Catalog::default(), w, h);
                    let frame = Rect::new(0, 0, w, h);
                    assert_eq!(hits.popup.intersection(frame), hits.popup);
                    for button in [hits.confirm, hits.cancel] {
                        assert!(button.is_empty() || hits.popup.intersection(button) == button);
                    }
                }
            }
        }
    }
}
