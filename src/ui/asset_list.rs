// Asset list with a `[del]` trigger on every visible row.
// Trigger rectangles are recorded into the anchor registry as they are drawn.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::anchor::AnchorRegistry;
use crate::model::asset::AssetLibrary;
use crate::model::prompt::EntityType;

pub const DELETE_LABEL: &str = "[del]";

/// Draws the list with a trigger per visible row. Right-to-left layouts put
/// the triggers on the left so an anchored popup opens over the list, not
/// over its own trigger.
pub fn render_assets(
    frame: &mut Frame,
    area: Rect,
    library: &AssetLibrary,
    selected: usize,
    scroll_offset: usize,
    rtl: bool,
    anchors: &mut AnchorRegistry,
) {
    anchors.clear();

    let align = if rtl { Alignment::Right } else { Alignment::Left };
    let items: Vec<ListItem> = library
        .assets
        .iter()
        .map(|asset| {
            let (icon, color) = match asset.kind {
                EntityType::Sprite => ("◆", Color::Cyan),
                EntityType::Costume => ("▣", Color::Magenta),
                EntityType::Sound => ("♪", Color::Green),
            };
            ListItem::new(
                Line::from(vec![
                    Span::styled(format!("{} ", icon), Style::default().fg(color)),
                    Span::raw(asset.name.clone()),
                    Span::styled(format!("  {}", asset.kind), Style::default().fg(Color::DarkGray)),
                ])
                .alignment(align),
            )
        })
        .collect();

    let mut list_state = ListState::default().with_offset(scroll_offset);
    if !library.is_empty() {
        list_state.select(Some(selected.min(library.len().saturating_sub(1))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Assets ")
        .title_style(Style::default().bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button_w = Span::raw(DELETE_LABEL).width() as u16;
    // Too narrow for triggers: plain list.
    let fits = inner.width > button_w + 2;
    let list_area = match (fits, rtl) {
        (false, _) => inner,
        (true, false) => Rect { width: inner.width - button_w - 2, ..inner },
        (true, true) => Rect {
            x: inner.x + button_w + 2,
            width: inner.width - button_w - 2,
            ..inner
        },
    };

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow).bold())
        .highlight_symbol("► ");
    frame.render_stateful_widget(list, list_area, &mut list_state);

    if !fits {
        return;
    }
    let button_x = if rtl { inner.x + 1 } else { inner.right() - button_w - 1 };
    // List may have adjusted the offset to keep the selection visible.
    let offset = list_state.offset();
    let visible = library.assets.iter().skip(offset).take(inner.height as usize);
    for (row, asset) in visible.enumerate() {
        let rect = Rect::new(button_x, inner.y + row as u16, button_w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(DELETE_LABEL, Style::default().fg(Color::Red))),
            rect,
        );
        anchors.record(asset.id, rect);
    }
}

/// Compute scroll offset to keep selected item visible.
pub fn compute_scroll(selected: usize, visible_height: usize, current_offset: usize) -> usize {
    if visible_height == 0 {
        return current_offset;
    }
    if selected < current_offset {
        selected
    } else if selected >= current_offset + visible_height {
        selected.saturating_sub(visible_height - 1)
    } else {
        current_offset
    }
}
