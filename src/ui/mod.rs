// Layout orchestration

pub mod asset_list;
pub mod prompt;

use crate::app::{App, Mode};
use crate::ui::{
    asset_list::{compute_scroll, render_assets},
    prompt::render_prompt,
};
use ratatui::{prelude::*, widgets::Paragraph};

/// Center a popup of given size within `area`.
pub fn popup_center(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let main_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    let status_y = area.y + area.height.saturating_sub(1);
    let status_area = Rect::new(area.x, status_y, area.width, 1.min(area.height));

    let visible_height = main_area.height.saturating_sub(2) as usize;
    app.list_scroll = compute_scroll(app.selected, visible_height, app.list_scroll);

    render_assets(
        frame,
        main_area,
        &app.library,
        app.selected,
        app.list_scroll,
        app.config.direction.is_right_to_left(),
        &mut app.anchors,
    );
    render_status_bar(frame, status_area, app);

    // Popup coordinates are absolute, so it gets the whole frame.
    app.prompt_hits = app
        .prompt
        .view()
        .map(|view| render_prompt(frame, area, &view, &app.catalog, &app.config.metrics));
}

fn get_mode_label(app: &App) -> &'static str {
    match app.mode() {
        Mode::Normal => "NORMAL",
        Mode::Prompt => "CONFIRM",
    }
}

fn build_hints(app: &App) -> String {
    match app.mode() {
        Mode::Normal if app.library.is_empty() => "nothing left to delete  ·  (q)uit".to_string(),
        Mode::Normal => format!(
            "(j/k) move  (d)elete  ·  (F2) dir: {}  (s)ide: {}  ·  (q)uit",
            app.config.direction, app.config.side
        ),
        Mode::Prompt => "(y/Enter) yes  (n) no  Esc: dismiss".to_string(),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let label = get_mode_label(app);
    let mode_text = format!(" [{}] ", label);
    let badge_width = mode_text.len();
    let badge_style = Style::default().fg(Color::Black).bg(Color::Yellow).bold();

    let ver = concat!(" v", env!("CARGO_PKG_VERSION"), " ");
    let ver_style = Style::default().fg(Color::DarkGray);

    let (left, left_style) = match app.status_message.as_deref() {
        Some(msg) if !msg.is_empty() => (format!(" {}", msg), Style::default().fg(Color::Cyan)),
        _ => (format!(" {}", build_hints(app)), Style::default().fg(Color::Gray)),
    };
    let left_len = badge_width + Span::raw(left.as_str()).width();
    let pad = (area.width as usize).saturating_sub(left_len + ver.len());

    let spans = vec![
        Span::styled(mode_text, badge_style),
        Span::styled(left, left_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(ver, ver_style),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
