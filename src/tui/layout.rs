use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen frame shared by every view
pub struct AppLayout {
    pub nav_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Navigation bar: top row
    /// - Body: everything in between
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Navigation bar
                Constraint::Min(3),    // Body (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { nav_area: chunks[0], body_area: chunks[1], status_area: chunks[2] }
    }
}

/// Gallery body: search line on top, project list (60%) beside the preview (40%)
pub struct GalleryLayout {
    pub search_area: Rect,
    pub list_area: Rect,
    pub preview_area: Rect,
}

impl GalleryLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        Self { search_area: vertical[0], list_area: horizontal[0], preview_area: horizontal[1] }
    }
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Chat widget docked to the bottom-right corner, clipped to `area`
pub fn chat_dock(area: Rect) -> Rect {
    let width = area.width.min(56);
    let height = area.height.min(18);
    Rect::new(area.x + area.width - width, area.y + area.height - height, width, height)
}
