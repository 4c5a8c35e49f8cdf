use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Center a rectangle of at most `width` x `height` inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Width of a form column: 80% of `area_width`, at least 20 columns.
pub fn form_column_width(area_width: u16) -> u16 {
    (area_width - area_width / 5).max(20)
}

/// Center a popup sized as a percentage of `area`.
pub fn center_popup(area: Rect, percent_width: u16, percent_height: u16) -> Rect {
    let width = (area.width as u32 * percent_width.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_height.min(100) as u32 / 100) as u16;
    center_rect(area, width, height)
}

/// Split a screen into app bar, body and footer.
///
/// Returns `[header, body, footer]`.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_column_width() {
        assert_eq!(form_column_width(100), 80);
        assert_eq!(form_column_width(10), 20);
        assert_eq!(form_column_width(u16::MAX), 52_428);
    }

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let centered = center_rect(area, 40, 10);
        assert_eq!(centered, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 10);
        let centered = center_rect(area, 50, 50);
        assert_eq!(centered, area);
    }

    #[test]
    fn test_center_popup() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = center_popup(area, 80, 50);
        assert_eq!(popup, Rect::new(10, 12, 80, 25));
    }

    #[test]
    fn test_standard_layout() {
        let [header, body, footer] = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(body.height, 19);
        assert_eq!(footer.y, 22);
    }
}
