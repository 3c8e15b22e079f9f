use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centers a `width` x `height` box inside `r`, shrinking it to fit.
#[must_use]
pub fn centered_area(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_area() {
        let area = centered_area(20, 6, Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(30, 9, 20, 6));
    }

    #[test]
    fn test_centered_area_shrinks_to_fit() {
        let area = centered_area(100, 50, Rect::new(0, 0, 40, 10));
        assert_eq!(area, Rect::new(0, 0, 40, 10));
    }
}
