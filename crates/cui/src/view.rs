use crate::app::App;
use cardtable_core::{CardCode, Face, Rect as TableRect, Suit, Surface, Visual};
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Line, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

const CARD_GLYPHS: [&str; 6] = ["┌", "┐", "└", "┘", "─", "│"];
const BORDER_GLYPHS: [&str; 6] = ["╭", "╮", "╰", "╯", "─", "│"];
const EVENT_ROWS: u16 = 6;

/// The table is laid out first so its origin is the terminal origin; mouse
/// reports then land in table coordinates without any translation.
pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(EVENT_ROWS),
        ])
        .split(frame.area());

    draw_table(frame, root[0], app);
    draw_status(frame, root[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App) {
    let mut surface = TermSurface::new(frame.buffer_mut(), area);
    app.table.draw(&mut surface);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        format!(" seed {} ", app.seed).bold(),
        format!("| pile {} | loose {} ", app.pile_len(), app.table.loose.len()).into(),
        format!("| {} ", app.next_hint()).dim(),
        format!("| {}", app.status_line).into(),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem<'_>> = app
        .event_log
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|line| ListItem::new(line.as_str()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("left drag: pull a card out of the hand"),
        Line::from("right click: flip a hand card, or draw from the pile"),
        Line::from("s shuffle pile | f flip hand | r redeal"),
        Line::from("? / Esc toggle help | q quit"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}

/// Paints table geometry into a terminal buffer, one table unit per cell.
/// Anything outside `area` is clipped.
pub struct TermSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> TermSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    fn cell(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        self.buf.cell_mut((self.area.x + x, self.area.y + y))
    }

    fn put(&mut self, x: i32, y: i32, symbol: &str, style: Style) {
        if let Some(cell) = self.cell(x, y) {
            cell.set_symbol(symbol).set_style(style);
        }
    }

    fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) {
        let mut scratch = [0u8; 4];
        for (col, ch) in (x..).zip(text.chars()) {
            self.put(col, y, ch.encode_utf8(&mut scratch), style);
        }
    }

    /// Box outline, optionally filling the interior.
    fn frame(&mut self, rect: TableRect, glyphs: [&str; 6], style: Style, fill: Option<&str>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let right = rect.x.saturating_add(span(rect.width) - 1);
        let bottom = rect.y.saturating_add(span(rect.height) - 1);
        for y in rect.y..=bottom {
            for x in rect.x..=right {
                let symbol = match (x == rect.x, x == right, y == rect.y, y == bottom) {
                    (true, _, true, _) => glyphs[0],
                    (_, true, true, _) => glyphs[1],
                    (true, _, _, true) => glyphs[2],
                    (_, true, _, true) => glyphs[3],
                    (_, _, true, _) | (_, _, _, true) => glyphs[4],
                    (true, _, _, _) | (_, true, _, _) => glyphs[5],
                    _ => match fill {
                        Some(fill) => fill,
                        None => continue,
                    },
                };
                self.put(x, y, symbol, style);
            }
        }
    }
}

impl Surface for TermSurface<'_> {
    fn blit(&mut self, visual: &Visual, rect: TableRect) {
        match visual.face() {
            Face::Back => {
                let style = Style::default().fg(Color::Blue).bg(Color::Black);
                self.frame(rect, CARD_GLYPHS, style, Some("░"));
            }
            Face::Front(code) => {
                let fg = if code.is_red() { Color::Red } else { Color::Black };
                let style = Style::default().fg(fg).bg(Color::White);
                self.frame(rect, CARD_GLYPHS, style, Some(" "));
                let label = card_label(code);
                self.put_str(rect.x + 1, rect.y + 1, &label, style);
                if rect.height >= 4 {
                    let width = label.chars().count() as i32;
                    let right = rect.x + span(rect.width) - 1;
                    let bottom = rect.y + span(rect.height) - 1;
                    self.put_str(right - width, bottom - 1, &label, style);
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: TableRect) {
        let style = Style::default().fg(Color::DarkGray);
        self.frame(rect, BORDER_GLYPHS, style, None);
    }
}

fn span(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub fn card_label(code: CardCode) -> String {
    match code {
        CardCode::Standard { rank, suit } => {
            let rank = match rank.symbol() {
                '0' => "10".to_string(),
                other => other.to_string(),
            };
            let suit = match suit {
                Suit::Spades => '♠',
                Suit::Clubs => '♣',
                Suit::Hearts => '♥',
                Suit::Diamonds => '♦',
            };
            format!("{rank}{suit}")
        }
        CardCode::Joker(_) => "JK".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_core::{Point, Size};

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> String {
        buf.cell((x, y))
            .map(|cell| cell.symbol().to_string())
            .unwrap_or_default()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| symbol_at(buf, x, y)).collect()
    }

    fn front(code: &str) -> Visual {
        let code: CardCode = code.parse().unwrap();
        Visual::new("test", Face::Front(code), Size::new(6, 5))
    }

    #[test]
    fn labels_use_glyphs_and_two_digit_ten() {
        assert_eq!(card_label("0H".parse().unwrap()), "10♥");
        assert_eq!(card_label("QS".parse().unwrap()), "Q♠");
        assert_eq!(card_label("ZR".parse().unwrap()), "JK");
    }

    #[test]
    fn front_is_boxed_and_labelled() {
        let area = Rect::new(0, 0, 12, 8);
        let mut buf = Buffer::empty(area);
        let mut surface = TermSurface::new(&mut buf, area);
        surface.blit(&front("0H"), TableRect::new(Point::new(1, 1), Size::new(6, 5)));
        assert_eq!(symbol_at(&buf, 1, 1), "┌");
        assert_eq!(symbol_at(&buf, 6, 5), "┘");
        assert!(row(&buf, 2).contains("10♥"));
        assert_eq!(buf.cell((2, 2)).map(|cell| cell.fg), Some(Color::Red));
    }

    #[test]
    fn back_is_shaded() {
        let area = Rect::new(0, 0, 8, 6);
        let mut buf = Buffer::empty(area);
        let mut surface = TermSurface::new(&mut buf, area);
        let back = Visual::new("back", Face::Back, Size::new(4, 4));
        surface.blit(&back, TableRect::new(Point::new(0, 0), Size::new(4, 4)));
        assert_eq!(symbol_at(&buf, 1, 1), "░");
        assert_eq!(symbol_at(&buf, 3, 0), "┐");
    }

    #[test]
    fn drawing_is_clipped_to_the_area() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        let mut surface = TermSurface::new(&mut buf, area);
        surface.blit(&front("AS"), TableRect::new(Point::new(-2, -1), Size::new(10, 10)));
        surface.stroke_rect(TableRect::new(Point::new(3, 1), Size::new(10, 10)));
        // Label starts one column off screen; only the suit survives.
        assert_eq!(symbol_at(&buf, 0, 0), "♠");
        assert_eq!(symbol_at(&buf, 3, 1), "╭");
        assert_eq!(symbol_at(&buf, 4, 1), "─");
    }

    #[test]
    fn later_cards_cover_earlier_ones() {
        let area = Rect::new(0, 0, 12, 6);
        let mut buf = Buffer::empty(area);
        let mut surface = TermSurface::new(&mut buf, area);
        surface.blit(&front("4D"), TableRect::new(Point::new(0, 0), Size::new(6, 5)));
        surface.blit(&front("5S"), TableRect::new(Point::new(3, 0), Size::new(6, 5)));
        assert_eq!(symbol_at(&buf, 1, 1), "4");
        assert_eq!(symbol_at(&buf, 3, 1), "│");
        assert_eq!(symbol_at(&buf, 4, 1), "5");
    }
}
