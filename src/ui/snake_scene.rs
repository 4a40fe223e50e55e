//! Game screen rendering.
//!
//! Uses half-block pixel rendering. Each grid cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::engine::GameSnapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Colors ───────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const DEAD_HEAD_COLOR: Color = Color::Rgb(255, 60, 60);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const FRUIT_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// What occupies one grid cell, from the renderer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Fruit,
    /// Body segment; `0` is the segment nearest the head.
    Body(usize),
    Head,
}

/// Classify every cell of the grid, indexed by linear cell index.
///
/// A cell can hold several things at once (fruit under the body, head on the
/// body after a collision). Head wins over body, body over fruit.
pub fn classify_cells(snapshot: &GameSnapshot) -> Vec<CellKind> {
    let cells = snapshot.grid_size * snapshot.grid_size;
    let mut kinds = vec![CellKind::Empty; cells];

    if let Some(kind) = kinds.get_mut(snapshot.fruit_index) {
        *kind = CellKind::Fruit;
    }

    // Oldest first, so newer segments overwrite the duplicates left by growth
    let len = snapshot.body.len();
    for (i, &index) in snapshot.body.iter().enumerate() {
        if let Some(kind) = kinds.get_mut(index) {
            *kind = CellKind::Body(len - 1 - i);
        }
    }

    if let Some(kind) = snapshot.head_index.and_then(|index| kinds.get_mut(index)) {
        *kind = CellKind::Head;
    }

    kinds
}

/// Render the game screen.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let field_rows = snapshot.grid_size.div_ceil(2) as u16 + 2;
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, field_rows, 20);

    render_play_field(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    if snapshot.is_game_over {
        let message = format!("SCORE: {}", snapshot.score);
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER",
            &message,
            &[("[Enter]", "Retry"), ("[Q]", "Quit")],
        );
    }
}

/// Calculate interpolated RGB color for a body segment.
fn body_color(distance: usize, body_len: usize) -> Color {
    let t = distance as f64 / body_len.saturating_sub(1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn cell_color(kind: CellKind, snapshot: &GameSnapshot) -> Option<Color> {
    match kind {
        CellKind::Empty => None,
        CellKind::Fruit => Some(FRUIT_COLOR),
        CellKind::Body(distance) => Some(body_color(distance, snapshot.body.len())),
        CellKind::Head if snapshot.is_game_over => Some(DEAD_HEAD_COLOR),
        CellKind::Head => Some(HEAD_COLOR),
    }
}

/// Render the play field: score in the top border, then two grid rows per
/// terminal row via `▀` (fg = top pixel, bg = bottom pixel).
fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid = snapshot.grid_size;
    let pixels: Vec<Option<Color>> = classify_cells(snapshot)
        .into_iter()
        .map(|kind| cell_color(kind, snapshot))
        .collect();

    let content_rows = grid.div_ceil(2);
    let render_w = ((grid + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;

    // ── Top border with score ───────────────────────────────────
    {
        let label = "SCORE: ";
        let score_val = snapshot.score.to_string();
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let border = Style::default().fg(BORDER_COLOR);
        let mut spans: Vec<Span> = vec![Span::styled(BORDER_TL.to_string(), border)];
        if pad_before > 0 {
            spans.push(Span::styled(
                std::iter::repeat(BORDER_H).take(pad_before).collect::<String>(),
                border,
            ));
        }
        spans.push(Span::styled(label, border));
        spans.push(Span::styled(score_val, Style::default().fg(Color::White)));
        if pad_after > 0 {
            spans.push(Span::styled(
                std::iter::repeat(BORDER_H).take(pad_after).collect::<String>(),
                border,
            ));
        }
        spans.push(Span::styled(BORDER_TR.to_string(), border));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // ── Grid rows ───────────────────────────────────────────────
    for term_row in 0..content_rows {
        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;

        let mut spans: Vec<Span> = vec![Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        )];

        // Batch consecutive cells with the same style
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for gx in 0..grid.min(inner_w) {
            let top = pixels[top_gy * grid + gx];
            let bot = if bot_gy < grid {
                pixels[bot_gy * grid + gx]
            } else {
                None
            };
            let fg = top.unwrap_or(EMPTY_BG);
            let bg = bot.unwrap_or(EMPTY_BG);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut s = String::new();
        s.push(BORDER_BL);
        s.extend(std::iter::repeat(BORDER_H).take(inner_w));
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                s,
                Style::default().fg(BORDER_COLOR),
            ))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    if snapshot.is_game_over {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[Enter]", "Retry"), ("[Q]", "Quit")],
        );
        return;
    }

    render_status_bar(
        frame,
        area,
        "Slither!",
        Color::Green,
        &[("[Arrows]", "Move"), ("[Q]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(snapshot.body.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Grid: ", label),
            Span::styled(
                format!("{}x{}", snapshot.grid_size, snapshot.grid_size),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", snapshot.tick_interval_ms), value),
        ]),
        Line::from(vec![
            Span::styled("Heading: ", label),
            Span::styled(snapshot.direction.name(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend_line(HEAD_COLOR, "Head"),
        legend_line(
            Color::Rgb(
                BODY_BRIGHT.0 as u8,
                BODY_BRIGHT.1 as u8,
                BODY_BRIGHT.2 as u8,
            ),
            "Body",
        ),
        legend_line(FRUIT_COLOR, "Fruit"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(color: Color, name: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
        Span::styled(name, Style::default().fg(Color::DarkGray)),
    ])
}
