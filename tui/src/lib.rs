//! TUI rendering for cubist using ratatui.

mod app;
mod board;
mod input;
mod pointer;
mod theme;
mod view;

pub use app::{App, Controller, Status, StatusKind};
pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardLayout};
pub use input::{handle_event, handle_events};
pub use pointer::{ACTIVE_FRAME, IDLE_FRAME, PickGesture, PointerRelease, frame_interval};
pub use theme::{Glyphs, Palette, UiOptions, glyphs, palette, styles};
pub use view::ViewModel;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use cubist_core::{Highlight, KeyValueStore, PickerView};
use cubist_types::{Cubie, CubieKind, Face};

use crate::board::LAYER_TITLES;

const PICKER_HEIGHT: u16 = 4;

/// Main draw function.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>) {
    let options = app.options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(BOARD_HEIGHT),  // Layer grids
            Constraint::Length(PICKER_HEIGHT), // Picker
            Constraint::Length(1),             // Status
            Constraint::Length(1),             // Key hints
            Constraint::Min(0),
        ])
        .split(frame.area());

    let board = BoardLayout::new(chunks[0]);
    draw_board(frame, app, board, &palette, &glyphs);
    app.set_board(board);
    draw_picker(frame, app, chunks[1], &palette, &glyphs);
    draw_status(frame, app, chunks[2], &palette, &glyphs);
    draw_hints(frame, chunks[3], &palette);
}

fn draw_board<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<S>,
    board: BoardLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    for (layer, title) in LAYER_TITLES.iter().enumerate() {
        let rect = board.layer_rect(layer).intersection(area);
        if rect.is_empty() {
            continue;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {title} "))
            .style(Style::default().bg(palette.bg_panel));
        frame.render_widget(block, rect);
    }

    for cubie in Cubie::visible() {
        let rect = board.cell_rect(cubie).intersection(area);
        if rect.is_empty() {
            continue;
        }
        let (lines, style) = cell_lines(app, cubie, palette, glyphs);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(style),
            rect,
        );
    }
}

fn cell_lines<S: KeyValueStore>(
    app: &App<S>,
    cubie: Cubie,
    palette: &Palette,
    glyphs: &Glyphs,
) -> (Vec<Line<'static>>, Style) {
    let highlight = app
        .controller()
        .observer()
        .selection()
        .highlight()
        .filter(|(selected, _)| *selected == cubie)
        .map(|(_, highlight)| highlight);

    let mut markers = Vec::new();
    if app.cursor() == cubie {
        markers.push(Span::styled(
            glyphs.cursor,
            Style::default().fg(palette.accent),
        ));
    }
    match highlight {
        Some(Highlight::Editable) => markers.push(Span::styled(
            glyphs.selected,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Some(Highlight::Locked) => markers.push(Span::styled(
            glyphs.locked,
            Style::default().fg(palette.text_muted),
        )),
        None => {}
    }
    if markers.len() == 2 {
        markers.insert(1, Span::raw(" "));
    }

    let stickers = app.controller().stickers().get(cubie);
    let mut sticker_line = Vec::new();
    if stickers.is_empty() {
        sticker_line.push(Span::styled(
            glyphs.empty,
            Style::default().fg(palette.text_muted),
        ));
    } else {
        for (i, letter) in stickers.chars().enumerate() {
            if i > 0 {
                sticker_line.push(Span::raw(" "));
            }
            let face = Face::from_letter(letter).unwrap_or(Face::U);
            let mut style = styles::sticker(palette, palette.face(face));
            if highlight == Some(Highlight::Locked) {
                style = style.add_modifier(Modifier::DIM);
            }
            sticker_line.push(Span::styled(letter.to_string(), style));
        }
    }

    let label_style = match cubie.kind() {
        CubieKind::Tracked(_) if app.controller().is_locked(cubie) => {
            Style::default().fg(palette.success)
        }
        _ => Style::default().fg(palette.text_muted),
    };
    let label = Line::from(Span::styled(cubie.name(), label_style));

    let style = if highlight.is_some() {
        Style::default().bg(palette.bg_highlight)
    } else {
        Style::default()
    };
    (
        vec![Line::from(markers), Line::from(sticker_line), label],
        style,
    )
}

fn draw_picker<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<S>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (title, line) = match app.controller().picker() {
        PickerView::Hidden => (
            " Picker ".to_string(),
            Line::from(Span::styled(
                "Select a cubie to edit it",
                Style::default().fg(palette.text_muted),
            )),
        ),
        PickerView::Locked { cubie } => (
            format!(" {cubie} "),
            Line::from(Span::styled(
                format!("{} {cubie} is locked", glyphs.locked),
                Style::default().fg(palette.text_disabled),
            )),
        ),
        PickerView::Candidates {
            cubie,
            category,
            entries,
        } => {
            let mut spans = Vec::with_capacity(entries.len() * 2);
            for (i, entry) in entries.iter().enumerate() {
                let highlighted = i == app.picker_index();
                let marker = if highlighted { glyphs.pointer } else { " " };
                spans.push(Span::styled(marker, Style::default().fg(palette.accent)));
                let mut style = styles::candidate(palette, entry.available);
                if highlighted {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(entry.piece.name(), style));
                spans.push(Span::raw(" "));
            }
            (format!(" {cubie} {} {category} ", glyphs.separator), Line::from(spans))
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title);
    frame.render_widget(
        Paragraph::new(line).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_status<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<S>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let parity = app.controller().observer().parity();
    let parity_color = if parity.is_consistent() {
        palette.success
    } else {
        palette.warning
    };
    let mut spans = vec![Span::styled(
        parity.to_string(),
        Style::default().fg(parity_color),
    )];

    let message = match app.status() {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => palette.text_primary,
                StatusKind::Warning => palette.warning,
                StatusKind::Error => palette.error,
            };
            Some(Span::styled(status.text.clone(), Style::default().fg(color)))
        }
        None if app.controller().is_complete() => Some(Span::styled(
            "Solved",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        None => None,
    };
    if let Some(message) = message {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.border),
        ));
        spans.push(message);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    const HINTS: [(&str, &str); 9] = [
        ("arrows", "move"),
        ("PgUp/PgDn", "layer"),
        ("Enter", "select"),
        ("Tab", "pick"),
        ("a", "assign"),
        ("e", "erase"),
        ("r", "rotate"),
        ("s/l", "save/load"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(HINTS.len() * 2);
    for (key, action) in HINTS {
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
