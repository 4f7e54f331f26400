//! Rendering for the Skyward playfield, info panel, and overlays.
//!
//! The simulation runs in 800x450 abstract units; every frame we map each
//! terminal cell back to a playfield coordinate and ask what lives there.

use crate::constants::*;
use crate::game::types::{GamePhase, GameWorld, WeatherKind};
use crate::ui::game_common::{
    create_game_layout, render_centered_overlay, render_status_bar, GameLayout,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole game scene for the current phase.
pub fn render_game(frame: &mut Frame, area: Rect, world: &GameWorld) {
    match world.phase {
        GamePhase::Idle => render_mode_select(frame, area, world),
        GamePhase::GameOver => render_crash_screen(frame, area, world),
        GamePhase::Running => {
            let border_color = match world.weather.overlay() {
                Some(WeatherKind::Rain) => Color::Blue,
                Some(WeatherKind::Fog) => Color::Gray,
                None => Color::Cyan,
            };
            let layout: GameLayout =
                create_game_layout(frame, area, " Skyward ", border_color, 24);

            render_play_area(frame, layout.content, world);
            render_running_status_bar(frame, layout.status_bar, world);
            render_info_panel(frame, layout.info_panel, world);
        }
    }
}

/// Render the playfield: obstacles, bird, and the weather overlay.
fn render_play_area(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Playfield units per terminal cell.
    let ux = PLAYFIELD_WIDTH / width as f64;
    let uy = PLAYFIELD_HEIGHT / height as f64;

    let overlay = world.weather.overlay();
    let obstacle_color = match overlay {
        Some(WeatherKind::Fog) => Color::DarkGray,
        _ => Color::Green,
    };
    let bird_style = if world.surge_ticks_left > 0 {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    let bird_char = if world.bird.velocity < -2.0 {
        "▲"
    } else if world.bird.velocity > 6.0 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f64 + 0.5) * uy;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let game_x = (col as f64 + 0.5) * ux;

            if game_x >= BIRD_X
                && game_x < BIRD_X + BIRD_WIDTH
                && game_y >= world.bird.y
                && game_y < world.bird.y + BIRD_HEIGHT
            {
                spans.push(Span::styled(bird_char, bird_style));
                continue;
            }

            let in_obstacle = world.obstacles.iter().any(|pair| {
                game_x >= pair.x
                    && game_x < pair.trailing_edge()
                    && (game_y < pair.top_height
                        || game_y > PLAYFIELD_HEIGHT - pair.bottom_height)
            });
            if in_obstacle {
                spans.push(Span::styled("█", Style::default().fg(obstacle_color)));
                continue;
            }

            spans.push(weather_overlay_span(overlay, col, row, world.tick_count));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Overlay glyph for an empty cell: drifting droplets in rain, a static
/// haze in fog, plain space otherwise.
fn weather_overlay_span(
    overlay: Option<WeatherKind>,
    col: usize,
    row: usize,
    tick: u64,
) -> Span<'static> {
    match overlay {
        Some(WeatherKind::Rain) => {
            // Cheap hash, shifted by the tick so the rain falls.
            let phase = col as u64 * 7 + row as u64 * 13 + tick / 3;
            if phase % 11 == 0 {
                Span::styled("╱", Style::default().fg(Color::Blue))
            } else {
                Span::raw(" ")
            }
        }
        Some(WeatherKind::Fog) => {
            let phase = col * 5 + row * 3;
            if phase % 9 == 0 {
                Span::styled("▒", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(" ")
            }
        }
        None => Span::raw(" "),
    }
}

fn render_running_status_bar(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let (status, color) = match world.weather.overlay() {
        Some(WeatherKind::Rain) => (format!("Score: {}  ☂ RAIN", world.score), Color::Blue),
        Some(WeatherKind::Fog) => (format!("Score: {}  ≋ FOG", world.score), Color::Gray),
        None if world.surge_ticks_left > 0 => {
            (format!("Score: {}  ⚡ SURGE", world.score), Color::Magenta)
        }
        None => (format!("Score: {}", world.score), Color::Green),
    };
    render_status_bar(
        frame,
        area,
        &status,
        color,
        &[("[Space/Up/Enter]", "Flap"), ("[Q]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, world: &GameWorld) {
    use ratatui::widgets::{Block, Borders};

    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", world.mode.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    let weather_line = match world.weather.overlay() {
        Some(WeatherKind::Rain) => Span::styled(" Weather: Rain", Style::default().fg(Color::Blue)),
        Some(WeatherKind::Fog) => Span::styled(" Weather: Fog", Style::default().fg(Color::Gray)),
        None => Span::styled(" Weather: Calm", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(weather_line));

    if world.surge_ticks_left > 0 {
        let secs = world.surge_ticks_left as u64 / TICKS_PER_SECOND;
        lines.push(Line::from(Span::styled(
            format!(" Surge: {}s", secs + 1),
            Style::default().fg(Color::Magenta),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The Idle screen: title, mode list, and start hint.
fn render_mode_select(frame: &mut Frame, area: Rect, world: &GameWorld) {
    use crate::game::types::GameMode;

    let mut body = vec![Line::from(Span::styled(
        "Guide the bird through the gaps.",
        Style::default().fg(Color::White),
    ))];
    body.push(Line::from(""));

    for (i, mode) in GameMode::ALL.iter().enumerate() {
        let selected = *mode == world.mode;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        body.push(Line::from(Span::styled(
            format!("{} [{}] {}", marker, i + 1, mode.name()),
            style,
        )));
    }

    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        world.mode.description(),
        Style::default().fg(Color::Gray),
    )));
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        "[Space] Start    [1-3] Mode    [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    render_centered_overlay(frame, area, "S K Y W A R D", Color::Cyan, body);
}

/// The GameOver screen.
fn render_crash_screen(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let body = vec![
        Line::from(Span::styled(
            format!("You passed {} obstacles in {} mode.", world.score, world.mode.name()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] Restart    [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_centered_overlay(frame, area, "C R A S H", Color::Red, body);
}
