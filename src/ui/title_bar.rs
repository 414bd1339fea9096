use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const TITLE: &str = " crabbank ";

fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 4] = [
        (80.0, 200.0, 210.0),  // teal
        (100.0, 170.0, 230.0), // blue
        (230.0, 180.0, 80.0),  // amber
        (90.0, 210.0, 130.0),  // green
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.15 - tick as f64 * 0.12).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = TITLE
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(wave_color(i as u16, state.tick_count))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
