//! Draws a match snapshot into the terminal

use game_core::{GameState, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        Block, Clear, Paragraph,
    },
    Frame,
};

const LEFT_COLOR: Color = Color::Red;
const RIGHT_COLOR: Color = Color::Blue;
const BALL_COLOR: Color = Color::Yellow;

/// Canvas Y grows upward, the simulation's grows downward
pub fn flip_y(y: i32, height: i32, arena_height: i32) -> f64 {
    f64::from(arena_height - y - height)
}

/// Score line shown above the field
pub fn hud_line(snapshot: &Snapshot) -> String {
    format!(
        "PlayerOne: {}  PlayerTwo: {}  BallBounce: {}",
        snapshot.left.score, snapshot.right.score, snapshot.ball.bounce_counter
    )
}

/// Message for states that halt the simulation
pub fn overlay_text(snapshot: &Snapshot) -> Option<&'static str> {
    match snapshot.state {
        GameState::Menu => Some("Press SPACE to serve  -  W/S or arrows to move  -  Q to quit"),
        GameState::Paused => Some("Paused  -  press P to resume"),
        GameState::GameOver => {
            if snapshot.left.score > snapshot.right.score {
                Some("You win!  Press SPACE for a new match")
            } else {
                Some("Computer wins  -  press SPACE for a new match")
            }
        }
        GameState::Playing => None,
    }
}

pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let [hud, field] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(hud_line(snapshot))
            .alignment(Alignment::Center)
            .bold(),
        hud,
    );

    let width = f64::from(snapshot.arena_width);
    let height = snapshot.arena_height;
    let canvas = Canvas::default()
        .block(Block::bordered())
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, f64::from(height)])
        .paint(|ctx| {
            for (paddle, color) in [(snapshot.left, LEFT_COLOR), (snapshot.right, RIGHT_COLOR)] {
                ctx.draw(&Rectangle {
                    x: f64::from(paddle.x),
                    y: flip_y(paddle.y, paddle.height, height),
                    width: f64::from(paddle.width),
                    height: f64::from(paddle.height),
                    color,
                });
            }
            ctx.draw(&Circle {
                x: f64::from(snapshot.ball.x),
                y: flip_y(snapshot.ball.y, 0, height),
                radius: f64::from(snapshot.ball.radius),
                color: BALL_COLOR,
            });
        });
    frame.render_widget(canvas, field);

    if let Some(text) = overlay_text(snapshot) {
        let area = centered(field, text.len() as u16 + 4, 3);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Line::from(text))
                .alignment(Alignment::Center)
                .block(Block::bordered().style(Style::default().fg(Color::White))),
            area,
        );
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
