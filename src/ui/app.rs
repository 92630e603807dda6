//! Terminal presentation
//!
//! Draws the arena on a braille canvas plus a status line and the
//! toggleable inventory panel. Consumes only the per-tick render snapshot;
//! it never touches live simulation state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::game::snapshot::{InventoryView, RenderSnapshot};

/// Render one frame from a snapshot
pub fn render(frame: &mut Frame, snapshot: &RenderSnapshot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(10)])
        .split(frame.area());

    render_status(frame, rows[0], snapshot);

    if snapshot.inventory_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[1]);
        render_arena(frame, columns[0], snapshot);
        render_inventory(frame, columns[1], &snapshot.inventory);
    } else {
        render_arena(frame, rows[1], snapshot);
    }
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot) {
    let lines = vec![
        Line::from(Span::styled(
            snapshot.status_text.clone(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(snapshot.summary.clone()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_arena(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot) {
    let arena = snapshot.arena;
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Arena"))
        .marker(Marker::Braille)
        .x_bounds([0.0, arena.width as f64])
        .y_bounds([0.0, arena.height as f64])
        .paint(|ctx| paint_world(ctx, snapshot));
    frame.render_widget(canvas, area);
}

fn paint_world(ctx: &mut Context, snapshot: &RenderSnapshot) {
    let height = snapshot.arena.height as f64;

    for friendly in &snapshot.friendlies {
        ctx.draw(&Circle {
            x: friendly.pos.x as f64,
            y: height - friendly.pos.y as f64,
            radius: friendly.radius as f64,
            color: rgb(friendly.color),
        });
        ctx.print(
            (friendly.pos.x - 16.0) as f64,
            height - (friendly.pos.y - 16.0) as f64,
            Line::from(Span::styled(
                friendly.label.clone(),
                Style::default().fg(rgb(friendly.color)),
            )),
        );
    }

    for attack in &snapshot.attacks {
        ctx.draw(&Circle {
            x: attack.pos.x as f64,
            y: height - attack.pos.y as f64,
            radius: attack.radius as f64,
            color: Color::Rgb(40, 120, 160),
        });
    }

    for enemy in &snapshot.enemies {
        ctx.draw(&Circle {
            x: enemy.pos.x as f64,
            y: height - enemy.pos.y as f64,
            radius: enemy.radius as f64,
            color: rgb(enemy.color),
        });
    }

    let player = &snapshot.player;
    ctx.draw(&Circle {
        x: player.pos.x as f64,
        y: height - player.pos.y as f64,
        radius: player.radius as f64,
        color: rgb(player.color),
    });

    if player.blocking {
        ctx.draw(&Circle {
            x: player.pos.x as f64,
            y: height - player.pos.y as f64,
            radius: (player.radius + 5.0) as f64,
            color: Color::Rgb(139, 198, 255),
        });
    }
}

fn render_inventory(frame: &mut Frame, area: Rect, inventory: &InventoryView) {
    let mut lines = vec![
        Line::from(format!("Armor: Training Armor ({})", inventory.armor)),
        Line::from(format!("Weapon: {}", inventory.weapon)),
        Line::from(""),
        Line::from(Span::styled("Attack Slots (5):", Style::default().fg(Color::Cyan))),
    ];
    for (label, name) in &inventory.slots {
        lines.push(Line::from(format!(
            "  {}: {}",
            label,
            name.as_deref().unwrap_or("Empty")
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Unlocked Basic Attacks:",
        Style::default().fg(Color::Cyan),
    )));
    push_names(&mut lines, &inventory.unlocked_attacks);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Unlocked Skills:",
        Style::default().fg(Color::Cyan),
    )));
    push_names(&mut lines, &inventory.unlocked_skills);

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Inventory"));
    frame.render_widget(panel, area);
}

fn push_names(lines: &mut Vec<Line<'_>>, names: &[String]) {
    if names.is_empty() {
        lines.push(Line::from("  None"));
    } else {
        for name in names {
            lines.push(Line::from(format!("  {}", name)));
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
