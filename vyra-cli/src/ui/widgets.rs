use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use vyra::models::{DayPlan, Intensity, TrainingPhase, WeeklyPlan, WeeklyStats};

fn panel_block(title: &str, is_selected: bool) -> Block<'_> {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn intensity_color(intensity: Intensity) -> Color {
    match intensity {
        Intensity::Low => Color::Green,
        Intensity::Moderate => Color::Yellow,
        Intensity::High => Color::Red,
        Intensity::Recovery => Color::Blue,
    }
}

/// Render the seven days of the plan
pub fn render_week(
    area: Rect,
    buf: &mut Buffer,
    plan: &WeeklyPlan,
    selected_day: usize,
    is_selected: bool,
) {
    let block = panel_block(" 📅 This Week ", is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    let items: Vec<ListItem> = plan
        .days
        .iter()
        .enumerate()
        .map(|(idx, day)| {
            let marker = if day.is_today { "▶" } else { " " };
            let short_day = &day.day_name()[..3];

            let (text, color) = match &day.workout {
                Some(w) => (
                    format!("{} {} {:<7} {}", marker, short_day, day.date_label, w.name),
                    intensity_color(w.intensity),
                ),
                None => (
                    format!("{} {} {:<7} Rest", marker, short_day, day.date_label),
                    Color::DarkGray,
                ),
            };

            let mut style = Style::default().fg(color);
            if day.is_today {
                style = style.add_modifier(Modifier::BOLD);
            }
            if idx == selected_day {
                style = style.add_modifier(Modifier::REVERSED);
            }

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render minutes planned per weekday
pub fn render_minutes_chart(area: Rect, buf: &mut Buffer, plan: &WeeklyPlan) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 📈 Minutes per Day ")
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    let data: Vec<(&str, u64)> = plan
        .days
        .iter()
        .map(|day| {
            let minutes = day.workout.as_ref().map_or(0, |w| w.duration_minutes);
            (&day.day_name()[..3], u64::from(minutes))
        })
        .collect();

    BarChart::default()
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::White).bg(Color::Green))
        .render(inner, buf);
}

/// Render the workout of the highlighted day
pub fn render_day_details(area: Rect, buf: &mut Buffer, day: &DayPlan, is_selected: bool) {
    let title = format!(" 🏋 {} ", day.day_name());
    let block = panel_block(&title, is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    let Some(workout) = &day.workout else {
        let lines = vec![
            Line::from(Span::styled(
                "Rest day",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Recovery is part of training.",
                Style::default().fg(Color::Gray),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            workout.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} · {} min · ", workout.sport.display_name(), workout.duration_minutes),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                workout.intensity.to_string(),
                Style::default().fg(intensity_color(workout.intensity)),
            ),
        ]),
        Line::from(""),
        Line::from(workout.description.clone()),
    ];

    if let Some(exercises) = &workout.exercises {
        lines.push(Line::from(""));
        for exercise in exercises {
            lines.push(Line::from(format!("  • {}", exercise)));
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

/// Render weekly totals, sports and muscle groups
pub fn render_stats(
    area: Rect,
    buf: &mut Buffer,
    stats: &WeeklyStats,
    muscle_groups: &[String],
    phase: TrainingPhase,
    is_selected: bool,
) {
    let block = panel_block(" 📊 Weekly Stats ", is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Workouts: ", label),
            Span::styled(
                stats.workout_count.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Duration: ", label),
            Span::styled(
                format!("{} min", stats.total_duration_minutes),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Phase:    ", label),
            Span::styled(phase.to_string(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    if !stats.sport_breakdown.is_empty() {
        let sports: Vec<String> = stats
            .sport_breakdown
            .iter()
            .map(|(sport, count)| format!("{} ×{}", sport.display_name(), count))
            .collect();
        lines.push(Line::from(vec![
            Span::styled("Sports:   ", label),
            Span::raw(sports.join(", ")),
        ]));
    }

    if !muscle_groups.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Muscles:  ", label),
            Span::raw(muscle_groups.join(", ")),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        phase.coach_message(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

/// Render help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ❓ Help ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    block.render(area, buf);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation:", Style::default().fg(Color::Cyan))),
        Line::from("  ↑/k       - Previous day"),
        Line::from("  ↓/j       - Next day"),
        Line::from("  t         - Jump to today"),
        Line::from("  Tab/→/l   - Next panel"),
        Line::from("  Shift+Tab/←/h - Previous panel"),
        Line::from(""),
        Line::from(Span::styled("Plan:", Style::default().fg(Color::Cyan))),
        Line::from("  r         - Shuffle this week's workouts"),
        Line::from(""),
        Line::from(Span::styled("Other:", Style::default().fg(Color::Cyan))),
        Line::from("  ?         - Toggle this help"),
        Line::from("  q/Esc     - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or ESC to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(help_text).render(inner, buf);
}

/// Render status bar at bottom
pub fn render_status_bar(area: Rect, buf: &mut Buffer, athlete: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", athlete),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ),
        Span::styled(
            " Press ? for help ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
    ]);

    Paragraph::new(line).render(area, buf);
}
