use chrono::NaiveDate;
use rand::rngs::StdRng;

use vyra::config::WorkoutCatalog;
use vyra::models::{AthleteProfile, DayPlan, WeeklyPlan, WeeklyStats};
use vyra::services::{generate_weekly_plan, weekly_muscle_groups, weekly_stats};

/// Application state for the TUI dashboard
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Currently selected panel
    pub selected_panel: Panel,
    /// Selected weekday, 0 = Monday
    pub selected_day: usize,
    /// Show help overlay
    pub show_help: bool,
    pub profile: AthleteProfile,
    pub plan: WeeklyPlan,
    pub stats: WeeklyStats,
    pub muscle_groups: Vec<String>,
    catalog: WorkoutCatalog,
    today: NaiveDate,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Week,
    Workout,
    Stats,
}

impl App {
    /// Create new app instance and generate this week's plan
    pub fn new(
        profile: AthleteProfile,
        catalog: WorkoutCatalog,
        today: NaiveDate,
        mut rng: StdRng,
    ) -> Self {
        let plan = generate_weekly_plan(&profile, today, &catalog, &mut rng);
        let stats = weekly_stats(&plan);
        let muscle_groups = weekly_muscle_groups(&plan);
        let selected_day = plan.days.iter().position(|d| d.is_today).unwrap_or(0);

        Self {
            should_quit: false,
            selected_panel: Panel::Week,
            selected_day,
            show_help: false,
            profile,
            plan,
            stats,
            muscle_groups,
            catalog,
            today,
            rng,
        }
    }

    /// Day currently highlighted in the week panel
    pub fn selected(&self) -> Option<&DayPlan> {
        self.plan.days.get(self.selected_day)
    }

    /// Draw a fresh set of workouts for the same week
    pub fn regenerate(&mut self) {
        self.plan = generate_weekly_plan(&self.profile, self.today, &self.catalog, &mut self.rng);
        self.stats = weekly_stats(&self.plan);
        self.muscle_groups = weekly_muscle_groups(&self.plan);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        // Help overlay takes precedence
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            KeyCode::Char('?') => {
                self.show_help = true;
            }

            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.regenerate();
            }

            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.selected_day = self.plan.days.iter().position(|d| d.is_today).unwrap_or(0);
            }

            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.next_panel();
            }

            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.prev_panel();
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_day = self.selected_day.saturating_sub(1);
            }

            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.plan.days.len().saturating_sub(1);
                if self.selected_day < last {
                    self.selected_day += 1;
                }
            }

            _ => {}
        }
    }

    fn next_panel(&mut self) {
        self.selected_panel = match self.selected_panel {
            Panel::Week => Panel::Workout,
            Panel::Workout => Panel::Stats,
            Panel::Stats => Panel::Week,
        };
    }

    fn prev_panel(&mut self) {
        self.selected_panel = match self.selected_panel {
            Panel::Week => Panel::Stats,
            Panel::Workout => Panel::Week,
            Panel::Stats => Panel::Workout,
        };
    }
}
