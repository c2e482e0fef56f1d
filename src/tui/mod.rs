//! Ratatui-based questionnaire wizard.
//!
//! The TUI walks the original advising steps (Profile, Interests, Skills,
//! Experiences, Priorities, Funding, Contact, Results) and re-runs the match
//! pipeline after every edit, so the live panel always reflects the current
//! answers. All answer mutation happens here; the pipeline itself is pure.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::pipeline::{RunOutput, run_match};
use crate::catalog;
use crate::cli::TuiArgs;
use crate::domain::AnswerRecord;
use crate::error::AppError;

const STEPS: [&str; 8] = [
    "Profile",
    "Interests",
    "Skills",
    "Experiences",
    "Priorities",
    "Funding",
    "Contact",
    "Results",
];

const RESULTS_STEP: usize = 7;

/// Default output paths for the Results-step save keys.
const SUMMARY_PATH: &str = "pmatch-summary.txt";
const RESULTS_PATH: &str = "pmatch-results.json";

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let answers = crate::io::answers::load_answers(args.answers.as_deref())?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(answers);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Which free-text field is currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    Name,
    Email,
    Notes,
}

struct App {
    answers: AnswerRecord,
    step: usize,
    field: usize,
    editing: Option<TextTarget>,
    input: String,
    status: String,
    scroll: u16,
    run: RunOutput,
}

impl App {
    fn new(answers: AnswerRecord) -> Self {
        let run = run_match(answers.clone());
        Self {
            answers,
            step: 0,
            field: 0,
            editing: None,
            input: String::new(),
            status: "Tab/Shift-Tab steps, arrows move/adjust, Space toggles, q quits.".to_string(),
            scroll: 0,
            run,
        }
    }

    fn recompute(&mut self) {
        self.run = run_match(self.answers.clone());
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing.is_some() {
            self.handle_text_edit(code);
            return Ok(false);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab => {
                if self.step + 1 < STEPS.len() {
                    self.step += 1;
                    self.field = 0;
                    self.scroll = 0;
                }
            }
            KeyCode::BackTab => {
                if self.step > 0 {
                    self.step -= 1;
                    self.field = 0;
                    self.scroll = 0;
                }
            }
            KeyCode::Up => {
                if self.step == RESULTS_STEP {
                    self.scroll = self.scroll.saturating_sub(1);
                } else if self.field > 0 {
                    self.field -= 1;
                }
            }
            KeyCode::Down => {
                if self.step == RESULTS_STEP {
                    self.scroll = self.scroll.saturating_add(1);
                } else if self.field + 1 < self.field_count() {
                    self.field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char(' ') => self.toggle_field(),
            KeyCode::Enter => self.begin_text_edit(),
            KeyCode::Char('s') if self.step == RESULTS_STEP => {
                crate::io::export::write_summary_txt(Path::new(SUMMARY_PATH), &self.run.summary)?;
                self.status = format!("Wrote summary: {SUMMARY_PATH}");
            }
            KeyCode::Char('e') if self.step == RESULTS_STEP => {
                crate::io::export::write_results_json(Path::new(RESULTS_PATH), &self.run)?;
                self.status = format!("Wrote results: {RESULTS_PATH}");
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_text_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = None;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                let value = std::mem::take(&mut self.input);
                match self.editing {
                    Some(TextTarget::Name) => self.answers.name = value,
                    Some(TextTarget::Email) => self.answers.email = value,
                    Some(TextTarget::Notes) => self.answers.notes = value,
                    None => {}
                }
                self.editing = None;
                self.recompute();
                self.status = "Applied.".to_string();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn begin_text_edit(&mut self) {
        // Free-text fields live on the Contact step.
        if self.step != 6 {
            return;
        }
        let (target, current) = match self.field {
            0 => (TextTarget::Name, self.answers.name.clone()),
            1 => (TextTarget::Email, self.answers.email.clone()),
            3 => (TextTarget::Notes, self.answers.notes.clone()),
            _ => return,
        };
        self.editing = Some(target);
        self.input = current;
        self.status = "Editing text. Enter applies, Esc cancels.".to_string();
    }

    fn field_count(&self) -> usize {
        match self.step {
            0 => 6,
            1 => catalog::INTERESTS.len(),
            2 => 5,
            3 => catalog::EXPERIENCES.len(),
            4 => catalog::PRIORITIES.len(),
            5 => catalog::FUNDING_NEEDS.len() + 2,
            6 => 4,
            _ => 0,
        }
    }

    fn adjust_field(&mut self, delta: i32) {
        match (self.step, self.field) {
            (0, 0) => {
                self.answers.level = if delta >= 0 {
                    self.answers.level.next()
                } else {
                    self.answers.level.prev()
                };
            }
            (0, 1) => {
                self.answers.profile_status =
                    cycle_option(&self.answers.profile_status, &catalog::STATUS_OPTIONS, delta);
            }
            (0, 2) => {
                self.answers.residency =
                    cycle_option(&self.answers.residency, &catalog::RESIDENCY_OPTIONS, delta);
            }
            (0, 3) => {
                // Work on tenths so repeated steps stay on the 0.1 grid.
                let tenths = (self.answers.gpa * 10.0).round() as i32 + delta;
                self.answers.gpa = f64::from(tenths.clamp(20, 40)) / 10.0;
            }
            (0, 4) => self.answers.accel_interest = slider(self.answers.accel_interest, delta, 5),
            (0, 5) => self.answers.grad_timeline = slider(self.answers.grad_timeline, delta, 5),
            (2, i) => {
                let s = &mut self.answers.skills;
                let slot = match i {
                    0 => &mut s.quant,
                    1 => &mut s.writing,
                    2 => &mut s.communication,
                    3 => &mut s.leadership,
                    _ => &mut s.data_viz,
                };
                *slot = slider(*slot, delta, 5);
            }
            (5, i) if i == catalog::FUNDING_NEEDS.len() => {
                self.answers.budget_k = stepped(self.answers.budget_k, delta, 5, 10, 90);
            }
            (5, i) if i == catalog::FUNDING_NEEDS.len() + 1 => {
                self.answers.work_hours = stepped(self.answers.work_hours, delta, 5, 0, 30);
            }
            _ => return,
        }
        self.recompute();
    }

    fn toggle_field(&mut self) {
        match self.step {
            1 => toggle_term(&mut self.answers.policy_areas, catalog::INTERESTS[self.field]),
            3 => toggle_term(&mut self.answers.experiences, catalog::EXPERIENCES[self.field]),
            4 => toggle_term(&mut self.answers.priorities, catalog::PRIORITIES[self.field]),
            5 if self.field < catalog::FUNDING_NEEDS.len() => {
                toggle_term(&mut self.answers.funding_needs, catalog::FUNDING_NEEDS[self.field]);
            }
            6 if self.field == 2 => {
                self.answers.opt_in = !self.answers.opt_in;
            }
            _ => return,
        }
        self.recompute();
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        if self.step == RESULTS_STEP {
            self.draw_results(frame, chunks[1]);
        } else {
            self.draw_form(frame, chunks[1]);
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("pmatch", Style::default().fg(Color::Cyan)),
            Span::raw(" \u{2014} program match & advising checklist"),
        ]));

        let mut chips: Vec<Span> = Vec::new();
        for (i, label) in STEPS.iter().enumerate() {
            if i > 0 {
                chips.push(Span::raw(" "));
            }
            let style = if i == self.step {
                Style::default().fg(Color::Black).bg(Color::White)
            } else if i < self.step {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            chips.push(Span::styled(format!(" {label} "), style));
        }
        lines.push(Line::from(chips));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let items: Vec<ListItem> = self
            .form_rows()
            .into_iter()
            .map(ListItem::new)
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(STEPS[self.step])
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("\u{bb} ");

        let mut state = ListState::default();
        state.select(Some(self.field));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        self.draw_live_panel(frame, chunks[1]);

        if self.editing.is_some() {
            let hint = Paragraph::new(format!("> {}", self.input))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: chunks[0].x + 2,
                y: chunks[0].y + chunks[0].height.saturating_sub(2),
                width: chunks[0].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn form_rows(&self) -> Vec<String> {
        let a = &self.answers;
        match self.step {
            0 => vec![
                format!("Level: {}", label_or_dash(a.level.display_name())),
                format!("Status: {}", label_or_dash(&a.profile_status)),
                format!("Residency: {}", label_or_dash(&a.residency)),
                format!("GPA (approximate): {:.2}", a.gpa),
                format!("Accelerated/combined interest: {}/5", a.accel_interest),
                format!("Timeline to grad study: {}/5", a.grad_timeline),
            ],
            1 => checkbox_rows(&catalog::INTERESTS, &a.policy_areas),
            2 => vec![
                format!("Quantitative analysis / comfort with math: {}/5", a.skills.quant),
                format!("Academic or professional writing: {}/5", a.skills.writing),
                format!("Public speaking / communication: {}/5", a.skills.communication),
                format!("Team leadership / project management: {}/5", a.skills.leadership),
                format!("Data visualization / coding tools: {}/5", a.skills.data_viz),
            ],
            3 => checkbox_rows(&catalog::EXPERIENCES, &a.experiences),
            4 => checkbox_rows(&catalog::PRIORITIES, &a.priorities),
            5 => {
                let mut rows = checkbox_rows(&catalog::FUNDING_NEEDS, &a.funding_needs);
                rows.push(format!("Target budget per year: {}k", a.budget_k));
                rows.push(format!("Planned work hours: {} hrs/wk", a.work_hours));
                rows
            }
            6 => vec![
                format!("Name: {}", label_or_dash(&a.name)),
                format!("Email: {}", label_or_dash(&a.email)),
                format!(
                    "[{}] Send me tailored info sessions and deadlines",
                    if a.opt_in { "x" } else { " " }
                ),
                format!("Notes: {}", label_or_dash(&a.notes)),
            ],
            _ => Vec::new(),
        }
    }

    fn draw_live_panel(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for s in &self.run.ranked {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>2} ", s.score),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(s.program.name),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Scores update as you answer.",
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Live match").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_results(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        use crate::report::format as fmt;
        let mut text = String::new();
        text.push_str(&fmt::format_score_table(&self.run.ranked));
        text.push('\n');
        text.push_str(&fmt::format_top_suggestions(&self.run.ranked));
        text.push('\n');
        text.push_str(&fmt::format_checklist(&self.run.checklist));
        text.push('\n');
        text.push_str(&self.run.summary);
        text.push('\n');
        text.push('\n');
        text.push_str(&fmt::format_quick_plan());

        let p = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title("Match & Checklist")
                    .borders(Borders::ALL),
            );
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = if self.step == RESULTS_STEP {
            "\u{2191}/\u{2193} scroll  s save summary  e export JSON  Shift-Tab back  q quit"
        } else {
            "Tab/Shift-Tab step  \u{2191}/\u{2193} field  \u{2190}/\u{2192} adjust  Space toggle  Enter edit  q quit"
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn checkbox_rows(options: &[&str], selected: &[String]) -> Vec<String> {
    options
        .iter()
        .map(|opt| {
            let mark = if selected.iter().any(|v| v == opt) { "x" } else { " " };
            format!("[{mark}] {opt}")
        })
        .collect()
}

/// Toggle a vocabulary term; insertion order is preserved for display.
fn toggle_term(values: &mut Vec<String>, term: &str) {
    if let Some(pos) = values.iter().position(|v| v == term) {
        values.remove(pos);
    } else {
        values.push(term.to_string());
    }
}

fn cycle_option(current: &str, options: &[&str], delta: i32) -> String {
    let len = options.len() as i32;
    let idx = options
        .iter()
        .position(|o| *o == current)
        .unwrap_or(0) as i32;
    let next = (idx + delta).rem_euclid(len) as usize;
    options[next].to_string()
}

fn slider(value: u8, delta: i32, max: u8) -> u8 {
    let next = i32::from(value) + delta;
    next.clamp(0, i32::from(max)) as u8
}

fn stepped(value: u32, delta: i32, step: u32, min: u32, max: u32) -> u32 {
    let next = i64::from(value) + i64::from(delta) * i64::from(step);
    next.clamp(i64::from(min), i64::from(max)) as u32
}

fn label_or_dash(s: &str) -> &str {
    if s.is_empty() { "\u{2014}" } else { s }
}
