use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use raidkit_core::{
    crafting::{self, CraftPlan},
    market::{self, MarketQuote},
    store::{DataStore, Section},
    EntryRegistry, InputError,
};
use tokio::sync::mpsc;
use tracing::info;

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_NAME_LEN: usize = 64;
const MAX_FIELD_LEN: usize = 20;

const MENU_ITEMS: [&str; 6] = [
    "Black Market",
    "Tier Crafting",
    "Inventory",
    "Cards",
    "Settings",
    "Quit",
];

const MARKET_LABELS: [&str; 2] = ["Rubles", "Luna"];
const CRAFTING_LABELS: [&str; 6] = [
    "Qty Cards",
    "Tier (3-6)",
    "T3 Owned",
    "T4 Owned",
    "T5 Owned",
    "T6 Owned",
];

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    accent_alt: Color,
    muted: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            accent_alt: Color::Magenta,
            muted: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Market,
    Crafting,
    Entries(Section),
    AddEntry(Section),
    Settings,
}

/// Single-line editable text field with a cursor.
#[derive(Debug, Clone, Default)]
struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    fn insert(&mut self, ch: char, max_len: usize) {
        if self.value.len() + ch.len_utf8() > max_len || ch.is_control() {
            return;
        }
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    // The cursor is a byte offset, so steps follow char boundaries.
    fn move_cursor(&mut self, delta: isize) {
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                match self.value[..self.cursor].char_indices().next_back() {
                    Some((idx, _)) => self.cursor = idx,
                    None => break,
                }
            }
        } else {
            for _ in 0..delta as usize {
                match self.value[self.cursor..].chars().next() {
                    Some(ch) => self.cursor += ch.len_utf8(),
                    None => break,
                }
            }
        }
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn text(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Default)]
struct MarketForm {
    fields: [TextField; 2],
    focus: usize,
    quote: Option<Result<MarketQuote, InputError>>,
}

#[derive(Debug, Default)]
struct CraftingForm {
    fields: [TextField; 6],
    focus: usize,
    plan: Option<Result<CraftPlan, InputError>>,
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Terminal shell for the raidkit calculators and account lists.
pub struct RaidkitApp {
    data: DataStore,
    registry: EntryRegistry,
    theme: Theme,
    screen: Screen,
    menu_cursor: usize,
    status: String,
    should_quit: bool,
    market: MarketForm,
    crafting: CraftingForm,
    entries: Vec<String>,
    entry_cursor: usize,
    name_field: TextField,
}

impl RaidkitApp {
    pub fn new(data: DataStore) -> Self {
        let registry = EntryRegistry::new(data.clone());
        Self {
            data,
            registry,
            theme: Theme::default(),
            screen: Screen::Menu,
            menu_cursor: 0,
            status: "Welcome to raidkit".to_string(),
            should_quit: false,
            market: MarketForm::default(),
            crafting: CraftingForm::default(),
            entries: Vec::new(),
            entry_cursor: 0,
            name_field: TextField::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }
            match event_rx.recv().await {
                Some(AppEvent::Input(event)) => {
                    if let Err(err) = self.handle_input(event) {
                        self.set_status(format!("Error: {err}"));
                    }
                }
                Some(AppEvent::Tick) => {}
                None => break,
            }
            if self.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    fn set_screen(&mut self, screen: Screen) {
        // Lists reload when their screen becomes active, never on a timer.
        if let Screen::Entries(section) = screen {
            self.refresh_entries(section);
        }
        if let Screen::AddEntry(_) = screen {
            self.name_field.clear();
        }
        self.screen = screen;
    }

    fn refresh_entries(&mut self, section: Section) {
        self.entries = self.registry.entries(section);
        if self.entry_cursor >= self.entries.len() {
            self.entry_cursor = self.entries.len().saturating_sub(1);
        }
        self.set_status(format!(
            "{} {} entries",
            self.entries.len(),
            section.label()
        ));
    }

    // --- input handling ---

    fn handle_input(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Market => self.handle_market_key(key),
            Screen::Crafting => self.handle_crafting_key(key),
            Screen::Entries(section) => self.handle_entries_key(section, key),
            Screen::AddEntry(section) => self.handle_add_entry_key(section, key),
            Screen::Settings => self.handle_settings_key(key),
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1) % MENU_ITEMS.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.menu_cursor = self
                    .menu_cursor
                    .checked_sub(1)
                    .unwrap_or(MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => self.activate_menu_item(),
            _ => {}
        }
    }

    fn activate_menu_item(&mut self) {
        match self.menu_cursor {
            0 => {
                self.set_screen(Screen::Market);
                self.set_status("Enter rubles and luna, then press Enter");
            }
            1 => {
                self.set_screen(Screen::Crafting);
                self.set_status("Enter target and holdings, then press Enter");
            }
            2 => self.set_screen(Screen::Entries(Section::Inventory)),
            3 => self.set_screen(Screen::Entries(Section::Cards)),
            4 => {
                self.set_screen(Screen::Settings);
                self.set_status("Settings".to_string());
            }
            _ => self.should_quit = true,
        }
    }

    fn handle_market_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.set_screen(Screen::Menu);
                self.set_status("Returned to main menu");
            }
            KeyCode::Tab | KeyCode::Down => {
                self.market.focus = (self.market.focus + 1) % MARKET_LABELS.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.market.focus = self
                    .market
                    .focus
                    .checked_sub(1)
                    .unwrap_or(MARKET_LABELS.len() - 1);
            }
            KeyCode::Enter => {
                let result = market::quote_from_input(
                    self.market.fields[0].text(),
                    self.market.fields[1].text(),
                );
                match &result {
                    Ok(quote) => {
                        info!(
                            listing_price = quote.listing_price,
                            exchange_rate = quote.exchange_rate,
                            "market quote computed"
                        );
                        self.set_status("Quote updated");
                    }
                    Err(_) => self.set_status("Could not parse input"),
                }
                self.market.quote = Some(result);
            }
            _ => {
                let field = &mut self.market.fields[self.market.focus];
                edit_numeric_field(field, key, true);
            }
        }
    }

    fn handle_crafting_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.set_screen(Screen::Menu);
                self.set_status("Returned to main menu");
            }
            KeyCode::Tab | KeyCode::Down => {
                self.crafting.focus = (self.crafting.focus + 1) % CRAFTING_LABELS.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.crafting.focus = self
                    .crafting
                    .focus
                    .checked_sub(1)
                    .unwrap_or(CRAFTING_LABELS.len() - 1);
            }
            KeyCode::Enter => {
                let f = &self.crafting.fields;
                let result = crafting::plan_from_input(
                    f[0].text(),
                    f[1].text(),
                    f[2].text(),
                    f[3].text(),
                    f[4].text(),
                    f[5].text(),
                );
                match &result {
                    Ok(CraftPlan::Sufficient) => self.set_status("Enough resources"),
                    Ok(CraftPlan::Shortfall { as_t3, .. }) => {
                        self.set_status(format!("Short {as_t3} T3-equivalent"))
                    }
                    Ok(CraftPlan::InvalidTier) => self.set_status("Invalid tier"),
                    Err(_) => self.set_status("Could not parse input"),
                }
                self.crafting.plan = Some(result);
            }
            _ => {
                let field = &mut self.crafting.fields[self.crafting.focus];
                edit_numeric_field(field, key, false);
            }
        }
    }

    fn handle_entries_key(&mut self, section: Section, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.set_screen(Screen::Menu);
                self.set_status("Returned to main menu");
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.entries.is_empty() {
                    self.entry_cursor = (self.entry_cursor + 1).min(self.entries.len() - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.entry_cursor = self.entry_cursor.saturating_sub(1);
            }
            KeyCode::Char('r') => self.refresh_entries(section),
            KeyCode::Char('a') => {
                self.set_screen(Screen::AddEntry(section));
                self.set_status(format!("New {} entry", section.label()));
            }
            _ => {}
        }
    }

    fn handle_add_entry_key(&mut self, section: Section, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.set_screen(Screen::Entries(section));
                self.set_status("Cancelled");
            }
            KeyCode::Enter => {
                let name = self.name_field.text().trim().to_string();
                if name.is_empty() {
                    self.set_status("Name cannot be empty");
                    return;
                }
                self.registry.add(section, &name);
                self.set_screen(Screen::Entries(section));
                self.set_status(format!("Saved {name}"));
            }
            KeyCode::Left => self.name_field.move_cursor(-1),
            KeyCode::Right => self.name_field.move_cursor(1),
            KeyCode::Home => self.name_field.move_home(),
            KeyCode::End => self.name_field.move_end(),
            KeyCode::Backspace => self.name_field.backspace(),
            KeyCode::Delete => self.name_field.delete(),
            KeyCode::Char(ch) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.name_field.insert(ch, MAX_NAME_LEN);
                }
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.set_screen(Screen::Menu);
                self.set_status("Returned to main menu");
            }
            KeyCode::Enter | KeyCode::Char('w') => {
                self.data.reset();
                info!("data file wiped");
                self.set_screen(Screen::Menu);
                self.set_status("All data wiped");
            }
            _ => {}
        }
    }

    // --- rendering ---

    fn draw(&mut self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.size());

        match self.screen {
            Screen::Menu => self.draw_menu(frame, layout[0]),
            Screen::Market => self.draw_market(frame, layout[0]),
            Screen::Crafting => self.draw_crafting(frame, layout[0]),
            Screen::Entries(section) => self.draw_entries(frame, layout[0], section),
            Screen::AddEntry(section) => self.draw_add_entry(frame, layout[0], section),
            Screen::Settings => self.draw_settings(frame, layout[0]),
        }

        let status = Paragraph::new(Line::from(Span::styled(
            self.status.clone(),
            Style::default().fg(self.theme.muted),
        )));
        frame.render_widget(status, layout[1]);
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "R A I D K I T",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, layout[0]);

        let menu_height = (MENU_ITEMS.len() as u16 + 2).min(layout[1].height);
        let menu_area = centered_rect(30.min(layout[1].width.max(1)), menu_height, layout[1]);

        let menu_lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if idx == self.menu_cursor {
                    Line::from(Span::styled(
                        format!("▶ {item}"),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {item}"),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                }
            })
            .collect();

        let menu = Paragraph::new(menu_lines)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .alignment(Alignment::Center);
        frame.render_widget(menu, menu_area);
    }

    fn draw_market(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(block_inner(
                frame,
                area,
                "Black Market · Tab next field · Enter calculate · Esc back",
                self.theme.danger,
            ));

        for (idx, label) in MARKET_LABELS.iter().enumerate() {
            self.render_field(
                frame,
                layout[idx],
                label,
                &self.market.fields[idx],
                self.market.focus == idx,
            );
        }

        let results = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[2]);

        let (listing, rate) = match &self.market.quote {
            None => ("0".to_string(), "0".to_string()),
            Some(Ok(quote)) => (
                format_number(quote.listing_price),
                format_number(quote.exchange_rate),
            ),
            Some(Err(_)) => ("Error".to_string(), "Error".to_string()),
        };
        let value_color = match &self.market.quote {
            Some(Err(_)) => self.theme.danger,
            _ => self.theme.success,
        };

        self.render_result_box(frame, results[0], "Listing Price", &listing, value_color);
        self.render_result_box(frame, results[1], "Exchange Rate", &rate, value_color);
    }

    fn draw_crafting(&self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3); CRAFTING_LABELS.len()];
        constraints.push(Constraint::Length(4));
        constraints.push(Constraint::Min(0));
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(block_inner(
                frame,
                area,
                "Tier Crafting · Tab next field · Enter calculate · Esc back",
                self.theme.accent_alt,
            ));

        for (idx, label) in CRAFTING_LABELS.iter().enumerate() {
            self.render_field(
                frame,
                layout[idx],
                label,
                &self.crafting.fields[idx],
                self.crafting.focus == idx,
            );
        }

        let (lines, color) = match &self.crafting.plan {
            None => (vec!["Enter values above".to_string()], self.theme.muted),
            Some(Ok(CraftPlan::Sufficient)) => {
                (vec!["Enough resources!".to_string()], self.theme.success)
            }
            Some(Ok(CraftPlan::Shortfall { as_t3, t4, t3_rest })) => (
                vec![
                    format!("Need: {as_t3} x T3"),
                    format!("Or: {t4} x T4 + {t3_rest} x T3"),
                ],
                self.theme.warning,
            ),
            Some(Ok(CraftPlan::InvalidTier)) => {
                (vec!["Invalid Tier".to_string()], self.theme.danger)
            }
            Some(Err(_)) => (vec!["Error".to_string()], self.theme.danger),
        };

        let result_lines: Vec<Line> = lines
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(color))))
            .collect();
        let result = Paragraph::new(result_lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Result"));
        frame.render_widget(result, layout[CRAFTING_LABELS.len()]);
    }

    fn draw_entries(&self, frame: &mut Frame, area: Rect, section: Section) {
        let title = match section {
            Section::Inventory => "Inventory · a add · r reload · Esc back",
            Section::Cards => "Cards · a add · r reload · Esc back",
        };
        let inner = block_inner(frame, area, title, self.theme.accent);

        if self.entries.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                "No accounts yet. Press 'a' to add one.",
                Style::default().fg(self.theme.muted),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(placeholder, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|name| ListItem::new(name.clone()))
            .collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        state.select(Some(self.entry_cursor));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn draw_add_entry(&self, frame: &mut Frame, area: Rect, section: Section) {
        let title = format!(
            "New {} entry · Enter save · Esc cancel",
            section.label()
        );
        let inner = block_inner(frame, area, &title, self.theme.accent);
        let field_area = centered_rect(40.min(inner.width.max(1)), 3, inner);
        self.render_field(frame, field_area, "Name", &self.name_field, true);
    }

    fn draw_settings(&self, frame: &mut Frame, area: Rect) {
        let inner = block_inner(frame, area, "Settings · Esc back", self.theme.muted);
        let body = centered_rect(44.min(inner.width.max(1)), 3, inner);
        let wipe = Paragraph::new(Line::from(Span::styled(
            "WIPE DATA · Enter confirm",
            Style::default()
                .fg(self.theme.danger)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(wipe, body);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        field: &TextField,
        focused: bool,
    ) {
        let border = if focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let mut text = field.text().to_string();
        if focused {
            text.push('▏');
        }
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label.to_string()),
        );
        frame.render_widget(widget, area);
    }

    fn render_result_box(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        value: &str,
        color: Color,
    ) {
        let widget = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(widget, area);
    }
}

/// Render the screen's outer block and return its inner area.
fn block_inner(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn edit_numeric_field(field: &mut TextField, key: KeyEvent, allow_fraction: bool) {
    match key.code {
        KeyCode::Left => field.move_cursor(-1),
        KeyCode::Right => field.move_cursor(1),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            let allowed = ch.is_ascii_digit() || ch == '-' || (allow_fraction && ch == '.');
            if allowed {
                field.insert(ch, MAX_FIELD_LEN);
            }
        }
        _ => {}
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Group digits with thousands separators, keeping the sign out front.
fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
