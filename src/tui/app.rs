//! Main TUI application state and event loop

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal};
use tokio::sync::oneshot;

use crate::error::GatewayError;
use crate::gateway::Generator;
use crate::model::{Budget, Interest, TripItinerary, TripRequest, QUICK_PICKS, TRAVELER_GROUPS};
use crate::wizard::{Effect, FieldUpdate, StepOutcome, Wizard, WizardEvent, WizardState};

use super::views::{
    draw_form, draw_hero, draw_loading, draw_result, FormFocus, ResultViewState,
    LOADING_MESSAGES, SPINNER_FRAMES,
};
use super::widgets::{draw_error_modal, draw_status_bar, COLOR_BG};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SPINNER_TICK: Duration = Duration::from_millis(100);
const MESSAGE_ROTATION: Duration = Duration::from_millis(1500);
const PAGE_JUMP: i32 = 10;

/// Configuration for launching the TUI
pub struct TuiConfig {
    /// Gateway used for the single generation call per submission.
    pub generator: Arc<dyn Generator>,
}

/// Main application state
struct App {
    wizard: Wizard,
    generator: Arc<dyn Generator>,
    runtime: tokio::runtime::Handle,

    /// Receiver for the in-flight generation, if any. At most one
    /// exists at a time; the wizard refuses re-entry into Loading.
    pending: Option<oneshot::Receiver<Result<TripItinerary, GatewayError>>>,

    /// Pending one-shot failure notice, drawn as a blocking modal.
    error_notice: Option<String>,

    form_focus: FormFocus,
    quick_pick: usize,
    result_state: ResultViewState,

    spinner_frame: usize,
    message_index: usize,
    last_spin: Instant,
    last_rotation: Instant,
}

impl App {
    fn new(config: TuiConfig, runtime: tokio::runtime::Handle) -> Self {
        Self {
            wizard: Wizard::new(),
            generator: config.generator,
            runtime,
            pending: None,
            error_notice: None,
            form_focus: FormFocus::Primary,
            quick_pick: 0,
            result_state: ResultViewState::default(),
            spinner_frame: 0,
            message_index: 0,
            last_spin: Instant::now(),
            last_rotation: Instant::now(),
        }
    }

    /// Spawn the generation call on the runtime and keep the receiver.
    /// Quitting while this is in flight abandons the task; its result
    /// is dropped with the channel (no cancellation by contract).
    fn dispatch_generation(&mut self, request: TripRequest) {
        let (tx, rx) = oneshot::channel();
        let generator = Arc::clone(&self.generator);
        self.runtime.spawn(async move {
            let result = generator.generate(&request).await;
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        self.spinner_frame = 0;
        self.message_index = 0;
        self.last_spin = Instant::now();
        self.last_rotation = Instant::now();
    }

    /// Check the in-flight generation without blocking the event loop.
    fn poll_generation(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => Err(GatewayError::EmptyResponse),
        };
        self.pending = None;

        match outcome {
            Ok(itinerary) => {
                self.wizard.handle(WizardEvent::Generated(itinerary));
                self.result_state = ResultViewState::default();
            }
            Err(err) => {
                self.wizard.handle(WizardEvent::Failed(err.to_string()));
                self.error_notice = self.wizard.take_notice();
            }
        }
    }

    fn tick_loading(&mut self) {
        if self.wizard.state() != WizardState::Loading {
            return;
        }
        if self.last_spin.elapsed() >= SPINNER_TICK {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            self.last_spin = Instant::now();
        }
        if self.last_rotation.elapsed() >= MESSAGE_ROTATION {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.last_rotation = Instant::now();
        }
    }

    /// Handle a key event. Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // The failure modal is blocking: any key dismisses it and
        // control returns to the form.
        if self.error_notice.is_some() {
            self.error_notice = None;
            return false;
        }

        match self.wizard.state() {
            WizardState::Hero => self.handle_hero_key(key),
            WizardState::Form => self.handle_form_key(key),
            WizardState::Loading => matches!(key.code, KeyCode::Char('q')),
            WizardState::Result => self.handle_result_key(key),
        }
    }

    fn handle_hero_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Enter => {
                self.wizard.handle(WizardEvent::Start);
                self.form_focus = FormFocus::Primary;
                self.quick_pick = 0;
            }
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                // Sub-wizard-level back: exits to Hero from any step
                self.wizard.handle(WizardEvent::Back);
                return false;
            }
            KeyCode::Enter => {
                match self.wizard.form_mut().next() {
                    StepOutcome::Blocked => {}
                    StepOutcome::Advanced => self.form_focus = FormFocus::Primary,
                    StepOutcome::Submitted(request) => {
                        if let Some(Effect::Generate(request)) =
                            self.wizard.handle(WizardEvent::Submit(request))
                        {
                            self.dispatch_generation(request);
                        }
                    }
                }
                return false;
            }
            _ => {}
        }

        match self.wizard.form().step {
            1 => self.handle_destination_key(key),
            _ => self.handle_choice_key(key),
        }
        false
    }

    fn handle_destination_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                let pick = QUICK_PICKS[self.quick_pick % QUICK_PICKS.len()];
                self.quick_pick += 1;
                self.wizard
                    .form_mut()
                    .apply(FieldUpdate::Destination(pick.to_string()));
            }
            KeyCode::Backspace => {
                let mut destination = self.wizard.form().request.destination.clone();
                destination.pop();
                self.wizard
                    .form_mut()
                    .apply(FieldUpdate::Destination(destination));
            }
            KeyCode::Char(c) => {
                let mut destination = self.wizard.form().request.destination.clone();
                destination.push(c);
                self.wizard
                    .form_mut()
                    .apply(FieldUpdate::Destination(destination));
            }
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.form_focus = self.form_focus.toggle();
                return;
            }
            _ => {}
        }

        let forward = matches!(
            key.code,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+')
        );
        let backward = matches!(
            key.code,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-')
        );
        if !forward && !backward {
            return;
        }
        let delta: i32 = if forward { 1 } else { -1 };

        let step = self.wizard.form().step;
        let request = self.wizard.form().request.clone();
        let update = match (step, self.form_focus) {
            (2, FormFocus::Primary) => {
                FieldUpdate::Duration(request.duration.saturating_add_signed(delta as i8))
            }
            (2, FormFocus::Secondary) => {
                let current = TRAVELER_GROUPS
                    .iter()
                    .position(|g| *g == request.travelers)
                    .unwrap_or(0);
                let next = cycle(current, TRAVELER_GROUPS.len(), delta);
                FieldUpdate::Travelers(TRAVELER_GROUPS[next].to_string())
            }
            (_, FormFocus::Primary) => {
                let current = Budget::ALL
                    .iter()
                    .position(|b| *b == request.budget)
                    .unwrap_or(0);
                FieldUpdate::Budget(Budget::ALL[cycle(current, Budget::ALL.len(), delta)])
            }
            (_, FormFocus::Secondary) => {
                let current = Interest::ALL
                    .iter()
                    .position(|i| *i == request.interest)
                    .unwrap_or(0);
                FieldUpdate::Interest(Interest::ALL[cycle(current, Interest::ALL.len(), delta)])
            }
        };
        self.wizard.form_mut().apply(update);
    }

    fn handle_result_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') | KeyCode::Enter => {
                self.wizard.handle(WizardEvent::Reset);
            }
            KeyCode::Down | KeyCode::Char('j') => self.result_state.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.result_state.scroll_by(-1),
            KeyCode::PageDown => self.result_state.scroll_by(PAGE_JUMP),
            KeyCode::PageUp => self.result_state.scroll_by(-PAGE_JUMP),
            KeyCode::Char('g') => self.result_state.jump_to_top(),
            KeyCode::Char('G') => self.result_state.jump_to_bottom(),
            _ => {}
        }
        false
    }

    fn state_line(&self) -> String {
        match self.wizard.state() {
            WizardState::Hero => "Welcome".to_string(),
            WizardState::Form => {
                let request = &self.wizard.form().request;
                format!(
                    "Step {}/3 · {} · {} days · {} · {} · {}",
                    self.wizard.form().step,
                    if request.destination.is_empty() {
                        "(no destination)"
                    } else {
                        &request.destination
                    },
                    request.duration,
                    request.budget.label(),
                    request.interest.label(),
                    request.travelers
                )
            }
            WizardState::Loading => "Generating itinerary...".to_string(),
            WizardState::Result => {
                let days = self
                    .wizard
                    .itinerary()
                    .map(|i| i.days.len())
                    .unwrap_or(0);
                format!("Itinerary ready · {} days", days)
            }
        }
    }

    fn help_line(&self) -> &'static str {
        match self.wizard.state() {
            WizardState::Hero => "Keys: Enter start · q quit",
            WizardState::Form => match self.wizard.form().step {
                1 => "Keys: type destination · Tab quick picks · Enter next · Esc home",
                _ => "Keys: Tab field · ←/→ choose · Enter next · Esc home",
            },
            WizardState::Loading => "Generating... q quits and abandons the request",
            WizardState::Result => "Keys: j/k scroll · g/G top/bottom · r plan another · q quit",
        }
    }
}

fn cycle(current: usize, len: usize, delta: i32) -> usize {
    let len = len as i32;
    ((current as i32 + delta).rem_euclid(len)) as usize
}

/// Run the TUI with the given configuration. Must be called from within
/// a tokio runtime; generation calls are spawned onto it.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    let runtime = tokio::runtime::Handle::current();
    let mut app = App::new(config, runtime);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    cleanup_terminal(terminal)?;
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_generation();
        app.tick_loading();

        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn draw_ui(frame: &mut Frame<'_>, app: &mut App) {
    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BG)),
        frame.size(),
    );

    // Layout: main content + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(10), Constraint::Length(4)].as_ref())
        .split(frame.size());

    match app.wizard.state() {
        WizardState::Hero => draw_hero(frame, chunks[0]),
        WizardState::Form => draw_form(frame, chunks[0], app.wizard.form(), app.form_focus),
        WizardState::Loading => draw_loading(
            frame,
            chunks[0],
            app.spinner_frame,
            LOADING_MESSAGES[app.message_index],
        ),
        WizardState::Result => {
            if let Some(itinerary) = app.wizard.itinerary() {
                draw_result(frame, chunks[0], itinerary, &mut app.result_state);
            }
        }
    }

    draw_status_bar(frame, chunks[1], &app.state_line(), app.help_line());

    if let Some(notice) = &app.error_notice {
        draw_error_modal(frame, frame.size(), notice);
    }
}

fn cleanup_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    struct StubGenerator {
        outcome: fn() -> Result<TripItinerary, GatewayError>,
    }

    #[async_trait]
    impl Generator for StubGenerator {
        async fn generate(&self, _request: &TripRequest) -> Result<TripItinerary, GatewayError> {
            (self.outcome)()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn test_app(outcome: fn() -> Result<TripItinerary, GatewayError>) -> App {
        let config = TuiConfig {
            generator: Arc::new(StubGenerator { outcome }),
        };
        App::new(config, tokio::runtime::Handle::current())
    }

    fn sample_itinerary() -> TripItinerary {
        TripItinerary {
            trip_title: "Goa Unwound".to_string(),
            summary: "Slow days".to_string(),
            days: vec![],
            packing_list: vec![],
            cultural_tips: vec![],
            local_food_must_try: vec![],
        }
    }

    fn complete_form(app: &mut App) {
        app.handle_key(key(KeyCode::Enter)); // Hero -> Form
        for c in "Goa".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter)); // step 2
        app.handle_key(key(KeyCode::Enter)); // step 3
        app.handle_key(key(KeyCode::Enter)); // submit
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_submission_reaches_result() {
        let mut app = test_app(|| Ok(sample_itinerary()));
        complete_form(&mut app);
        assert_eq!(app.wizard.state(), WizardState::Loading);
        assert!(app.pending.is_some());

        // Wait for the spawned call to deliver, then poll
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.poll_generation();
        assert_eq!(app.wizard.state(), WizardState::Result);
        assert!(app.error_notice.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_failure_returns_to_form_with_one_notice() {
        let mut app = test_app(|| Err(GatewayError::EmptyResponse));
        complete_form(&mut app);

        tokio::time::sleep(Duration::from_millis(50)).await;
        app.poll_generation();
        assert_eq!(app.wizard.state(), WizardState::Form);
        assert!(app.error_notice.is_some());
        // Request preserved for manual retry
        assert_eq!(app.wizard.form().request.destination, "Goa");

        // Any key dismisses the modal without reaching the form
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.error_notice.is_none());
        assert_eq!(app.wizard.form().request.destination, "Goa");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_step_one_gates_on_destination() {
        let mut app = test_app(|| Ok(sample_itinerary()));
        app.handle_key(key(KeyCode::Enter)); // Hero -> Form
        app.handle_key(key(KeyCode::Enter)); // blocked: empty destination
        assert_eq!(app.wizard.form().step, 1);

        app.handle_key(key(KeyCode::Tab)); // quick pick
        assert_eq!(app.wizard.form().request.destination, "Ladakh");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.wizard.form().step, 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_quick_picks_cycle() {
        let mut app = test_app(|| Ok(sample_itinerary()));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.wizard.form().request.destination, "Varanasi");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_choice_keys_edit_request() {
        let mut app = test_app(|| Ok(sample_itinerary()));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('G')));
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter)); // step 2

        app.handle_key(key(KeyCode::Right)); // duration 3 -> 4
        assert_eq!(app.wizard.form().request.duration, 4);
        app.handle_key(key(KeyCode::Tab)); // focus travelers
        app.handle_key(key(KeyCode::Right)); // Couple -> Family
        assert_eq!(app.wizard.form().request.travelers, "Family");

        app.handle_key(key(KeyCode::Enter)); // step 3
        app.handle_key(key(KeyCode::Right)); // Mid-range -> Luxury
        assert_eq!(app.wizard.form().request.budget, Budget::Luxury);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_esc_returns_to_hero() {
        let mut app = test_app(|| Ok(sample_itinerary()));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('G')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.wizard.state(), WizardState::Hero);
    }
}
