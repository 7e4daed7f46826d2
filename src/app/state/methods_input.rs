use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyCommand {
    Quit,
    OpenSearch,
    Refresh,
    ShowToday,
    ShowTomorrow,
    ShowTenDays,
    CyclePeriod,
}

impl AppState {
    pub(crate) fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_press(key, tx);
        }
    }

    pub(crate) fn handle_key_press(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        if matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.mode = AppMode::Quit;
            return;
        }
        if self.search.open {
            self.handle_search_key(key, tx);
            return;
        }
        if let Some(command) = command_from_key(key.code) {
            self.execute_key_command(command, tx);
        }
    }

    fn execute_key_command(&mut self, command: KeyCommand, tx: &mpsc::Sender<AppEvent>) {
        match command {
            KeyCommand::Quit => self.mode = AppMode::Quit,
            KeyCommand::OpenSearch => self.open_search(),
            KeyCommand::Refresh => self.dispatch(Intent::Refresh, tx),
            KeyCommand::ShowToday => self.dispatch(Intent::SelectPeriod(Period::Today), tx),
            KeyCommand::ShowTomorrow => self.dispatch(Intent::SelectPeriod(Period::Tomorrow), tx),
            KeyCommand::ShowTenDays => self.dispatch(Intent::SelectPeriod(Period::TenDays), tx),
            KeyCommand::CyclePeriod => self.dispatch(Intent::SelectPeriod(self.period.next()), tx),
        }
    }

    pub(crate) fn open_search(&mut self) {
        self.search = SearchState {
            open: true,
            ..SearchState::default()
        };
    }

    pub(crate) fn close_search(&mut self) {
        self.debouncer.cancel();
        self.search = SearchState::default();
    }

    fn handle_search_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        match key.code {
            KeyCode::Esc => self.close_search(),
            KeyCode::Enter => self.submit_search(tx),
            KeyCode::Up => self.move_suggestion(-1),
            KeyCode::Down => self.move_suggestion(1),
            KeyCode::Backspace => {
                self.search.query.pop();
                self.on_query_changed(tx);
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.query.push(ch);
                self.on_query_changed(tx);
            }
            _ => {}
        }
    }

    /// Picks the highlighted suggestion, or falls back to a direct search.
    pub(crate) fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let intent = match self.search.selected_place() {
            Some(place) => Intent::SelectPlace(place.clone()),
            None => Intent::Search(self.search.trimmed_query().to_string()),
        };
        self.close_search();
        self.dispatch(intent, tx);
    }

    pub(crate) fn on_query_changed(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let query = self.search.trimmed_query().to_string();
        if query.chars().count() < MIN_SUGGEST_CHARS {
            self.debouncer.cancel();
            self.show_suggestions(Vec::new());
            return;
        }
        if let Some(cached) = self.suggestions.lookup(&query) {
            let places = cached.to_vec();
            self.debouncer.cancel();
            self.show_suggestions(places);
            return;
        }
        self.debouncer.schedule(tx.clone(), AppEvent::SuggestQuery(query));
    }

    pub(crate) fn move_suggestion(&mut self, delta: isize) {
        let len = self.search.suggestions.len();
        if len == 0 {
            self.search.selected = None;
            return;
        }
        let next = match self.search.selected {
            None if delta > 0 => 0,
            None => len - 1,
            Some(idx) => idx.saturating_add_signed(delta).min(len - 1),
        };
        self.search.selected = Some(next);
    }
}

fn command_from_key(code: KeyCode) -> Option<KeyCommand> {
    const KEY_COMMANDS: [(char, KeyCommand); 7] = [
        ('q', KeyCommand::Quit),
        ('/', KeyCommand::OpenSearch),
        ('s', KeyCommand::OpenSearch),
        ('r', KeyCommand::Refresh),
        ('1', KeyCommand::ShowToday),
        ('2', KeyCommand::ShowTomorrow),
        ('3', KeyCommand::ShowTenDays),
    ];

    match code {
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Tab => Some(KeyCommand::CyclePeriod),
        KeyCode::Char(ch) => KEY_COMMANDS
            .iter()
            .find_map(|(target, command)| (*target == ch.to_ascii_lowercase()).then_some(*command)),
        _ => None,
    }
}
