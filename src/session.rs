//! Game session: language selection, the turn loop, the loser announcement and
//! the play-again prompt, driven as an explicit phase machine.

use crate::config::Config;
use crate::console::Console;
use crate::i18n::{Language, MessageKey, LANGUAGE_PROMPT};
use crate::timer::{TurnClock, TurnTimer};
use crate::validation::{
    is_valid_restart_response, is_valid_turn, validate_original_word, RestartAnswer,
};
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("failed to write to the console: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Words and turn order for one game.
///
/// `used_words` starts with the original word, which is exempt from the subset
/// rule; every later entry passed [`is_valid_turn`] when it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    original_word: String,
    used_words: Vec<String>,
    current_player: Player,
}

impl SessionState {
    pub fn new(original_word: String) -> Self {
        Self {
            used_words: vec![original_word.clone()],
            original_word,
            current_player: Player::One,
        }
    }

    pub fn original_word(&self) -> &str {
        &self.original_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Record `word` for the current player and pass the turn.
    ///
    /// Returns `false` and leaves the state untouched if the word is not a valid turn.
    pub fn try_play(&mut self, word: &str) -> bool {
        if !is_valid_turn(word, &self.original_word, &self.used_words) {
            return false;
        }
        self.used_words.push(word.to_string());
        self.current_player = self.current_player.other();
        true
    }
}

/// A game in progress: its words plus the clock and the task ticking it.
struct Round {
    language: Language,
    state: SessionState,
    clock: Arc<TurnClock>,
    timer: TurnTimer,
}

enum GamePhase {
    SelectingLanguage,
    EnteringOriginalWord(Language),
    Playing(Round),
    TimeExpired(Round),
    PromptingRestart(Language),
    Terminated,
}

impl GamePhase {
    fn name(&self) -> &'static str {
        match self {
            GamePhase::SelectingLanguage => "selecting_language",
            GamePhase::EnteringOriginalWord(_) => "entering_original_word",
            GamePhase::Playing(_) => "playing",
            GamePhase::TimeExpired(_) => "time_expired",
            GamePhase::PromptingRestart(_) => "prompting_restart",
            GamePhase::Terminated => "terminated",
        }
    }
}

pub struct GameSession<W: Write> {
    console: Console<W>,
    config: Config,
}

impl<W: Write> GameSession<W> {
    pub fn new(console: Console<W>, config: Config) -> Self {
        Self { console, config }
    }

    /// Play games until someone declines a rematch.
    ///
    /// Returns `Err(GameError::InputClosed)` if input ends first, whatever the phase.
    pub async fn run(&mut self) -> Result<(), GameError> {
        let mut phase = GamePhase::SelectingLanguage;

        loop {
            debug!(phase = phase.name(), "Entering phase");

            phase = match phase {
                GamePhase::SelectingLanguage => {
                    GamePhase::EnteringOriginalWord(self.select_language().await?)
                }
                GamePhase::EnteringOriginalWord(language) => {
                    GamePhase::Playing(self.start_round(language).await?)
                }
                GamePhase::Playing(mut round) => {
                    self.play(&mut round).await?;
                    GamePhase::TimeExpired(round)
                }
                GamePhase::TimeExpired(round) => {
                    let language = round.language;
                    self.announce_loser(round)?;
                    GamePhase::PromptingRestart(language)
                }
                GamePhase::PromptingRestart(language) => {
                    match self.prompt_restart(language).await? {
                        RestartAnswer::Yes => GamePhase::EnteringOriginalWord(language),
                        RestartAnswer::No => GamePhase::Terminated,
                    }
                }
                GamePhase::Terminated => return Ok(()),
            };
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    async fn select_language(&mut self) -> Result<Language, GameError> {
        loop {
            self.console.say(LANGUAGE_PROMPT)?;
            let code = self.console.read_line().await?;
            match Language::from_code(&code) {
                Ok(language) => {
                    info!(
                        "Language selected: {} ({})",
                        language.name(),
                        language.native_name()
                    );
                    return Ok(language);
                }
                Err(e) => debug!("Rejected language choice: {}", e),
            }
        }
    }

    async fn start_round(&mut self, language: Language) -> Result<Round, GameError> {
        let original_word = loop {
            self.console
                .say(language.message(MessageKey::EnterOriginalWord))?;
            let word = self.console.read_line().await?;
            if validate_original_word(&word) {
                break word;
            }
            debug!("Rejected original word: {:?}", word);
        };

        let clock = Arc::new(TurnClock::new(self.config.turn_seconds));
        info!(
            "Starting game with a {}-letter original word, {}s per turn",
            original_word.chars().count(),
            clock.budget()
        );

        let timer = TurnTimer::start(Arc::clone(&clock), self.config.tick_interval);

        Ok(Round {
            language,
            state: SessionState::new(original_word),
            clock,
            timer,
        })
    }

    /// Turn loop. Returns once the clock has run out, with every line typed
    /// up to that moment thrown away.
    async fn play(&mut self, round: &mut Round) -> Result<(), GameError> {
        let strings = round.language.strings();

        while !round.clock.is_time_up() {
            let prompt = strings
                .player_prompt
                .replace("{player}", &round.state.current_player().to_string())
                .replace("{time}", &round.clock.time_left().to_string());
            self.console.say(&prompt)?;

            let input = tokio::select! {
                biased;
                _ = round.clock.expired() => break,
                line = self.console.read_line() => line?,
            };

            // Read raced the final tick: the word is too late, valid or not
            if round.clock.is_time_up() {
                debug!("Discarding input read after time ran out: {:?}", input);
                break;
            }

            let player = round.state.current_player();
            if round.state.try_play(&input) {
                round.clock.reset();
                debug!("Player {} played {:?}", player, input);
            } else {
                debug!("Player {} tried invalid word {:?}", player, input);
                self.console.say(strings.invalid_word)?;
            }
        }

        // Turn words still queued at expiry must not answer the play-again prompt
        let dropped = self.console.discard_pending();
        if dropped > 0 {
            debug!("Discarded {} line(s) typed as time ran out", dropped);
        }

        Ok(())
    }

    fn announce_loser(&mut self, round: Round) -> Result<(), GameError> {
        if !round.timer.is_finished() {
            debug!("Timer still running at time-up, stopping it");
        }
        round.timer.stop();

        let loser = round.state.current_player();
        info!(
            "Time is up, player {} loses after {} words",
            loser,
            round.state.used_words().len() - 1
        );

        let message = round
            .language
            .message(MessageKey::TimeUp)
            .replace("{player}", &loser.to_string());
        self.console.say(&message)
    }

    async fn prompt_restart(&mut self, language: Language) -> Result<RestartAnswer, GameError> {
        loop {
            self.console.say(language.message(MessageKey::PlayAgain))?;
            let response = self.console.read_line().await?;
            if !is_valid_restart_response(&response) {
                debug!("Rejected restart answer: {:?}", response);
                continue;
            }
            if let Some(answer) = RestartAnswer::parse(&response) {
                debug!("Restart answer: {:?}", answer);
                return Ok(answer);
            }
        }
    }
}
