/// Language-neutral prompt shown before any language has been chosen
pub const LANGUAGE_PROMPT: &str = "Выберите язык / Choose language (ru/en):";

/// Identifies a localized message.
///
/// The string names are the ones used by [`crate::i18n::get_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    EnterOriginalWord,
    PlayerPrompt,
    InvalidWord,
    TimeUp,
    PlayAgain,
}

impl MessageKey {
    pub const ALL: [MessageKey; 5] = [
        MessageKey::EnterOriginalWord,
        MessageKey::PlayerPrompt,
        MessageKey::InvalidWord,
        MessageKey::TimeUp,
        MessageKey::PlayAgain,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MessageKey::EnterOriginalWord => "EnterOriginalWord",
            MessageKey::PlayerPrompt => "PlayerPrompt",
            MessageKey::InvalidWord => "InvalidWord",
            MessageKey::TimeUp => "TimeUp",
            MessageKey::PlayAgain => "PlayAgain",
        }
    }

    pub fn from_name(name: &str) -> Option<MessageKey> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// All localized user-facing strings for a language
///
/// Templates may carry `{player}` and `{time}` placeholders; callers substitute them.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Prompt for the word every later word is built from
    pub enter_original_word: &'static str,

    /// Per-turn prompt
    /// Placeholders: {player}, {time}
    pub player_prompt: &'static str,

    /// Shown when a turn word is rejected
    pub invalid_word: &'static str,

    /// Announces the losing player
    /// Placeholders: {player}
    pub time_up: &'static str,

    /// Asks whether to start another game
    pub play_again: &'static str,
}

impl LanguageStrings {
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::EnterOriginalWord => self.enter_original_word,
            MessageKey::PlayerPrompt => self.player_prompt,
            MessageKey::InvalidWord => self.invalid_word,
            MessageKey::TimeUp => self.time_up,
            MessageKey::PlayAgain => self.play_again,
        }
    }
}

// ==================== Russian Strings ====================

pub const RUSSIAN_STRINGS: LanguageStrings = LanguageStrings {
    enter_original_word: "Введите исходное слово (8-30 символов):",
    player_prompt: "Игрок {player}, введите слово (осталось {time} секунд):",
    invalid_word: "Неверное слово. Повторите попытку.",
    time_up: "Время вышло! Игрок {player} проиграл.",
    play_again: "Хотите сыграть еще раз? (да/нет)",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    enter_original_word: "Enter the original word (8-30 characters):",
    player_prompt: "Player {player}, enter a word ({time} seconds left):",
    invalid_word: "Invalid word. Try again.",
    time_up: "Time's up! Player {player} loses.",
    play_again: "Do you want to play again? (yes/no)",
};
