//! # MindMate Command Dispatch
//!
//! File: cli/src/core/dispatch.rs
//!
//! ## Overview
//!
//! Reserved inputs that both drivers intercept before a message is classified.
//! Input is trimmed and lowercased before matching.
//!
//! | Input                                              | Command       |
//! |----------------------------------------------------|---------------|
//! | `bye`, `quit`, `exit`                              | `Exit`        |
//! | `breath`, `breathe`                                | `Breathe`     |
//! | `journal`                                          | `Journal`     |
//! | starts with `hi`, `hello`, `hey`, `good morning`, `good night` | `Greeting` |
//!
//! Greetings are matched by prefix, so `"hello there"` is a greeting. Anything
//! else returns `None` and goes on to classification.
//!

pub const FAREWELL: &str = "Take care. I’m here whenever you need me 🤍";

pub const BREATHING_EXERCISE: &str = "💨 Let's breathe together:\n\n\
     Inhale slowly through your nose for 4 seconds...\n\
     Hold for 4 seconds...\n\
     Exhale gently through your mouth for 6 seconds...\n\
     Repeat this 3 times.\n\n\
     It's okay if your mind wanders — just return to the breath.";

pub const JOURNAL_PROMPT: &str = "📝 Let's reflect together.\n\n\
     1) What emotion feels strongest inside you right now?\n\
     2) What do you think triggered this emotion?\n\
     3) If your closest friend felt this way, what would you tell them?\n\n\
     You can write the answers in your notebook or speak them out loud.";

const EXIT_WORDS: [&str; 3] = ["bye", "quit", "exit"];
const BREATH_WORDS: [&str; 2] = ["breath", "breathe"];
const JOURNAL_WORDS: [&str; 1] = ["journal"];

/// Checked in order; the first matching prefix wins.
const GREETINGS: [(&str, &str); 5] = [
    (
        "hi",
        "Hi there! I'm really glad you're here. How are you feeling today?",
    ),
    ("hello", "Hello! I'm here with you. What’s on your mind?"),
    ("hey", "Hey! How are you doing right now?"),
    (
        "good morning",
        "Good morning ☀️ I hope today is gentle for you.",
    ),
    (
        "good night",
        "Good night 🌙 Rest is important, you deserve it.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Breathe,
    Journal,
    Greeting(&'static str),
}

impl Command {
    /// Text shown to the user when this command runs.
    pub fn reply(&self) -> &'static str {
        match self {
            Command::Exit => FAREWELL,
            Command::Breathe => BREATHING_EXERCISE,
            Command::Journal => JOURNAL_PROMPT,
            Command::Greeting(reply) => *reply,
        }
    }
}

/// Trims and lowercases user input the way every matcher expects it.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Maps raw user input to a reserved command, if it is one.
pub fn dispatch(input: &str) -> Option<Command> {
    let msg = normalize(input);
    let msg = msg.as_str();

    if EXIT_WORDS.contains(&msg) {
        return Some(Command::Exit);
    }
    if BREATH_WORDS.contains(&msg) {
        return Some(Command::Breathe);
    }
    if JOURNAL_WORDS.contains(&msg) {
        return Some(Command::Journal);
    }
    GREETINGS
        .iter()
        .find(|(greeting, _)| msg.starts_with(greeting))
        .map(|(_, reply)| Command::Greeting(*reply))
}
