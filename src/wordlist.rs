/// Number of words in the vocabulary, one per byte value
pub const WORD_COUNT: usize = 256;

/// Length of a full byteword
pub const WORD_LENGTH: usize = 4;

/// Length of a minimal code (first and last letter)
pub const MINIMAL_WORD_LENGTH: usize = 2;

/// The byteword vocabulary. Position is the byte value, so this order is
/// the wire format. Every word has a distinct (first, last) letter pair.
pub const WORDS: [&str; WORD_COUNT] = [
    "able", "acid", "also", "apex", "aqua", "arch", "atom", "aunt",
    "away", "axis", "back", "bald", "barn", "belt", "beta", "bias",
    "blue", "body", "brag", "brew", "bulb", "buzz", "calm", "cash",
    "cats", "chef", "city", "claw", "code", "cola", "cook", "cost",
    "crux", "curl", "cusp", "cyan", "dark", "data", "days", "deli",
    "dice", "diet", "door", "down", "draw", "drop", "drum", "dull",
    "duty", "each", "easy", "echo", "edge", "epic", "even", "exam",
    "exit", "eyes", "fact", "fair", "fern", "figs", "film", "fish",
    "fizz", "flap", "flew", "flux", "foxy", "free", "frog", "fuel",
    "fund", "gala", "game", "gear", "gems", "gift", "girl", "glow",
    "good", "gray", "grim", "guru", "gush", "gyro", "half", "hang",
    "hard", "hawk", "heat", "help", "high", "hill", "holy", "hope",
    "horn", "huts", "iced", "idea", "idle", "inch", "inky", "into",
    "iris", "iron", "item", "jade", "jazz", "join", "jolt", "jowl",
    "judo", "jugs", "jump", "junk", "jury", "keep", "keno", "kept",
    "keys", "kick", "kiln", "king", "kite", "kiwi", "knob", "lamb",
    "lava", "lazy", "leaf", "legs", "liar", "limp", "lion", "list",
    "logo", "loud", "love", "luau", "luck", "lung", "main", "many",
    "math", "maze", "memo", "menu", "meow", "mild", "mint", "miss",
    "monk", "nail", "navy", "need", "news", "next", "noon", "note",
    "numb", "obey", "oboe", "omit", "onyx", "open", "oval", "owls",
    "paid", "part", "peck", "play", "plus", "poem", "pool", "pose",
    "puff", "puma", "purr", "quad", "quiz", "race", "ramp", "real",
    "redo", "rich", "road", "rock", "roof", "ruby", "ruin", "runs",
    "rust", "safe", "saga", "scar", "sets", "silk", "skew", "slot",
    "soap", "solo", "song", "stub", "surf", "swan", "taco", "task",
    "taxi", "tent", "tied", "time", "tiny", "toil", "tomb", "toys",
    "trip", "tuna", "twin", "ugly", "undo", "unit", "urge", "user",
    "vast", "very", "veto", "vial", "vibe", "view", "visa", "void",
    "vows", "wall", "wand", "warm", "wasp", "wave", "waxy", "webs",
    "what", "when", "whiz", "wolf", "work", "yank", "yawn", "yell",
    "yoga", "yurt", "zaps", "zero", "zest", "zinc", "zone", "zoom",
];

/// Full 4-letter word for a byte value
pub fn word_at(byte: u8) -> &'static str {
    WORDS[byte as usize]
}

/// 2-letter minimal code for a byte value: first and last letter of its word
pub fn minimal_word_at(byte: u8) -> &'static str {
    // codes are copied from ASCII words
    std::str::from_utf8(&MINIMAL_CODES[byte as usize]).unwrap_or_default()
}

/// First and last letters of a byte's word, as ASCII bytes
pub(crate) fn end_letters(byte: u8) -> (u8, u8) {
    let word = word_at(byte).as_bytes();
    (word[0], word[WORD_LENGTH - 1])
}

/// Middle two letters of a byte's word, as ASCII bytes
pub(crate) fn middle_letters(byte: u8) -> (u8, u8) {
    let word = word_at(byte).as_bytes();
    (word[1], word[2])
}

static MINIMAL_CODES: [[u8; MINIMAL_WORD_LENGTH]; WORD_COUNT] = build_minimal_codes();

const fn build_minimal_codes() -> [[u8; MINIMAL_WORD_LENGTH]; WORD_COUNT] {
    let mut codes = [[0u8; MINIMAL_WORD_LENGTH]; WORD_COUNT];
    let mut i = 0;
    while i < WORD_COUNT {
        let word = WORDS[i].as_bytes();
        codes[i] = [word[0], word[WORD_LENGTH - 1]];
        i += 1;
    }
    codes
}
