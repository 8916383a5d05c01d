//! Built-in content tables.

/// Emoji shown in identical-symbol pairs.
pub const SYMBOLS: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🦁", "🐯", "🐸", "🤖", "👾", "👽", "👻",
    "🧠", "👑", "🧸", "🎮", "🎯", "🎨", "🧩", "🎭",
];

/// An emoji and its English name.
#[derive(Clone, Copy, Debug)]
pub struct EmojiName {
    pub emoji: &'static str,
    pub name: &'static str,
}

pub const EMOJI_NAMES: &[EmojiName] = &[
    EmojiName { emoji: "🍎", name: "Apple" },
    EmojiName { emoji: "🚗", name: "Car" },
    EmojiName { emoji: "🐘", name: "Elephant" },
    EmojiName { emoji: "🏠", name: "House" },
    EmojiName { emoji: "🐵", name: "Monkey" },
    EmojiName { emoji: "🌧️", name: "Rain" },
    EmojiName { emoji: "⭐", name: "Star" },
    EmojiName { emoji: "🌞", name: "Sun" },
    EmojiName { emoji: "🐅", name: "Tiger" },
    EmojiName { emoji: "🌊", name: "Water" },
    EmojiName { emoji: "🌲", name: "Tree" },
    EmojiName { emoji: "📱", name: "Phone" },
];

/// An emoji with two accepted names.
#[derive(Clone, Copy, Debug)]
pub struct MultiName {
    pub emoji: &'static str,
    pub names: [&'static str; 2],
}

pub const MULTI_NAMES: &[MultiName] = &[
    MultiName { emoji: "🐕", names: ["Dog", "Puppy"] },
    MultiName { emoji: "🏠", names: ["House", "Home"] },
    MultiName { emoji: "👕", names: ["Shirt", "Tee"] },
    MultiName { emoji: "🚗", names: ["Car", "Auto"] },
    MultiName { emoji: "👶", names: ["Baby", "Infant"] },
    MultiName { emoji: "🍔", names: ["Burger", "Hamburger"] },
    MultiName { emoji: "📱", names: ["Phone", "Mobile"] },
    MultiName { emoji: "🛌", names: ["Bed", "Sleep"] },
    MultiName { emoji: "🚲", names: ["Bicycle", "Bike"] },
    MultiName { emoji: "🧑‍⚕️", names: ["Doctor", "Physician"] },
    MultiName { emoji: "🏃", names: ["Run", "Sprint"] },
    MultiName { emoji: "📚", names: ["Books", "Library"] },
];

/// A vocabulary word with its meaning and a category.
#[derive(Clone, Copy, Debug)]
pub struct Word {
    pub word: &'static str,
    pub meaning: &'static str,
    pub category: &'static str,
}

pub const WORDS: &[Word] = &[
    Word { word: "Sun", meaning: "Star at the centre of our sky", category: "Nature" },
    Word { word: "Sea", meaning: "Large body of salt water", category: "Nature" },
    Word { word: "Sky", meaning: "Space above the earth", category: "Nature" },
    Word { word: "Cat", meaning: "Small furry pet that purrs", category: "Animals" },
    Word { word: "Dog", meaning: "Loyal pet that barks", category: "Animals" },
    Word { word: "Fish", meaning: "Animal that lives in water", category: "Animals" },
    Word { word: "Run", meaning: "Move fast on foot", category: "Actions" },
    Word { word: "Jump", meaning: "Push off the ground", category: "Actions" },
    Word { word: "Read", meaning: "Look at written words", category: "Actions" },
    Word { word: "Hat", meaning: "Worn on the head", category: "Objects" },
    Word { word: "Cup", meaning: "Small drinking vessel", category: "Objects" },
    Word { word: "Pen", meaning: "Tool for writing in ink", category: "Objects" },
];

/// Commonly confused word with its meaning.
#[derive(Clone, Copy, Debug)]
pub struct Confusable {
    pub word: &'static str,
    pub meaning: &'static str,
}

pub const CONFUSABLES: &[Confusable] = &[
    Confusable { word: "Accept", meaning: "To receive or take" },
    Confusable { word: "Affect", meaning: "To influence" },
    Confusable { word: "Weather", meaning: "Climate conditions" },
    Confusable { word: "Principal", meaning: "Main or head" },
    Confusable { word: "Stationary", meaning: "Not moving" },
    Confusable { word: "Complement", meaning: "Complete or enhance" },
    Confusable { word: "Desert", meaning: "Arid land" },
    Confusable { word: "Lose", meaning: "To be defeated" },
    Confusable { word: "Than", meaning: "Comparison" },
    Confusable { word: "Their", meaning: "Belonging to them" },
    Confusable { word: "Your", meaning: "Belonging to you" },
    Confusable { word: "Its", meaning: "Belonging to it" },
];

/// A hard-to-spell word, a common misspelling and its meaning.
#[derive(Clone, Copy, Debug)]
pub struct Spelling {
    pub word: &'static str,
    pub misspelling: &'static str,
    pub meaning: &'static str,
}

pub const SPELLINGS: &[Spelling] = &[
    Spelling {
        word: "Achievement",
        misspelling: "Achievment",
        meaning: "Something accomplished successfully",
    },
    Spelling { word: "Believe", misspelling: "Beleive", meaning: "To accept as true" },
    Spelling {
        word: "Calendar",
        misspelling: "Calender",
        meaning: "System to organize days and dates",
    },
    Spelling { word: "Definitely", misspelling: "Definately", meaning: "Without doubt" },
    Spelling {
        word: "Embarrass",
        misspelling: "Embarass",
        meaning: "To cause someone to feel awkward",
    },
    Spelling {
        word: "Guarantee",
        misspelling: "Guarentee",
        meaning: "A formal promise or assurance",
    },
    Spelling { word: "Immediately", misspelling: "Immediatly", meaning: "Without delay" },
    Spelling { word: "Necessary", misspelling: "Neccessary", meaning: "Required or essential" },
    Spelling { word: "Occurrence", misspelling: "Occurence", meaning: "An incident or event" },
    Spelling { word: "Parallel", misspelling: "Paralell", meaning: "Side by side, never meeting" },
    Spelling { word: "Rhythm", misspelling: "Rythm", meaning: "A regular repeated pattern" },
    Spelling { word: "Separate", misspelling: "Seperate", meaning: "To divide or move apart" },
];
