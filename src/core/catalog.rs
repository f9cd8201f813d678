//! Mood catalog: per-mood song pools and offline quotes

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::models::{Mood, Song};

static BUILTIN_CATALOG: Lazy<Arc<MoodCatalog>> = Lazy::new(|| Arc::new(MoodCatalog::build()));

/// Songs used to pad generated content that came back with fewer than three
pub const DEFAULT_SONGS: [(&str, &str, &str); 3] = [
    ("Fortnight", "Taylor Swift", "https://www.youtube.com/watch?v=5GgtNmrIhRA"),
    ("Espresso", "Sabrina Carpenter", "https://www.youtube.com/watch?v=8_JdY98wGqU"),
    ("Birds of a Feather", "Billie Eilish", "https://www.youtube.com/watch?v=WuG3k3j26s4"),
];

/// Offline text for a mood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodFallback {
    pub quote: String,
    pub affirmation: String,
    pub background_image: String,
}

/// Everything the catalog knows about one mood
#[derive(Debug, Clone)]
pub struct MoodEntry {
    pub songs: Vec<Song>,
    pub fallback: MoodFallback,
}

/// Lookup table keyed by `Mood`
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    entries: [MoodEntry; 6],
}

impl MoodCatalog {
    /// Get the built-in catalog
    pub fn builtin() -> Arc<MoodCatalog> {
        BUILTIN_CATALOG.clone()
    }

    fn build() -> Self {
        Self {
            entries: Mood::ALL.map(|mood| {
                let (quote, affirmation, background_image) = fallback_text(mood);
                MoodEntry {
                    songs: song_pool(mood)
                        .iter()
                        .map(|(title, artist, link)| Song::new(title, artist, link))
                        .collect(),
                    fallback: MoodFallback {
                        quote: quote.to_string(),
                        affirmation: affirmation.to_string(),
                        background_image: background_image.to_string(),
                    },
                }
            }),
        }
    }

    /// Replace the song pool for a mood
    pub fn with_songs(mut self, mood: Mood, songs: Vec<Song>) -> Self {
        self.entries[mood.index()].songs = songs;
        self
    }

    /// Song pool for a mood, in authored order
    pub fn songs_for(&self, mood: Mood) -> &[Song] {
        &self.entries[mood.index()].songs
    }

    pub fn fallback_for(&self, mood: Mood) -> &MoodFallback {
        &self.entries[mood.index()].fallback
    }

    pub fn background_image_for(&self, mood: Mood) -> &str {
        &self.entries[mood.index()].fallback.background_image
    }
}

/// Default song at a padding position
pub fn default_song(position: usize) -> Song {
    let (title, artist, link) = DEFAULT_SONGS[position % DEFAULT_SONGS.len()];
    Song::new(title, artist, link)
}

fn song_pool(mood: Mood) -> &'static [(&'static str, &'static str, &'static str)] {
    match mood {
        Mood::Happy => &[
            ("Fortnight", "Taylor Swift", "https://www.youtube.com/watch?v=5GgtNmrIhRA"),
            ("Espresso", "Sabrina Carpenter", "https://www.youtube.com/watch?v=8_JdY98wGqU"),
            ("Good Luck, Babe!", "Chappell Roan", "https://www.youtube.com/watch?v=QUpdmR2vz_s"),
            ("Cruel Summer", "Taylor Swift", "https://www.youtube.com/watch?v=ic8j13piAhQ"),
            ("Paint The Town Red", "Doja Cat", "https://www.youtube.com/watch?v=CCMC-tm2G0g"),
            ("This Is Why", "Paramore", "https://www.youtube.com/watch?v=xIYJ7VaSxYY"),
            ("Die With A Smile", "Lady Gaga & Bruno Mars", "https://www.youtube.com/watch?v=_Iitj7YoKm4"),
            ("Please Please Please", "Sabrina Carpenter", "https://www.youtube.com/watch?v=vfHV1xXk6rU"),
        ],
        Mood::Sad => &[
            ("Lose You to Love Me", "Selena Gomez", "https://www.youtube.com/watch?v=zlJDTxahav0"),
            ("Last Thing On My Mind", "Gracie Abrams", "https://www.youtube.com/watch?v=fLVfoMfGiKM"),
            ("A Bar Song (Tipsy)", "Shaboozey", "https://www.youtube.com/watch?v=KBNitGpL4u8"),
            ("Blindsided", "Bon Iver", "https://www.youtube.com/watch?v=f3GC8nAr6b8"),
            ("Vampire", "Olivia Rodrigo", "https://www.youtube.com/watch?v=ujm8zTh0-u8"),
            ("Glimpse of Us", "Joji", "https://www.youtube.com/watch?v=FvOpPeKSf_4"),
            ("Ghost", "Justin Bieber", "https://www.youtube.com/watch?v=Fp8msa5uYsc"),
            ("Please Please Please", "Sabrina Carpenter", "https://www.youtube.com/watch?v=vfHV1xXk6rU"),
        ],
        Mood::Chill => &[
            ("Lavender Haze", "Taylor Swift", "https://www.youtube.com/watch?v=mkR_Qwix4Ho"),
            ("Birds of a Feather", "Billie Eilish", "https://www.youtube.com/watch?v=WuG3k3j26s4"),
            ("Snooze", "SZA", "https://www.youtube.com/watch?v=nJxWa5L9G_I"),
            ("Slow Moving Train", "Rihanna", "https://www.youtube.com/watch?v=BuDfbYe-JKw"),
            ("Younger", "Reneé Rapp", "https://www.youtube.com/watch?v=Xv5rCiRFn2c"),
            ("Flowers", "Miley Cyrus", "https://www.youtube.com/watch?v=G7KNmW9a75Y"),
            ("Houdini", "Dua Lipa", "https://www.youtube.com/watch?v=L0J9Di1MGCU"),
            ("Daylight", "David Kushner", "https://www.youtube.com/watch?v=Q2wTOvY2XAA"),
        ],
        Mood::Angry => &[
            ("Not My Problem", "Dua Lipa", "https://www.youtube.com/watch?v=A7AkWtEuLsA"),
            ("Bad Idea Right?", "Olivia Rodrigo", "https://www.youtube.com/watch?v=88bDpYwx3n4"),
            ("Burn", "Megan Thee Stallion", "https://www.youtube.com/watch?v=4HiJy8qCeAM"),
            ("Butterfly", "Lil Nas X", "https://www.youtube.com/watch?v=qU3M_3gyAuE"),
            ("Savage", "Megan Thee Stallion", "https://www.youtube.com/watch?v=yE-glh4OciY"),
            ("Losers", "Olivia Rodrigo", "https://www.youtube.com/watch?v=HpKoAnGNTI0"),
            ("Rockstar", "Post Malone", "https://www.youtube.com/watch?v=UceaB4D0jpo"),
            ("Rock + Roll", "EDEN", "https://www.youtube.com/watch?v=geZ_5Ri7ANg"),
        ],
        Mood::Excited => &[
            ("On My Mama", "Victoria Monét", "https://www.youtube.com/watch?v=qM6Gi3hRMTs"),
            ("Houdini", "Dua Lipa", "https://www.youtube.com/watch?v=L0J9Di1MGCU"),
            ("Dance The Night", "Dua Lipa", "https://www.youtube.com/watch?v=7gME2N6SgN4"),
            ("Die With A Smile", "Lady Gaga & Bruno Mars", "https://www.youtube.com/watch?v=_Iitj7YoKm4"),
            ("Butterfly", "Lil Nas X", "https://www.youtube.com/watch?v=qU3M_3gyAuE"),
            ("Bongos", "Cardi B & Megan Thee Stallion", "https://www.youtube.com/watch?v=bohW5nyX5xM"),
            ("MONTERO", "Lil Nas X", "https://www.youtube.com/watch?v=6swmTBVI83k"),
            ("Nonsense", "Sabrina Carpenter", "https://www.youtube.com/watch?v=09I1G4RinS0"),
        ],
        Mood::Lonely => &[
            ("Saturn", "SZA", "https://www.youtube.com/watch?v=Fx2IZQ6nXwM"),
            ("Lonely", "Megan Thee Stallion", "https://www.youtube.com/watch?v=E1vNkMLgVIw"),
            ("Stick Season", "Noah Kahan", "https://www.youtube.com/watch?v=JHHExAl5q7g"),
            ("Somebody", "Reneé Rapp", "https://www.youtube.com/watch?v=o81TjTsT6kc"),
            ("Nobody Gets Me", "SZA", "https://www.youtube.com/watch?v=zTXw15hqTGQ"),
            ("Glimpse of Us", "Joji", "https://www.youtube.com/watch?v=FvOpPeKSf_4"),
            ("Stuck with U", "Ariana Grande & Justin Bieber", "https://www.youtube.com/watch?v=pE49WK-oNjU"),
            ("Better Alone", "Carolina Gaitán", "https://www.youtube.com/watch?v=MbmMrxzHPxc"),
        ],
    }
}

fn fallback_text(mood: Mood) -> (&'static str, &'static str, &'static str) {
    match mood {
        Mood::Happy => (
            "Happiness is not something ready-made. It comes from your own actions.",
            "I choose to be happy and spread joy to those around me.",
            "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?q=80&w=2076&auto=format&fit=crop",
        ),
        Mood::Sad => (
            "Tears are words that need to be written.",
            "I honor my feelings but do not let them define me. This too shall pass.",
            "https://images.unsplash.com/photo-1470813740244-df37b8c1edcb?q=80&w=2151&auto=format&fit=crop",
        ),
        Mood::Chill => (
            "Life isn't as serious as the mind makes it out to be.",
            "I am present and at peace with this moment exactly as it is.",
            "https://images.unsplash.com/photo-1500673922987-e212871fec22?q=80&w=2070&auto=format&fit=crop",
        ),
        Mood::Angry => (
            "Speak when you are angry and you will make the best speech you will ever regret.",
            "I release my anger and choose responses that serve my highest good.",
            "https://images.unsplash.com/photo-1439792675105-701e6a4ab6f0?q=80&w=2073&auto=format&fit=crop",
        ),
        Mood::Excited => (
            "The future belongs to those who believe in the beauty of their dreams.",
            "I embrace the energy of possibility and opportunity all around me.",
            "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?q=80&w=2070&auto=format&fit=crop",
        ),
        Mood::Lonely => (
            "Sometimes you need to be alone to reflect on life. Take time to take care of yourself.",
            "I am complete within myself. Solitude offers me space to grow and reflect.",
            "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?q=80&w=2073&auto=format&fit=crop",
        ),
    }
}
