// The closed set of sound clips Campfire's `/speak` endpoint plays for a
// SoundMessage. Provided for caller convenience; `Room::play` accepts any
// string and does not validate against this list.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Crickets,
    Drama,
    Greatjob,
    Live,
    Rimshot,
    Tmyk,
    Trombone,
    Vuvuzela,
    Yeah,
}

impl Sound {
    pub const ALL: [Sound; 9] = [
        Sound::Crickets,
        Sound::Drama,
        Sound::Greatjob,
        Sound::Live,
        Sound::Rimshot,
        Sound::Tmyk,
        Sound::Trombone,
        Sound::Vuvuzela,
        Sound::Yeah,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sound::Crickets => "crickets",
            Sound::Drama => "drama",
            Sound::Greatjob => "greatjob",
            Sound::Live => "live",
            Sound::Rimshot => "rimshot",
            Sound::Tmyk => "tmyk",
            Sound::Trombone => "trombone",
            Sound::Vuvuzela => "vuvuzela",
            Sound::Yeah => "yeah",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_clip_once() {
        let names: Vec<&str> = Sound::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            [
                "crickets", "drama", "greatjob", "live", "rimshot", "tmyk", "trombone",
                "vuvuzela", "yeah"
            ]
        );
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Sound::Drama.to_string(), "drama");
    }
}
