//! Verdict messages, moods, tips and oracle lines keyed by percentage.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Verdict line for a compatibility percentage.
pub fn message_for_percent(percent: u8) -> &'static str {
    match percent {
        95..=u8::MAX => "💞 Cosmic Bond — Truly rare!",
        85..=94 => "💕 Soulmates in the making!",
        70..=84 => "💖 Strong connection — nurture it!",
        50..=69 => "✨ Promising — work & communicate!",
        30..=49 => "🤍 Some sparks — effort required.",
        _ => "💔 Friendly vibes — maybe best as friends.",
    }
}

/// Mood bucket for a percentage, highest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Dreamy,
    Passionate,
    Adventurous,
    Flirty,
    Playful,
    Curious,
    Friendly,
    Chill,
}

impl Mood {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            90..=u8::MAX => Mood::Dreamy,
            80..=89 => Mood::Passionate,
            70..=79 => Mood::Adventurous,
            60..=69 => Mood::Flirty,
            50..=59 => Mood::Playful,
            40..=49 => Mood::Curious,
            30..=39 => Mood::Friendly,
            _ => Mood::Chill,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Dreamy => "Dreamy",
            Mood::Passionate => "Passionate",
            Mood::Adventurous => "Adventurous",
            Mood::Flirty => "Flirty",
            Mood::Playful => "Playful",
            Mood::Curious => "Curious",
            Mood::Friendly => "Friendly",
            Mood::Chill => "Chill",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mood::Dreamy => "💫",
            Mood::Passionate => "🔥",
            Mood::Adventurous => "🌟",
            Mood::Flirty => "😍",
            Mood::Playful => "✨",
            Mood::Curious => "🤔",
            Mood::Friendly => "😊",
            Mood::Chill => "🤝",
        }
    }

    fn tips(self) -> &'static [&'static str] {
        match self {
            Mood::Dreamy => &[
                "🌙 Stargaze together tonight",
                "💌 Write them a heartfelt letter",
                "🎵 Create a dreamy playlist for them",
                "🌸 Leave a sweet note on their pillow",
                "☁️ Plan a cozy afternoon nap together",
            ],
            Mood::Passionate => &[
                "💋 Surprise them with a passionate kiss",
                "🌹 Leave rose petals on their path",
                "🕯️ Set up a candlelit dinner",
                "💃 Dance together to your favorite song",
                "🔥 Write them a love poem",
            ],
            Mood::Adventurous => &[
                "🗺️ Plan a spontaneous mini-adventure",
                "🥾 Go on an unexpected hike together",
                "🎢 Try something new and exciting",
                "📍 Explore a new place in your city",
                "🎯 Challenge them to a fun competition",
            ],
            Mood::Flirty => &[
                "😉 Send them a cheeky text",
                "💄 Leave a lipstick mark on their mirror",
                "🍓 Feed them something sweet",
                "💐 Surprise them with their favorite flowers",
                "📱 Send a cute selfie with a flirty caption",
            ],
            Mood::Playful => &[
                "🎈 Plan a silly photo shoot together",
                "🎮 Have a game night with their favorite games",
                "🍕 Build a blanket fort and order pizza",
                "🎭 Do silly impressions of each other",
                "🧩 Work on a puzzle together",
            ],
            Mood::Curious => &[
                "❓ Ask them about their wildest dream",
                "📚 Share an interesting article with them",
                "🔍 Explore a new hobby together",
                "🎨 Try creating something artistic together",
                "🌟 Learn something new about each other",
            ],
            Mood::Friendly => &[
                "☕ Share a warm cup of coffee",
                "🤗 Give them an unexpected hug",
                "📞 Call them just to hear their voice",
                "🍪 Bake their favorite treat together",
                "💬 Have a deep, meaningful conversation",
            ],
            Mood::Chill => &[
                "🛋️ Have a relaxing movie marathon",
                "🧘 Try meditation or yoga together",
                "🍵 Enjoy a peaceful tea time",
                "📖 Read books in comfortable silence",
                "🌅 Watch the sunrise or sunset together",
            ],
        }
    }

    fn oracle_lines(self) -> &'static [&'static str] {
        match self {
            Mood::Dreamy => &[
                "The cosmos whispers secrets of eternal connection... ✨",
                "Stars align in perfect harmony for your love story... 🌟",
                "Moonlight reveals the depth of your cosmic bond... 🌙",
                "Celestial energies dance in your romantic aura... 💫",
                "Your love resonates through the universal symphony... 🎵",
            ],
            Mood::Passionate => &[
                "Flames of passion burn eternally in your hearts... 🔥",
                "Your souls ignite with irresistible magnetic fire... 💥",
                "Passion flows like molten gold through your connection... 🌋",
                "Hearts beat in perfect sync with burning intensity... ❤️‍🔥",
                "Love's fire consumes all doubts and fears... 🔥",
            ],
            Mood::Adventurous => &[
                "Embark on love's greatest adventure together... 🗺️",
                "Your spirits soar on wings of shared exploration... 🦅",
                "Every moment becomes an exciting chapter... 📖",
                "Love's journey unfolds with thrilling discoveries... 🧭",
                "Together you conquer love's highest peaks... ⛰️",
            ],
            Mood::Flirty => &[
                "Butterflies dance in anticipation of your touch... 🦋",
                "Love's playful whispers tease the heart... 😘",
                "Sparks fly in your flirtatious energy field... ⚡",
                "Hearts flutter with delightful anticipation... 💕",
                "Love blooms in your charming interactions... 🌸",
            ],
            Mood::Playful => &[
                "Love sparkles with joyful playfulness... ✨",
                "Hearts giggle in harmonious delight... 😄",
                "Your connection dances with lighthearted magic... 💃",
                "Love's energy bubbles with sweet mischief... 🫧",
                "Joyful hearts create beautiful memories... 🎈",
            ],
            Mood::Curious => &[
                "Love's mysteries unfold in your shared curiosity... 🔍",
                "Hearts explore the depths of connection... 🌊",
                "Questions lead to beautiful discoveries... 💭",
                "Love grows through shared wonder... 🌱",
                "Curiosity strengthens your romantic bond... 🤔",
            ],
            Mood::Friendly => &[
                "Love blooms from the seeds of friendship... 🌻",
                "Hearts connect in warm, gentle harmony... ☕",
                "Love grows in the garden of companionship... 🌷",
                "Your friendship forms love's strong foundation... 🤝",
                "Love flourishes in your caring connection... 💝",
            ],
            Mood::Chill => &[
                "Love flows peacefully like a gentle stream... 🏞️",
                "Hearts find tranquility in each other's presence... 🧘",
                "Love whispers softly in moments of calm... 🍃",
                "Peaceful energy surrounds your connection... ☮️",
                "Love rests comfortably in your shared space... 🛋️",
            ],
        }
    }
}

/// Pick one of the mood's five date-idea tips.
pub fn random_tip<R: Rng>(mood: Mood, rng: &mut R) -> &'static str {
    let tips = mood.tips();
    tips[rng.gen_range(0..tips.len())]
}

/// Pick one of the mood's five oracle lines.
pub fn oracle_message<R: Rng>(mood: Mood, rng: &mut R) -> &'static str {
    let lines = mood.oracle_lines();
    lines[rng.gen_range(0..lines.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(message_for_percent(100), "💞 Cosmic Bond — Truly rare!");
        assert_eq!(message_for_percent(95), "💞 Cosmic Bond — Truly rare!");
        assert_eq!(message_for_percent(94), "💕 Soulmates in the making!");
        assert_eq!(message_for_percent(70), "💖 Strong connection — nurture it!");
        assert_eq!(message_for_percent(50), "✨ Promising — work & communicate!");
        assert_eq!(message_for_percent(30), "🤍 Some sparks — effort required.");
        assert_eq!(
            message_for_percent(29),
            "💔 Friendly vibes — maybe best as friends."
        );
    }

    #[test]
    fn mood_buckets() {
        assert_eq!(Mood::for_percent(100), Mood::Dreamy);
        assert_eq!(Mood::for_percent(90), Mood::Dreamy);
        assert_eq!(Mood::for_percent(89), Mood::Passionate);
        assert_eq!(Mood::for_percent(75), Mood::Adventurous);
        assert_eq!(Mood::for_percent(60), Mood::Flirty);
        assert_eq!(Mood::for_percent(55), Mood::Playful);
        assert_eq!(Mood::for_percent(40), Mood::Curious);
        assert_eq!(Mood::for_percent(30), Mood::Friendly);
        assert_eq!(Mood::for_percent(1), Mood::Chill);
    }

    #[test]
    fn tips_and_oracle_come_from_the_mood_tables() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for mood in [
            Mood::Dreamy,
            Mood::Passionate,
            Mood::Adventurous,
            Mood::Flirty,
            Mood::Playful,
            Mood::Curious,
            Mood::Friendly,
            Mood::Chill,
        ] {
            for _ in 0..20 {
                assert!(mood.tips().contains(&random_tip(mood, &mut rng)));
                assert!(mood
                    .oracle_lines()
                    .contains(&oracle_message(mood, &mut rng)));
            }
        }
    }
}
