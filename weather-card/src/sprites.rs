//! Weather sprite system with auto-sizing based on terminal dimensions
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Each visual has Small, Medium, and Large variants.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::state::Condition;

// ============================================================================
// Sprite data - embedded at compile time
// ============================================================================

mod sprite_data {
    pub mod sun {
        pub const SMALL: &str = include_str!("../sprites/sun/small.txt");
        pub const MEDIUM: &str = include_str!("../sprites/sun/medium.txt");
        pub const LARGE: &str = include_str!("../sprites/sun/large.txt");
    }
    pub mod clouds {
        pub const SMALL: &str = include_str!("../sprites/clouds/small.txt");
        pub const MEDIUM: &str = include_str!("../sprites/clouds/medium.txt");
        pub const LARGE: &str = include_str!("../sprites/clouds/large.txt");
    }
    pub mod rain {
        pub const SMALL: &str = include_str!("../sprites/rain/small.txt");
        pub const MEDIUM: &str = include_str!("../sprites/rain/medium.txt");
        pub const LARGE: &str = include_str!("../sprites/rain/large.txt");
    }
    pub mod drizzle {
        pub const SMALL: &str = include_str!("../sprites/drizzle/small.txt");
        pub const MEDIUM: &str = include_str!("../sprites/drizzle/medium.txt");
        pub const LARGE: &str = include_str!("../sprites/drizzle/large.txt");
    }
    pub mod mist {
        pub const SMALL: &str = include_str!("../sprites/mist/small.txt");
        pub const MEDIUM: &str = include_str!("../sprites/mist/medium.txt");
        pub const LARGE: &str = include_str!("../sprites/mist/large.txt");
    }
}

// ============================================================================
// Types
// ============================================================================

/// Sprite size categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 5 lines - for compact terminals
    Small,
    /// 7 lines - for normal terminals
    Medium,
    /// 10 lines - for large terminals
    Large,
}

impl SpriteSize {
    /// Determine appropriate sprite size based on terminal dimensions
    pub fn from_terminal_size(_width: u16, height: u16) -> Self {
        // Chrome: border (2) + selectors (3) + help (1) + reading text (10) = 16
        let content_height = height.saturating_sub(16);

        match content_height {
            0..=6 => SpriteSize::Small,
            7..=9 => SpriteSize::Medium,
            _ => SpriteSize::Large,
        }
    }
}

/// Artwork shown next to the temperature
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionVisual {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Mist,
}

impl ConditionVisual {
    /// Shown for any condition without artwork of its own
    pub const FALLBACK: ConditionVisual = ConditionVisual::Clear;

    pub fn for_condition(condition: &Condition) -> Self {
        match condition {
            Condition::Clear => ConditionVisual::Clear,
            Condition::Clouds => ConditionVisual::Clouds,
            Condition::Rain => ConditionVisual::Rain,
            Condition::Drizzle => ConditionVisual::Drizzle,
            Condition::Mist => ConditionVisual::Mist,
            Condition::Snow | Condition::Other(_) => Self::FALLBACK,
        }
    }

    /// Get the primary color for this visual
    fn color(&self) -> Color {
        match self {
            ConditionVisual::Clear => Color::Yellow,
            ConditionVisual::Clouds => Color::Rgb(160, 160, 175),
            ConditionVisual::Rain => Color::Rgb(80, 140, 200),
            ConditionVisual::Drizzle => Color::Rgb(130, 170, 200),
            ConditionVisual::Mist => Color::Rgb(150, 150, 160),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Get sprite for a reported condition and terminal size
pub fn weather_sprite(condition: &Condition, terminal_size: (u16, u16)) -> (Text<'static>, Color) {
    let visual = ConditionVisual::for_condition(condition);
    let size = SpriteSize::from_terminal_size(terminal_size.0, terminal_size.1);
    get_sprite(visual, size)
}

/// Get weather art for the given visual and size
pub fn get_sprite(visual: ConditionVisual, size: SpriteSize) -> (Text<'static>, Color) {
    let sprite_str = match visual {
        ConditionVisual::Clear => match size {
            SpriteSize::Small => sprite_data::sun::SMALL,
            SpriteSize::Medium => sprite_data::sun::MEDIUM,
            SpriteSize::Large => sprite_data::sun::LARGE,
        },
        ConditionVisual::Clouds => match size {
            SpriteSize::Small => sprite_data::clouds::SMALL,
            SpriteSize::Medium => sprite_data::clouds::MEDIUM,
            SpriteSize::Large => sprite_data::clouds::LARGE,
        },
        ConditionVisual::Rain => match size {
            SpriteSize::Small => sprite_data::rain::SMALL,
            SpriteSize::Medium => sprite_data::rain::MEDIUM,
            SpriteSize::Large => sprite_data::rain::LARGE,
        },
        ConditionVisual::Drizzle => match size {
            SpriteSize::Small => sprite_data::drizzle::SMALL,
            SpriteSize::Medium => sprite_data::drizzle::MEDIUM,
            SpriteSize::Large => sprite_data::drizzle::LARGE,
        },
        ConditionVisual::Mist => match size {
            SpriteSize::Small => sprite_data::mist::SMALL,
            SpriteSize::Medium => sprite_data::mist::MEDIUM,
            SpriteSize::Large => sprite_data::mist::LARGE,
        },
    };

    let color = visual.color();
    let text = sprite_to_text(sprite_str, color);
    (text, color)
}

/// Convert sprite string to colored Text
fn sprite_to_text(sprite: &'static str, color: Color) -> Text<'static> {
    let style = Style::default().fg(color);
    let lines: Vec<Line> = sprite
        .lines()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect();
    Text::from(lines)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_size_from_terminal() {
        assert_eq!(SpriteSize::from_terminal_size(80, 16), SpriteSize::Small);
        assert_eq!(SpriteSize::from_terminal_size(80, 22), SpriteSize::Small);

        assert_eq!(SpriteSize::from_terminal_size(80, 23), SpriteSize::Medium);
        assert_eq!(SpriteSize::from_terminal_size(80, 25), SpriteSize::Medium);

        assert_eq!(SpriteSize::from_terminal_size(80, 26), SpriteSize::Large);
        assert_eq!(SpriteSize::from_terminal_size(80, 50), SpriteSize::Large);
    }

    #[test]
    fn test_visual_for_condition() {
        assert_eq!(
            ConditionVisual::for_condition(&Condition::Rain),
            ConditionVisual::Rain
        );
        assert_eq!(
            ConditionVisual::for_condition(&Condition::Clouds),
            ConditionVisual::Clouds
        );
        assert_eq!(
            ConditionVisual::for_condition(&Condition::Mist),
            ConditionVisual::Mist
        );
    }

    #[test]
    fn test_unmatched_conditions_use_fallback() {
        assert_eq!(
            ConditionVisual::for_condition(&Condition::Snow),
            ConditionVisual::FALLBACK
        );
        assert_eq!(
            ConditionVisual::for_condition(&Condition::Other("Haze".into())),
            ConditionVisual::Clear
        );
        assert_eq!(
            weather_sprite(&Condition::Snow, (80, 24)),
            weather_sprite(&Condition::Clear, (80, 24))
        );
    }

    #[test]
    fn test_all_sprites_load() {
        // Verify all sprites are embedded correctly
        for visual in [
            ConditionVisual::Clear,
            ConditionVisual::Clouds,
            ConditionVisual::Rain,
            ConditionVisual::Drizzle,
            ConditionVisual::Mist,
        ] {
            for size in [SpriteSize::Small, SpriteSize::Medium, SpriteSize::Large] {
                let (text, _) = get_sprite(visual, size);
                assert!(
                    !text.lines.is_empty(),
                    "Sprite {:?}/{:?} should not be empty",
                    visual,
                    size
                );
            }
        }
    }
}
