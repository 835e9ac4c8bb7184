use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Terminal colors for the nine rasa color tokens stored in the log.
///
/// `white` (the unrecorded-day token) deliberately resolves to `None`:
/// empty calendar cells stay unpainted.
pub struct Palette;

impl Palette {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Palette::ORANGE);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Palette::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Palette::PURPLE);
        skin.bullet.set_fg(Palette::RED);
        skin.italic.set_fg(Palette::TURQUOISE);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Palette::GREY);
        skin.inline_code.set_fg(Palette::GREEN);

        skin
    }

    pub fn color_for(token: &str) -> Option<Color> {
        match token {
            "pink" => Some(Self::PINK),
            "yellow" => Some(Self::YELLOW),
            "blue" => Some(Self::BLUE),
            "red" => Some(Self::RED),
            "orange" => Some(Self::ORANGE),
            "purple" => Some(Self::PURPLE),
            "green" => Some(Self::GREEN),
            "turquoise" => Some(Self::TURQUOISE),
            "grey" => Some(Self::GREY),
            _ => None,
        }
    }

    pub const PINK: Color = Color::Rgb {
        r: 0xFF,
        g: 0x79,
        b: 0xC6,
    }; // #FF79C6
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const ORANGE: Color = Color::Rgb {
        r: 0xD1,
        g: 0x9A,
        b: 0x66,
    }; // #D19A66
    pub const PURPLE: Color = Color::Rgb {
        r: 0xC6,
        g: 0x78,
        b: 0xDD,
    }; // #C678DD
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const TURQUOISE: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    }; // #56B6C2
    pub const GREY: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370
}
