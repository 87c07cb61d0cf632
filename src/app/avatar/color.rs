use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

const RGB_MASK: u32 = 0x00ff_ffff;

/// 32-bit FNV-1a over a byte stream.
pub fn fnv1a_32(bytes: impl IntoIterator<Item = u8>) -> u32 {
    bytes.into_iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// A fill color as it appears in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// `#rrggbb`
    Rgb(u32),
    /// `#rgb` shorthand
    Short(u16),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0x000000);
    pub const WHITE: Color = Color::Short(0xfff);
    pub const CRIMSON: Color = Color::Short(0xc33);

    /// Takes the low 24 bits of the FNV-1a hash of `bytes`.
    pub fn from_seed_bytes(bytes: impl IntoIterator<Item = u8>) -> Self {
        Color::Rgb(fnv1a_32(bytes) & RGB_MASK)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => write!(f, "#{:06x}", rgb & RGB_MASK),
            Color::Short(rgb) => write!(f, "#{:03x}", rgb & 0xfff),
        }
    }
}

/// Maps any string, including the empty one, to a stable color.
pub fn derive_color(seed: &str) -> Color {
    Color::from_seed_bytes(seed.bytes())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Background,
    Skin,
    Hair,
    Beard,
}

impl Role {
    /// Appended to the name before hashing.
    pub fn suffix(&self) -> &'static str {
        match self {
            Role::Background => "bg",
            Role::Skin => "skin",
            Role::Hair => "hair",
            Role::Beard => "beard",
        }
    }
}

/// The name-derived colors of one avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub skin: Color,
    pub hair: Color,
    pub beard: Color,
}

impl Palette {
    pub fn for_name(name: &str) -> Self {
        Self::for_name_bytes(name.as_bytes())
    }

    /// Same as [`Palette::for_name`] for names that need not be UTF-8.
    pub fn for_name_bytes(name: &[u8]) -> Self {
        let pick = |role: Role| {
            Color::from_seed_bytes(name.iter().copied().chain(role.suffix().bytes()))
        };

        Palette {
            background: pick(Role::Background),
            skin: pick(Role::Skin),
            hair: pick(Role::Hair),
            beard: pick(Role::Beard),
        }
    }
}

#[cfg(test)]
mod tests {
    use fake::{faker::name::en::Name, Fake};
    use regex::Regex;

    use super::*;

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a_32(*b""), 0x811c9dc5);
        assert_eq!(fnv1a_32(*b"a"), 0xe40c292c);
        assert_eq!(fnv1a_32(*b"foobar"), 0xbf9cf968);
    }

    #[test]
    fn empty_seed_is_masked_offset_basis() {
        assert_eq!(derive_color("").to_string(), "#1c9dc5");
    }

    #[test]
    fn derived_colors_are_six_lowercase_hex_digits() {
        let re = Regex::new(r"^#[0-9a-f]{6}$").unwrap();

        let mut seeds: Vec<String> = (0..50).map(|_| Name().fake()).collect();
        seeds.extend(["", "a", "Ünïcødé", "🙂"].map(String::from));

        for seed in &seeds {
            let color = derive_color(seed).to_string();
            assert!(re.is_match(&color), "{:?} gave {}", seed, color);
        }
    }

    #[test]
    fn zero_pads_small_values() {
        assert_eq!(Color::Rgb(0x0000ab).to_string(), "#0000ab");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn fixed_colors_keep_shorthand() {
        assert_eq!(Color::WHITE.to_string(), "#fff");
        assert_eq!(Color::CRIMSON.to_string(), "#c33");
    }

    #[test]
    fn palette_for_alice() {
        let palette = Palette::for_name("alice");

        assert_eq!(palette.background.to_string(), "#512628");
        assert_eq!(palette.skin.to_string(), "#e0794e");
        assert_eq!(palette.hair.to_string(), "#a9200f");
        assert_eq!(palette.beard.to_string(), "#bce57b");
    }

    #[test]
    fn palette_hashes_raw_name_bytes() {
        let ff = Palette::for_name_bytes(&[0xff]);
        let fe = Palette::for_name_bytes(&[0xfe]);

        assert_ne!(ff, fe);
        assert_eq!(ff.skin, Color::from_seed_bytes([0xff].into_iter().chain(*b"skin")));
        assert_eq!(Palette::for_name_bytes(b"alice"), Palette::for_name("alice"));
    }

    #[test]
    fn palette_hashes_name_with_role_suffix() {
        let name: String = Name().fake();
        let palette = Palette::for_name(&name);

        assert_eq!(palette.background, derive_color(&format!("{name}bg")));
        assert_eq!(palette.skin, derive_color(&format!("{name}skin")));
        assert_eq!(palette.hair, derive_color(&format!("{name}hair")));
        assert_eq!(palette.beard, derive_color(&format!("{name}beard")));
    }
}
