//! Static classification tables behind the porutham factors.
//!
//! All tables are fixed traditional data, indexed by nakshatra or rashi.

use serde::Serialize;

use jothidam_base::{Nakshatra, Rashi};

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Gana of each nakshatra, Ashwini first.
const GANA_TABLE: [Gana; 27] = {
    use Gana::*;
    [
        Deva,     // Ashwini
        Manushya, // Bharani
        Rakshasa, // Krittika
        Manushya, // Rohini
        Deva,     // Mrigashira
        Manushya, // Ardra
        Deva,     // Punarvasu
        Deva,     // Pushya
        Rakshasa, // Ashlesha
        Rakshasa, // Magha
        Manushya, // Purva Phalguni
        Manushya, // Uttara Phalguni
        Deva,     // Hasta
        Rakshasa, // Chitra
        Deva,     // Swati
        Rakshasa, // Vishakha
        Deva,     // Anuradha
        Rakshasa, // Jyeshtha
        Rakshasa, // Mula
        Manushya, // Purva Ashadha
        Manushya, // Uttara Ashadha
        Deva,     // Shravana
        Rakshasa, // Dhanishtha
        Rakshasa, // Shatabhisha
        Manushya, // Purva Bhadrapada
        Manushya, // Uttara Bhadrapada
        Deva,     // Revati
    ]
};

pub fn gana_of(star: Nakshatra) -> Gana {
    GANA_TABLE[star.index() as usize]
}

/// Yoni animal of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

const YONI_TABLE: [Yoni; 27] = {
    use Yoni::*;
    [
        Horse,    // Ashwini
        Elephant, // Bharani
        Sheep,    // Krittika
        Serpent,  // Rohini
        Serpent,  // Mrigashira
        Dog,      // Ardra
        Cat,      // Punarvasu
        Sheep,    // Pushya
        Cat,      // Ashlesha
        Rat,      // Magha
        Rat,      // Purva Phalguni
        Cow,      // Uttara Phalguni
        Buffalo,  // Hasta
        Tiger,    // Chitra
        Buffalo,  // Swati
        Tiger,    // Vishakha
        Deer,     // Anuradha
        Deer,     // Jyeshtha
        Dog,      // Mula
        Monkey,   // Purva Ashadha
        Mongoose, // Uttara Ashadha
        Monkey,   // Shravana
        Lion,     // Dhanishtha
        Horse,    // Shatabhisha
        Lion,     // Purva Bhadrapada
        Cow,      // Uttara Bhadrapada
        Elephant, // Revati
    ]
};

pub fn yoni_of(star: Nakshatra) -> Yoni {
    YONI_TABLE[star.index() as usize]
}

/// Hostile yoni pairs. Order within a pair is irrelevant.
const YONI_ENEMIES: [(Yoni, Yoni); 7] = [
    (Yoni::Cow, Yoni::Tiger),
    (Yoni::Elephant, Yoni::Lion),
    (Yoni::Horse, Yoni::Buffalo),
    (Yoni::Dog, Yoni::Deer),
    (Yoni::Serpent, Yoni::Mongoose),
    (Yoni::Monkey, Yoni::Sheep),
    (Yoni::Cat, Yoni::Rat),
];

pub fn yoni_hostile(a: Yoni, b: Yoni) -> bool {
    YONI_ENEMIES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Friendly yoni pairs, graded uthamam alongside a shared animal.
const YONI_FRIENDS: [(Yoni, Yoni); 4] = [
    (Yoni::Horse, Yoni::Sheep),
    (Yoni::Cow, Yoni::Buffalo),
    (Yoni::Lion, Yoni::Tiger),
    (Yoni::Deer, Yoni::Monkey),
];

pub fn yoni_friendly(a: Yoni, b: Yoni) -> bool {
    YONI_FRIENDS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Rajju group: the body segment a nakshatra belongs to. A shared group
/// between partners fails the factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rajju {
    Pada,
    Kati,
    Nabhi,
    Kantha,
    Siro,
}

const RAJJU_TABLE: [Rajju; 27] = {
    use Rajju::*;
    [
        Pada,   // Ashwini
        Kati,   // Bharani
        Nabhi,  // Krittika
        Kantha, // Rohini
        Siro,   // Mrigashira
        Kantha, // Ardra
        Nabhi,  // Punarvasu
        Kati,   // Pushya
        Pada,   // Ashlesha
        Pada,   // Magha
        Kati,   // Purva Phalguni
        Nabhi,  // Uttara Phalguni
        Kantha, // Hasta
        Siro,   // Chitra
        Kantha, // Swati
        Nabhi,  // Vishakha
        Kati,   // Anuradha
        Pada,   // Jyeshtha
        Pada,   // Mula
        Kati,   // Purva Ashadha
        Nabhi,  // Uttara Ashadha
        Kantha, // Shravana
        Siro,   // Dhanishtha
        Kantha, // Shatabhisha
        Nabhi,  // Purva Bhadrapada
        Kati,   // Uttara Bhadrapada
        Pada,   // Revati
    ]
};

pub fn rajju_of(star: Nakshatra) -> Rajju {
    RAJJU_TABLE[star.index() as usize]
}

/// Nadi (constitution) group. A shared nadi fails the factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nadi {
    Aadi,
    Madhya,
    Antya,
}

const NADI_TABLE: [Nadi; 27] = {
    use Nadi::*;
    [
        Aadi,   // Ashwini
        Madhya, // Bharani
        Antya,  // Krittika
        Antya,  // Rohini
        Madhya, // Mrigashira
        Aadi,   // Ardra
        Aadi,   // Punarvasu
        Madhya, // Pushya
        Antya,  // Ashlesha
        Antya,  // Magha
        Madhya, // Purva Phalguni
        Aadi,   // Uttara Phalguni
        Aadi,   // Hasta
        Madhya, // Chitra
        Antya,  // Swati
        Antya,  // Vishakha
        Madhya, // Anuradha
        Aadi,   // Jyeshtha
        Aadi,   // Mula
        Madhya, // Purva Ashadha
        Antya,  // Uttara Ashadha
        Antya,  // Shravana
        Madhya, // Dhanishtha
        Aadi,   // Shatabhisha
        Aadi,   // Purva Bhadrapada
        Madhya, // Uttara Bhadrapada
        Antya,  // Revati
    ]
};

pub fn nadi_of(star: Nakshatra) -> Nadi {
    NADI_TABLE[star.index() as usize]
}

/// Varna rank of a moon sign, higher marries equal-or-lower.
pub fn varna_rank(rashi: Rashi) -> u8 {
    use Rashi::*;
    match rashi {
        Karka | Vrischika | Meena => 4,   // Brahmin
        Mesha | Simha | Dhanu => 3,       // Kshatriya
        Vrishabha | Kanya | Makara => 2,  // Vaishya
        Mithuna | Tula | Kumbha => 1,     // Shudra
    }
}

/// Signs amenable (vasya) to a given moon sign.
pub fn vasya_of(rashi: Rashi) -> &'static [Rashi] {
    use Rashi::*;
    match rashi {
        Mesha => &[Simha, Vrischika],
        Vrishabha => &[Karka, Tula],
        Mithuna => &[Kanya],
        Karka => &[Vrischika, Dhanu],
        Simha => &[Tula],
        Kanya => &[Mithuna, Meena],
        Tula => &[Kanya, Makara],
        Vrischika => &[Karka],
        Dhanu => &[Meena],
        Makara => &[Mesha, Kumbha],
        Kumbha => &[Mesha],
        Meena => &[Makara],
    }
}

/// Mutually afflicting (vedha) star pairs. Chitra afflicts its own
/// opposite half, so it pairs with itself.
const VEDHA_PAIRS: [(Nakshatra, Nakshatra); 14] = {
    use Nakshatra::*;
    [
        (Ashwini, Jyeshtha),
        (Bharani, Anuradha),
        (Krittika, Vishakha),
        (Rohini, Swati),
        (Mrigashira, Dhanishtha),
        (Ardra, Shravana),
        (Punarvasu, UttaraAshadha),
        (Pushya, PurvaAshadha),
        (Ashlesha, Mula),
        (Magha, Revati),
        (PurvaPhalguni, UttaraBhadrapada),
        (UttaraPhalguni, PurvaBhadrapada),
        (Hasta, Shatabhisha),
        (Chitra, Chitra),
    ]
};

pub fn vedha_afflicted(a: Nakshatra, b: Nakshatra) -> bool {
    VEDHA_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}
