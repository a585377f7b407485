use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use strum_macros::Display;

/// What a reviewer archetype cares about. Drives the lead-in of the review text.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display)]
pub enum Focus {
    #[strum(serialize = "performance")]
    Performance,
    #[strum(serialize = "value")]
    Value,
    #[strum(serialize = "durability")]
    Durability,
    #[strum(serialize = "weatherproofing")]
    Weatherproofing,
    #[strum(serialize = "ease_of_use")]
    EaseOfUse,
    #[strum(serialize = "sound_quality")]
    SoundQuality,
    #[strum(serialize = "portability")]
    Portability,
    #[strum(serialize = "safety")]
    Safety,
}

impl Focus {
    pub fn lead_in(&self) -> &'static str {
        match self {
            Focus::Performance => "As someone who values performance, ",
            Focus::Value => "As someone who looks for value, ",
            Focus::Durability => "With kids in the house, ",
            Focus::Weatherproofing => "I use it outdoors often, so ",
            Focus::EaseOfUse => "I cook a lot and care about ease of use, so ",
            Focus::SoundQuality => "As an audiophile, ",
            Focus::Portability => "I travel a lot, so ",
            Focus::Safety => "With pets around, ",
        }
    }
}

pub struct Persona {
    pub label: &'static str,
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub ages: RangeInclusive<u32>,
    pub locations: &'static [&'static str],
    pub focus: Focus,
}

pub static PERSONAS: [Persona; 8] = [
    Persona {
        label: "Tech Enthusiast",
        first_names: &["Alex", "Jordan", "Taylor", "Sam", "Riley", "Casey"],
        last_names: &["Ng", "Patel", "Garcia", "Smith", "Khan", "Brown"],
        ages: 22..=45,
        locations: &["San Francisco, CA", "Berlin, DE", "London, UK", "Austin, TX"],
        focus: Focus::Performance,
    },
    Persona {
        label: "Bargain Hunter",
        first_names: &["Jamie", "Morgan", "Avery", "Charlie"],
        last_names: &["Diaz", "Chen", "O'Neill", "Lopez"],
        ages: 25..=60,
        locations: &["Nashville, TN", "Madrid, ES", "Chicago, IL"],
        focus: Focus::Value,
    },
    Persona {
        label: "Parent Reviewer",
        first_names: &["Pat", "Kelly", "Dana", "Robin"],
        last_names: &["Williams", "Miller", "Wilson", "Davis"],
        ages: 30..=50,
        locations: &["Seattle, WA", "Paris, FR", "Toronto, CA"],
        focus: Focus::Durability,
    },
    Persona {
        label: "Outdoor Enthusiast",
        first_names: &["Blake", "Drew", "Harper", "Parker"],
        last_names: &["Hunt", "Stone", "Wells", "Fisher"],
        ages: 20..=55,
        locations: &["Denver, CO", "Vancouver, CA", "Rotorua, NZ"],
        focus: Focus::Weatherproofing,
    },
    Persona {
        label: "Home Chef",
        first_names: &["Maya", "Noah", "Liam", "Ivy"],
        last_names: &["Singh", "Martinez", "Rossi", "Keller"],
        ages: 24..=65,
        locations: &["Rome, IT", "Melbourne, AU", "Boston, MA"],
        focus: Focus::EaseOfUse,
    },
    Persona {
        label: "Audiophile",
        first_names: &["Evan", "Kai", "Zoe", "Nina"],
        last_names: &["Park", "Hernandez", "Lopez", "Morris"],
        ages: 18..=50,
        locations: &["Tokyo, JP", "Seoul, KR", "Brooklyn, NY"],
        focus: Focus::SoundQuality,
    },
    Persona {
        label: "Frequent Traveler",
        first_names: &["Chris", "Patrice", "Jo", "Samir"],
        last_names: &["Baker", "Singh", "Ali", "Johnson"],
        ages: 28..=58,
        locations: &["Dubai, AE", "Singapore, SG", "Los Angeles, CA"],
        focus: Focus::Portability,
    },
    Persona {
        label: "Pet Owner",
        first_names: &["Lena", "Omar", "Bea", "Hannah"],
        last_names: &["Ramirez", "Gonzalez", "Brown", "Evans"],
        ages: 21..=70,
        locations: &["Minneapolis, MN", "Dublin, IE", "Lima, PE"],
        focus: Focus::Safety,
    },
];

/// A concrete reviewer drawn from one of the personas.
#[derive(Debug, Clone, PartialEq)]
pub struct Reviewer {
    pub name: String,
    pub persona: &'static str,
    pub age: u32,
    pub location: &'static str,
    pub focus: Focus,
}

fn pick<R: Rng>(rng: &mut R, values: &'static [&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

pub struct PersonaProvider {
    personas: &'static [Persona],
}

impl Default for PersonaProvider {
    fn default() -> Self {
        Self {
            personas: &PERSONAS,
        }
    }
}

impl PersonaProvider {
    /// Draws persona, first name, last name, age and location, in that order.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Reviewer {
        let persona = &self.personas[rng.gen_range(0..self.personas.len())];
        let first = pick(rng, persona.first_names);
        let last = pick(rng, persona.last_names);
        let age = rng.gen_range(persona.ages.clone());
        let location = pick(rng, persona.locations);

        Reviewer {
            name: format!("{first} {last}"),
            persona: persona.label,
            age,
            location,
            focus: persona.focus,
        }
    }
}
