//! The fixed 16-club universe.

use rand::Rng;

use super::ids::IdGenerator;
use super::players::generate_roster;
use crate::models::{round_half_up, Division, Team, LINEUP_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub division: Division,
    pub prestige: u8,
    pub color: &'static str,
    /// Listed budget; clubs start the game with half of it.
    pub budget: i64,
}

const fn template(
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    division: Division,
    prestige: u8,
    color: &'static str,
    budget: i64,
) -> TeamTemplate {
    TeamTemplate { id, name, short_name, division, prestige, color, budget }
}

pub const TEAM_TEMPLATES: [TeamTemplate; 16] = [
    // Upper
    template("kaunas_kings", "Kauno Karaliai", "KAR", Division::Upper, 4, "#1a237e", 380_000),
    template("vilnius_wolves", "Vilniaus Vilkai", "VIL", Division::Upper, 4, "#b71c1c", 360_000),
    template("klaipeda_sailors", "Klaipėdos Jūreiviai", "JUR", Division::Upper, 3, "#006064", 280_000),
    template("siauliai_suns", "Šiaulių Saulės", "SAU", Division::Upper, 3, "#1b5e20", 260_000),
    template("panevezys_storks", "Panevėžio Gandrai", "GAN", Division::Upper, 2, "#4a148c", 200_000),
    template("alytus_oaks", "Alytaus Ąžuolai", "AZU", Division::Upper, 2, "#e65100", 190_000),
    template("marijampole_hawks", "Marijampolės Vanagai", "VAN", Division::Upper, 2, "#880e4f", 185_000),
    template("utena_bears", "Utenos Lokiai", "LOK", Division::Upper, 2, "#f57f17", 180_000),
    // Lower
    template("pakruojis_foxes", "Pakruojo Lapės", "LAP", Division::Lower, 2, "#00838f", 130_000),
    template("svencionys_lynx", "Švenčionių Lūšys", "LUS", Division::Lower, 1, "#558b2f", 105_000),
    template("druskininkai_springs", "Druskininkų Versmės", "VER", Division::Lower, 1, "#6a1b9a", 100_000),
    template("kretinga_falcons", "Kretingos Sakalai", "SAK", Division::Lower, 1, "#c62828", 95_000),
    template("zarasai_lakes", "Zarasų Ežerai", "EZE", Division::Lower, 1, "#37474f", 90_000),
    template("birzai_brewers", "Biržų Aludariai", "ALU", Division::Lower, 1, "#4e342e", 88_000),
    template("neringa_dunes", "Neringos Kopos", "KOP", Division::Lower, 1, "#0277bd", 85_000),
    template("visaginas_atoms", "Visagino Atomai", "ATO", Division::Lower, 1, "#2e7d32", 83_000),
];

pub fn find_template(team_id: &str) -> Option<&'static TeamTemplate> {
    TEAM_TEMPLATES.iter().find(|t| t.id == team_id)
}

/// Initial roster size: deeper benches from prestige 3.
pub fn initial_roster_size(prestige: u8) -> usize {
    if prestige >= 3 {
        10
    } else {
        8
    }
}

/// Build every club with a fresh roster; the five best players start.
pub fn create_initial_teams<R: Rng + ?Sized>(ids: &mut IdGenerator, rng: &mut R) -> Vec<Team> {
    TEAM_TEMPLATES
        .iter()
        .map(|t| {
            let mut players = generate_roster(initial_roster_size(t.prestige), t.prestige, ids, rng);

            let mut by_overall: Vec<usize> = (0..players.len()).collect();
            by_overall.sort_by(|a, b| players[*b].overall.cmp(&players[*a].overall));
            for idx in by_overall.into_iter().take(LINEUP_SIZE) {
                players[idx].is_starter = true;
            }

            Team {
                id: t.id.to_string(),
                name: t.name.to_string(),
                short_name: t.short_name.to_string(),
                division: t.division,
                prestige: t.prestige,
                color: t.color.to_string(),
                budget: round_half_up(t.budget as f64 / 2.0),
                players,
            }
        })
        .collect()
}
