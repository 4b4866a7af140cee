//! Built-in name table for generated players.

use rand::seq::SliceRandom;
use rand::Rng;

pub const FIRST_NAMES: &[&str] = &[
    "Mantas", "Lukas", "Tomas", "Domantas", "Jonas", "Mindaugas", "Arvydas", "Šarūnas",
    "Donatas", "Paulius", "Rokas", "Ignas", "Deividas", "Karolis", "Martynas", "Edgaras",
    "Aurimas", "Giedrius", "Renaldas", "Eimantas", "Marius", "Dovydas", "Justas", "Linas",
    "Arnas", "Benas", "Vytautas", "Gediminas", "Andrius", "Žygimantas",
];

pub const LAST_NAMES: &[&str] = &[
    "Kazlauskas", "Jankauskas", "Petrauskas", "Stankevičius", "Vasiliauskas", "Žukauskas",
    "Butkus", "Paulauskas", "Urbonas", "Kavaliauskas", "Navickas", "Ramanauskas",
    "Savickas", "Rimkus", "Baranauskas", "Mockus", "Kairys", "Lukoševičius",
    "Vaitkus", "Bielskis", "Grigas", "Jonaitis", "Adomaitis", "Morkūnas",
    "Šimkus", "Tamošiūnas", "Valaitis", "Žilinskas", "Dambrauskas", "Mikalauskas",
];

pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Jonas");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Kazlauskas");
    format!("{first} {last}")
}
