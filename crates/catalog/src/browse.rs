//! Filtering, grouping and sorting helpers used when browsing a symbol set.
//!
//! Tarot card ids follow the deck's Spanish naming (`el-loco`, `tres-de-copas`),
//! which is what the suit and rank rules below key on.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::Serialize;
use shared::domain::SymbolId;

use crate::records::SymbolRecord;

const LEADING_ARTICLES: [&str; 4] = ["el", "la", "los", "las"];

/// Replaces accented Latin letters with their unaccented base letter.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Á' | 'À' | 'Ä' | 'Â' => 'A',
            'É' | 'È' | 'Ë' | 'Ê' => 'E',
            'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
            'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
            'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
            'ñ' => 'n',
            'Ñ' => 'N',
            'ç' => 'c',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

pub(crate) fn name_sort_key(name: &str) -> String {
    fold_accents(name).to_lowercase()
}

/// Index letter for a display name: leading article dropped, accents folded,
/// uppercased. `"El Ermitaño"` files under `E`, `"Los Enamorados"` under `E`.
pub fn sort_key_letter(name: &str) -> Option<char> {
    let trimmed = name.trim();
    let without_article = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest))
            if LEADING_ARTICLES
                .iter()
                .any(|article| first.eq_ignore_ascii_case(article)) =>
        {
            rest.trim_start()
        }
        _ => trimmed,
    };
    fold_accents(without_article)
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
}

/// Distinct index letters of the given symbols, sorted.
pub fn letters<'a>(symbols: impl IntoIterator<Item = &'a SymbolRecord>) -> Vec<char> {
    symbols
        .into_iter()
        .filter_map(|symbol| sort_key_letter(&symbol.name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Symbols filed under `letter`, sorted by display name.
pub fn by_letter<'a>(
    symbols: impl IntoIterator<Item = &'a SymbolRecord>,
    letter: char,
) -> Vec<&'a SymbolRecord> {
    let letter = letter.to_ascii_uppercase();
    let mut matching: Vec<&SymbolRecord> = symbols
        .into_iter()
        .filter(|symbol| sort_key_letter(&symbol.name) == Some(letter))
        .collect();
    matching.sort_by_key(|symbol| name_sort_key(&symbol.name));
    matching
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Bastos,
    Copas,
    Espadas,
    Oros,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Bastos, Suit::Copas, Suit::Espadas, Suit::Oros];

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Bastos => "bastos",
            Suit::Copas => "copas",
            Suit::Espadas => "espadas",
            Suit::Oros => "oros",
        }
    }

    /// Suit encoded in a minor arcana id (`siete-de-espadas`).
    pub fn of(symbol_id: &SymbolId) -> Option<Suit> {
        let id = crate::normalize_symbol_id(symbol_id.as_str());
        Suit::ALL
            .into_iter()
            .find(|suit| id.ends_with(&format!("-de-{}", suit.as_str())))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = name_sort_key(value.trim());
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == folded)
            .ok_or_else(|| format!("unknown suit '{value}' (expected bastos, copas, espadas or oros)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcanaCategory {
    Major,
    Minor,
}

impl ArcanaCategory {
    pub fn of(symbol_id: &SymbolId) -> ArcanaCategory {
        if Suit::of(symbol_id).is_some() {
            ArcanaCategory::Minor
        } else {
            ArcanaCategory::Major
        }
    }
}

const RANK_WORDS: [(&str, u8); 14] = [
    ("as", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("sota", 11),
    ("caballero", 12),
    ("reina", 13),
    ("rey", 14),
];

/// Rank of a minor arcana card from its display name: As = 1 through Rey = 14.
/// Matches whole words only.
pub fn rank(name: &str) -> Option<u8> {
    let folded = name_sort_key(name);
    folded.split_whitespace().find_map(|word| {
        RANK_WORDS
            .iter()
            .find(|(rank_word, _)| *rank_word == word)
            .map(|(_, value)| *value)
    })
}

/// Minor arcana of one suit, split into the four bands shown when browsing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SuitGroups<'a> {
    pub ace_to_five: Vec<&'a SymbolRecord>,
    pub six_to_ten: Vec<&'a SymbolRecord>,
    pub page_and_knight: Vec<&'a SymbolRecord>,
    pub queen_and_king: Vec<&'a SymbolRecord>,
}

impl<'a> SuitGroups<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a SymbolRecord> + '_ {
        self.ace_to_five
            .iter()
            .chain(&self.six_to_ten)
            .chain(&self.page_and_knight)
            .chain(&self.queen_and_king)
            .copied()
    }
}

pub fn suit_groups<'a>(
    symbols: impl IntoIterator<Item = &'a SymbolRecord>,
    suit: Suit,
) -> SuitGroups<'a> {
    let mut ranked: Vec<(u8, &SymbolRecord)> = symbols
        .into_iter()
        .filter(|symbol| Suit::of(&symbol.id) == Some(suit))
        .filter_map(|symbol| rank(&symbol.name).map(|value| (value, symbol)))
        .collect();
    ranked.sort_by_key(|(value, _)| *value);

    let mut groups = SuitGroups::default();
    for (value, symbol) in ranked {
        match value {
            1..=5 => groups.ace_to_five.push(symbol),
            6..=10 => groups.six_to_ten.push(symbol),
            11 | 12 => groups.page_and_knight.push(symbol),
            _ => groups.queen_and_king.push(symbol),
        }
    }
    groups
}

/// Major arcana among the given symbols.
pub fn major_arcana<'a>(
    symbols: impl IntoIterator<Item = &'a SymbolRecord>,
) -> Vec<&'a SymbolRecord> {
    symbols
        .into_iter()
        .filter(|symbol| ArcanaCategory::of(&symbol.id) == ArcanaCategory::Major)
        .collect()
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
