// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Russian morphological stemmer.
//!
//! A rule-ordered suffix stripper in the Snowball tradition: compute the RV
//! region (one past the first vowel), then walk a fixed sequence of suffix
//! tables, removing at most one suffix per step. Every removal is guarded by
//! RV - the remainder may never become shorter than the region floor, which
//! is what keeps stems non-empty.
//!
//! The suffix lists are data, not code. Each table is tried in order and the
//! first suffix that matches (and passes its guard) wins, so a single driver
//! serves every step. Two tables carry an extra guard: the character
//! immediately preceding the suffix must be `а` or `я` (perfective gerunds
//! and the first verb group).
//!
//! Step order is observable and deliberately fixed:
//!
//! 1. perfective gerund / reflexive + (adjective | verb | noun)
//! 2. trailing `и`
//! 3. derivational `ост`/`ость`
//! 4. superlative `ейше`/`ейш`, then `нн` → `н`, then trailing `ь`
//!
//! The algorithm is not idempotent (красивая → красив, and красив → крас on
//! a second pass: `ив` reads as a perfective-gerund ending once the
//! adjectival one is gone). Callers stem each surface form exactly once, on
//! both the indexing and the query path, so the same form always maps to the
//! same stem.

/// The ten Russian vowels. Note ё is its own letter here, not a variant of е.
const VOWELS: &str = "аеиоуыэюяё";

/// Perfective gerund endings that require а/я immediately before them.
const PERFECTIVE_GERUND_AFTER_A: &[&str] = &["вши", "вшись", "в"];

/// Perfective gerund endings with the vowel built in.
const PERFECTIVE_GERUND: &[&str] = &["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"];

const REFLEXIVE: &[&str] = &["ся", "сь"];

const ADJECTIVE: &[&str] = &[
    "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом", "его",
    "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];

/// Verb endings that require а/я immediately before them.
const VERB_AFTER_A: &[&str] = &[
    "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны", "ть",
    "ешь", "нно",
];

const VERB: &[&str] = &[
    "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл", "им", "ым",
    "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены", "ить", "ыть", "ишь", "ую",
    "ю",
];

const NOUN: &[&str] = &[
    "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей", "ой",
    "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы", "ь", "ию",
    "ью", "ю", "ия", "ья", "я",
];

const DERIVATIONAL: &[&str] = &["ост", "ость"];

const SUPERLATIVE: &[&str] = &["ейше", "ейш"];

#[inline]
fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Stem one lowercased word.
///
/// Words without a vowel come back unchanged, as do words whose every
/// candidate suffix would cut below the RV floor.
pub fn stem(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    stem_in_place(&mut chars);
    chars.into_iter().collect()
}

/// Stem a word already split into scalar values. The analyzer calls this
/// directly to avoid re-collecting the buffer it just segmented.
pub(crate) fn stem_chars(mut chars: Vec<char>) -> String {
    stem_in_place(&mut chars);
    chars.into_iter().collect()
}

/// Offset one past the first vowel, the floor below which no suffix removal
/// may cut. `None` when the word has no vowel at all.
fn rv_offset(word: &[char]) -> Option<usize> {
    word.iter().position(|&c| is_vowel(c)).map(|i| i + 1)
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let n = suffix.chars().count();
    if word.len() < n {
        return false;
    }
    word[word.len() - n..].iter().copied().eq(suffix.chars())
}

/// Remove `suffix` if it ends the word and the remainder stays >= `rv`.
fn strip(word: &mut Vec<char>, suffix: &str, rv: usize) -> bool {
    if !ends_with(word, suffix) {
        return false;
    }
    let rest = word.len() - suffix.chars().count();
    if rest >= rv {
        word.truncate(rest);
        return true;
    }
    false
}

/// Try each suffix in table order; first successful removal wins.
fn strip_any(word: &mut Vec<char>, table: &[&str], rv: usize) -> bool {
    table.iter().any(|suffix| strip(word, suffix, rv))
}

/// Like `strip_any`, but the character before the suffix must be а or я.
/// A suffix that matches textually but fails the guard does not consume the
/// attempt; scanning continues with the next table entry.
fn strip_any_after_a(word: &mut Vec<char>, table: &[&str], rv: usize) -> bool {
    for suffix in table {
        if !ends_with(word, suffix) {
            continue;
        }
        let rest = word.len() - suffix.chars().count();
        if rest >= rv && rest > 0 && matches!(word[rest - 1], 'а' | 'я') {
            word.truncate(rest);
            return true;
        }
    }
    false
}

fn stem_in_place(word: &mut Vec<char>) {
    let rv = match rv_offset(word) {
        Some(rv) => rv,
        None => return,
    };

    // Step 1: exactly one of the ending families, tried in fixed order.
    let mut ending_removed = strip_any_after_a(word, PERFECTIVE_GERUND_AFTER_A, rv);
    if !ending_removed {
        ending_removed = strip_any(word, PERFECTIVE_GERUND, rv);
    }
    if !ending_removed {
        // Reflexive particle comes off first and does not settle step 1.
        strip_any(word, REFLEXIVE, rv);

        if !strip_any(word, ADJECTIVE, rv) {
            let mut verb_removed = strip_any_after_a(word, VERB_AFTER_A, rv);
            if !verb_removed {
                verb_removed = strip_any(word, VERB, rv);
            }
            if !verb_removed {
                strip_any(word, NOUN, rv);
            }
        }
    }

    // Step 2: trailing и.
    strip(word, "и", rv);

    // Step 3: derivational.
    strip_any(word, DERIVATIONAL, rv);

    // Step 4: superlative, double н, soft sign.
    strip_any(word, SUPERLATIVE, rv);
    if ends_with(word, "нн") && word.len() - 2 >= rv {
        word.pop();
    }
    if ends_with(word, "ь") && word.len() - 1 >= rv {
        word.pop();
    }
}
