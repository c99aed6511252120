//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::{Zeroize, Zeroizing};

use super::charset::CharClass;
use super::validate::Composition;

/// Class order of the unshuffled buffer.
const DRAW_ORDER: [CharClass; 4] = [
    CharClass::Uppercase,
    CharClass::Special,
    CharClass::Digit,
    CharClass::Lowercase,
];

/// Generate a password for `composition` with the thread-local CSPRNG.
pub fn generate(composition: &Composition) -> Zeroizing<String> {
    generate_with(composition, &mut rand::thread_rng())
}

/// Draw every class with replacement, then shuffle the whole buffer.
pub fn generate_with<R: Rng + ?Sized>(composition: &Composition, rng: &mut R) -> Zeroizing<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(composition.length);

    for class in DRAW_ORDER {
        let alphabet = class.alphabet();
        buf.extend((0..composition.count(class)).map(|_| random_byte(alphabet, rng)));
    }

    buf.shuffle(rng);

    let password: String = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();
    Zeroizing::new(password)
}

#[inline]
fn random_byte<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}
