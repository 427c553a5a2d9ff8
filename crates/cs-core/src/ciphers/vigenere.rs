use crate::alphabet;
use crate::keys::VigenereKey;
use crate::types::Mode;

/// Encrypt `message` with the repeating keyword.
pub fn encrypt(message: &str, key: &VigenereKey) -> String {
    translate(message, key, Mode::Encryption)
}

/// Decrypt `message` with the repeating keyword.
pub fn decrypt(message: &str, key: &VigenereKey) -> String {
    translate(message, key, Mode::Decryption)
}

/// Shift the i-th alphabet letter of `message` by the key offset at
/// `i mod key length`. Characters outside the alphabet do not consume a
/// key position.
pub fn translate(message: &str, key: &VigenereKey, mode: Mode) -> String {
    let lang = key.language();
    let offsets = key.offsets();
    let mut processed_letters = 0;

    message
        .chars()
        .map(|c| {
            if !alphabet::is_member(lang, c) {
                return c;
            }

            let offset = offsets[processed_letters % offsets.len()] as i64;
            processed_letters += 1;

            let step = match mode {
                Mode::Encryption => offset,
                Mode::Decryption => -offset,
            };
            alphabet::shifted_letter(c, lang, step)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    #[test]
    fn attack_at_dawn() {
        let key = VigenereKey::new("KEY", Language::English).unwrap();
        let encrypted = encrypt("ATTACKATDAWN", &key);
        assert_eq!(encrypted, "KXRKGIKXBKAL");
        assert_eq!(decrypt(&encrypted, &key), "ATTACKATDAWN");
    }

    #[test]
    fn noise_does_not_consume_key() {
        let key = VigenereKey::new("KEY", Language::English).unwrap();
        assert_eq!(encrypt("Attack at dawn!", &key), "Kxrkgi kx bkal!");
    }

    #[test]
    fn empty_key_is_identity() {
        let key = VigenereKey::new("", Language::Spanish).unwrap();
        assert_eq!(encrypt("Cigüeña", &key), "Cigüeña");
    }

    #[test]
    fn spanish_roundtrip() {
        let key = VigenereKey::new("ÑANDU", Language::Spanish).unwrap();
        let message = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme";
        let encrypted = encrypt(message, &key);
        assert_ne!(encrypted, message);
        assert_eq!(decrypt(&encrypted, &key), message);
    }
}
